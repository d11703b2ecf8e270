//! # ankillm-core - Core Domain Types
//!
//! Foundation crate for anki-llm. Provides the flashcard domain types, error
//! handling and logging setup shared by every other crate in the workspace.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Notes (`note`)
//! - [`Note`] - A generated flashcard (front/back plus raw fields)
//! - [`NoteFields`] - Raw field mapping submitted to Anki
//! - [`NoteTemplate`] - Supported note models (only "Basic")
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ankillm_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod note;

/// Prelude for common imports used throughout all anki-llm crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use note::{Note, NoteFields, NoteTemplate, BACK_FIELD, FRONT_FIELD};
