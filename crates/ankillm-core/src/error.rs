//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Startup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Startup failed: {message}")]
    Startup { message: String },

    #[error("Missing credential: set the {var} environment variable")]
    MissingCredential { var: &'static str },

    #[error("Failed to build HTTP client: {message}")]
    HttpClient { message: String },

    #[error("PDF file not found: {path}")]
    DocumentNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Remote Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Anki { message: String },

    #[error("{message}")]
    Llm { message: String },

    #[error("note template {0:?} not found")]
    UnknownTemplate(String),

    #[error("note generation timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("cancelled")]
    Cancelled,

    // ─────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to install {signal} handler: {source}")]
    SignalHandler {
        signal: &'static str,
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    pub fn signal(signal: &'static str, source: std::io::Error) -> Self {
        Self::SignalHandler { signal, source }
    }

    pub fn http_client(message: impl Into<String>) -> Self {
        Self::HttpClient {
            message: message.into(),
        }
    }

    pub fn anki(message: impl Into<String>) -> Self {
        Self::Anki {
            message: message.into(),
        }
    }

    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn document_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DocumentNotFound { path: path.into() }
    }

    /// Errors that retrying cannot fix until the user changes their setup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Startup { .. }
                | Error::MissingCredential { .. }
                | Error::HttpClient { .. }
                | Error::DocumentNotFound { .. }
                | Error::TerminalInit(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
