//! Flashcard domain types

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Field name holding the question side of a Basic note
pub const FRONT_FIELD: &str = "Front";

/// Field name holding the answer side of a Basic note
pub const BACK_FIELD: &str = "Back";

/// Raw note fields, keyed by Anki field name
pub type NoteFields = BTreeMap<String, String>;

/// A single generated flashcard.
///
/// `front` and `back` are display copies of the `Front`/`Back` fields;
/// `fields` is what gets submitted to Anki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub front: String,
    pub back: String,
    pub fields: NoteFields,
}

impl Note {
    /// Build a note from raw fields. Missing `Front`/`Back` become empty.
    pub fn from_fields(fields: NoteFields) -> Self {
        let front = fields.get(FRONT_FIELD).cloned().unwrap_or_default();
        let back = fields.get(BACK_FIELD).cloned().unwrap_or_default();
        Self {
            front,
            back,
            fields,
        }
    }

    /// Convenience constructor for a Basic note
    pub fn basic(front: impl Into<String>, back: impl Into<String>) -> Self {
        let mut fields = NoteFields::new();
        fields.insert(FRONT_FIELD.to_string(), front.into());
        fields.insert(BACK_FIELD.to_string(), back.into());
        Self::from_fields(fields)
    }
}

/// Note models the generator knows how to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteTemplate {
    #[default]
    Basic,
}

impl NoteTemplate {
    /// Anki model name
    pub fn name(&self) -> &'static str {
        match self {
            NoteTemplate::Basic => "Basic",
        }
    }

    /// Fields every generated note of this template must carry
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            NoteTemplate::Basic => &[FRONT_FIELD, BACK_FIELD],
        }
    }
}

impl fmt::Display for NoteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(NoteTemplate::Basic),
            other => Err(Error::UnknownTemplate(other.to_string())),
        }
    }
}
