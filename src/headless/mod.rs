//! Headless mode - NDJSON progress events instead of the TUI
//!
//! `anki-llm --pdf <path> --deck <name>` creates (or reuses) the deck,
//! generates notes from the PDF and submits all of them. Progress is written
//! to stdout as NDJSON (newline-delimited JSON), one event per line, each with
//! an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","pdf":"lecture.pdf","deck":"Biology","timestamp":1704700001000}
//! {"event":"deck_ready","deck":"Biology","timestamp":1704700001050}
//! {"event":"note_generated","front":"What is ATP?","timestamp":1704700009000}
//! {"event":"notes_added","deck":"Biology","count":1,"timestamp":1704700009100}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub use runner::{run_headless, HeadlessRequest};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Run accepted, nothing contacted yet
    Started {
        pdf: String,
        deck: String,
        timestamp: i64,
    },

    /// Target deck exists
    DeckReady { deck: String, timestamp: i64 },

    /// One generated note, in generation order
    NoteGenerated { front: String, timestamp: i64 },

    /// Every generated note was submitted
    NotesAdded {
        deck: String,
        count: usize,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(pdf: &str, deck: &str) -> Self {
        Self::Started {
            pdf: pdf.to_string(),
            deck: deck.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn deck_ready(deck: &str) -> Self {
        Self::DeckReady {
            deck: deck.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn note_generated(front: &str) -> Self {
        Self::NoteGenerated {
            front: front.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn notes_added(deck: &str, count: usize) -> Self {
        Self::NotesAdded {
            deck: deck.to_string(),
            count,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the "event" field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::DeckReady { .. } => "deck_ready",
            Self::NoteGenerated { .. } => "note_generated",
            Self::NotesAdded { .. } => "notes_added",
            Self::Error { .. } => "error",
        }
    }
}
