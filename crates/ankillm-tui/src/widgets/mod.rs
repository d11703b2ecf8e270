//! Custom widget components

mod deck_input;
mod deck_list;
mod file_list;
mod footer;
mod header;
mod note_list;
mod note_preview;

pub use deck_input::DeckInput;
pub use deck_list::DeckList;
pub use file_list::FileList;
pub use footer::{hints_for, Footer};
pub use header::MainHeader;
pub use note_list::NoteList;
pub use note_preview::NotePreview;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to `max_width` display columns, ending in "..." when cut.
///
/// Measures display width, so wide characters (CJK, emoji) count as two
/// columns and are never split.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Truncates from the left, keeping the tail visible ("...tail").
///
/// Used for directory paths, where the innermost components matter most.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(c);
    }
    let tail: String = tail.into_iter().rev().collect();
    format!("...{tail}")
}

/// First line of a possibly multi-line field, for single-row list display
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
