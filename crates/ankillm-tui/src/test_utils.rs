//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use std::collections::BTreeSet;
use std::path::PathBuf;

use ankillm_app::{AppState, DeckCatalog, Screen};
use ankillm_core::Note;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
///
/// For single widgets use [`TestTerminal::render_widget`]; for full frames
/// (like `render::view`) use [`TestTerminal::draw_with`].
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState on the review screen with `n` generated notes and two known decks
pub fn review_state(n: usize) -> AppState {
    let mut state = AppState::new(PathBuf::from("/nonexistent-dir-for-tests"), "Basic");
    state.screen = Screen::Review;
    state.status.clear();
    state.file_path = Some(PathBuf::from("/tmp/biology.pdf"));
    state.decks = DeckCatalog::new(vec!["Default".into(), "French".into()]);
    state.replace_notes(
        (0..n)
            .map(|i| Note::basic(format!("Question {i}"), format!("Answer {i}")))
            .collect(),
    );
    state.selection = BTreeSet::new();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_compact_terminal() {
        let term = TestTerminal::compact();
        assert_eq!(term.area().width, COMPACT_WIDTH);
        assert_eq!(term.area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(1, "Hello"));
    }

    #[test]
    fn test_review_state_fixture() {
        let state = review_state(3);
        assert!(state.screen.is_review());
        assert_eq!(state.notes.len(), 3);
        assert_eq!(state.decks.active, "Default");
    }
}
