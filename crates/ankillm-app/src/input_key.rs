//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the handlers in this crate never depend on a terminal backend.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Backspace,
}
