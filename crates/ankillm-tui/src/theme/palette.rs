//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on an accent background

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
