//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the row under the cursor across lists
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Glass block with a title in the top border
pub fn titled_block(title: &str, focused: bool) -> Block<'static> {
    glass_block(focused).title(format!(" {title} ")).title_style(if focused {
        accent_bold()
    } else {
        text_secondary()
    })
}
