//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum width for the side-by-side review layout
const MIN_SPLIT_WIDTH: u16 = 60;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Active screen body
    pub content: Rect,

    /// Key hints and status line (glass container)
    pub footer: Rect,
}

/// Split the terminal into header, content and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(3), // Top border + hint row + bottom border
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Split the review content into note list and preview.
///
/// Wide terminals place them side by side, narrow ones stack them.
pub fn review_panes(content: Rect) -> (Rect, Rect) {
    let chunks = if content.width >= MIN_SPLIT_WIDTH {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(content)
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(content)
    };
    (chunks[0], chunks[1])
}
