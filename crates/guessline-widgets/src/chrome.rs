//! Convenience helpers for common widget chrome patterns.

use std::rc::Rc;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

/// Width of one letter cell, borders included.
pub const CELL_WIDTH: u16 = 5;

/// Height of one letter cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Create a bordered block with focus-dependent border color.
///
/// Uses cyan when focused, dark gray when unfocused. Suitable as a
/// default chrome for any widget.
pub fn title_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::new()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}

/// Split `area` into `count` letter cells of [`CELL_WIDTH`], left-aligned.
pub fn slot_cells(area: Rect, count: usize) -> Rc<[Rect]> {
    Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); count]).split(area)
}
