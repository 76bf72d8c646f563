//! Placement and backdrop helpers for modal dialogs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// A `width` × `height` rect centered in `area`, shrunk to fit if needed.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Mute everything in `area` so the dialog stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for pos in area.positions() {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_style(dim);
        }
    }
}

/// One-cell drop shadow along the right and bottom edges of `rect`.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = rect.right();
    let bottom = rect.bottom();

    let right_edge = (rect.y + 1..=bottom).map(|y| (right, y));
    let bottom_edge = (rect.x + 1..=right).map(|x| (x, bottom));
    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}
