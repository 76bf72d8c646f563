//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + controls row + counters row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Controls and counters
    pub header: Rect,

    /// Event log (glass container)
    pub events: Rect,

    /// One-line status bar: filters, scroll mode, notice, key hints
    pub status: Rect,
}

/// Split the screen into header, event log and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        events: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.events.y, HEADER_HEIGHT);
        assert_eq!(layout.events.height, 24 - HEADER_HEIGHT - 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.events.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_small_terminal_keeps_status_bar() {
        let area = Rect::new(0, 0, 40, 9);
        let layout = create(area);
        assert_eq!(layout.status.height, 1);
        assert!(layout.events.height >= 3);
    }
}
