//! Styling constants for event rows and their detail lines

use ratatui::style::{Modifier, Style};

use crate::theme::palette;

/// Timestamp column
pub const TIMESTAMP: Style = Style::new().fg(palette::TEXT_MUTED);

/// Expand marker on rows that carry details
pub const EXPAND_MARKER: Style = Style::new().fg(palette::ACCENT);

/// Detail label ("Domain:", "Reason:")
pub const DETAIL_LABEL: Style = Style::new()
    .fg(palette::DETAIL_LABEL)
    .add_modifier(Modifier::BOLD);

/// Detail value
pub const DETAIL_VALUE: Style = Style::new().fg(palette::DETAIL_VALUE);

/// Guide drawn in front of detail lines
pub const DETAIL_GUIDE: Style = Style::new().fg(palette::BORDER_DIM);

/// Indentation for detail lines
pub const INDENT: &str = "      ";

pub const MARKER_COLLAPSED: &str = "▸";
pub const MARKER_EXPANDED: &str = "▾";
