//! Semantic style builders for the dashboard.

use psmon_core::{Category, Level};
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

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
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

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---
/// "Black on Cyan" for the selected event row
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
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Event styles ---

/// Style for an event level - returns (icon_style, message_style)
pub fn level_styles(level: Level) -> (Style, Style) {
    match level {
        Level::Error => (
            Style::default()
                .fg(palette::LEVEL_ERROR)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette::LEVEL_ERROR_MSG),
        ),
        Level::Warn => (
            Style::default()
                .fg(palette::LEVEL_WARN)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette::LEVEL_WARN_MSG),
        ),
        Level::Info => (
            Style::default().fg(palette::LEVEL_INFO),
            Style::default().fg(palette::LEVEL_INFO_MSG),
        ),
        Level::Debug => (
            Style::default().fg(palette::LEVEL_DEBUG),
            Style::default().fg(palette::LEVEL_DEBUG_MSG),
        ),
    }
}

pub fn level_icon(level: Level) -> &'static str {
    match level {
        Level::Error => "✗",
        Level::Warn => "⚠",
        Level::Info => "•",
        Level::Debug => "·",
    }
}

pub fn category_style(category: Category) -> Style {
    let color = match category {
        Category::Network => palette::CATEGORY_NETWORK,
        Category::Tracker => palette::CATEGORY_TRACKER,
        Category::Webrtc => palette::CATEGORY_WEBRTC,
        Category::Ipv6 => palette::CATEGORY_IPV6,
        Category::Security => palette::CATEGORY_SECURITY,
        Category::General => palette::CATEGORY_GENERAL,
    };
    Style::default().fg(color)
}

// --- Control indicators ---

/// Indicator for a binary collaborator setting.
///
/// Returns `(icon, Style)`: a pending command shows the hollow marker in
/// yellow regardless of the confirmed value.
pub fn control_indicator(on: bool, pending: bool) -> (&'static str, Style) {
    match (pending, on) {
        (true, _) => ("◌", status_yellow().add_modifier(Modifier::BOLD)),
        (false, true) => ("●", status_green().add_modifier(Modifier::BOLD)),
        (false, false) => ("○", status_red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_selected_row_is_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_level_icons_distinct() {
        let icons = [
            level_icon(Level::Debug),
            level_icon(Level::Info),
            level_icon(Level::Warn),
            level_icon(Level::Error),
        ];
        for (i, a) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_control_indicator_pending_wins() {
        let (icon, style) = control_indicator(true, true);
        assert_eq!(icon, "◌");
        assert_eq!(style.fg, Some(palette::STATUS_YELLOW));

        assert_eq!(control_indicator(true, false).0, "●");
        assert_eq!(control_indicator(false, false).1.fg, Some(palette::STATUS_RED));
    }

    #[test]
    fn test_security_category_is_red() {
        assert_eq!(
            category_style(Category::Security).fg,
            Some(palette::CATEGORY_SECURITY)
        );
    }
}
