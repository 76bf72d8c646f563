//! Color palette for the dashboard.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Connected / active protection
pub const STATUS_RED: Color = Color::Red; // Disconnected / unreachable
pub const STATUS_YELLOW: Color = Color::Yellow; // Pending command
pub const STATUS_BLUE: Color = Color::Blue;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Event level colors ---
pub const LEVEL_ERROR: Color = Color::Red;
pub const LEVEL_ERROR_MSG: Color = Color::LightRed;
pub const LEVEL_WARN: Color = Color::Yellow;
pub const LEVEL_WARN_MSG: Color = Color::Yellow;
pub const LEVEL_INFO: Color = Color::Green;
pub const LEVEL_INFO_MSG: Color = Color::White;
pub const LEVEL_DEBUG: Color = Color::DarkGray;
pub const LEVEL_DEBUG_MSG: Color = Color::DarkGray;

// --- Event category colors ---
pub const CATEGORY_NETWORK: Color = Color::Blue;
pub const CATEGORY_TRACKER: Color = Color::Magenta;
pub const CATEGORY_WEBRTC: Color = Color::Cyan;
pub const CATEGORY_IPV6: Color = Color::LightBlue;
pub const CATEGORY_SECURITY: Color = Color::Red;
pub const CATEGORY_GENERAL: Color = Color::Gray;

// --- Expanded detail rows ---
pub const DETAIL_LABEL: Color = Color::DarkGray;
pub const DETAIL_VALUE: Color = Color::Gray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protection_categories_are_distinct() {
        let colors = [
            CATEGORY_TRACKER,
            CATEGORY_WEBRTC,
            CATEGORY_IPV6,
            CATEGORY_SECURITY,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_level_stands_out_from_info() {
        assert_ne!(LEVEL_ERROR, LEVEL_INFO);
        assert_ne!(LEVEL_ERROR_MSG, LEVEL_INFO_MSG);
    }
}
