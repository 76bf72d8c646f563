//! Status bar widget
//!
//! Displays active filters, scroll mode, log position, and either the current
//! notice or the key hints.

use psmon_app::state::{AppState, NoticeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const KEY_HINTS: &[(&str, &str)] = &[
    ("c", "connect"),
    ("K", "kill switch"),
    ("x", "exit"),
    ("f", "category"),
    ("l", "level"),
    ("Enter", "details"),
    ("a", "auto"),
    ("S", "shutdown"),
    ("q", "quit"),
];

/// One-line status bar under the event log
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn filter_span(&self) -> Span<'static> {
        let filter = self.state.filter;
        let style = if filter.is_active() {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        Span::styled(
            format!(
                "{} · {}",
                filter.category.display_name(),
                filter.level.display_name()
            ),
            style,
        )
    }

    fn scroll_indicator(&self) -> Span<'static> {
        if self.state.log_view_state.auto_scroll {
            Span::styled("⬇ Auto", styles::status_green())
        } else {
            Span::styled("⬆ Manual", styles::status_yellow())
        }
    }

    fn log_position(&self) -> String {
        let view = &self.state.log_view_state;
        if view.total_lines == 0 {
            "0/0".to_string()
        } else {
            let first = view.offset + 1;
            let last = (view.offset + view.visible_lines).min(view.total_lines);
            format!("{}-{}/{}", first, last, view.total_lines)
        }
    }

    fn trailing_spans(&self) -> Vec<Span<'static>> {
        if let Some(notice) = &self.state.notice {
            let style = match notice.kind {
                NoticeKind::Info => Style::default().fg(palette::STATUS_BLUE),
                NoticeKind::Error => styles::status_red().add_modifier(Modifier::BOLD),
            };
            return vec![Span::styled(notice.text.clone(), style)];
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
        }
        spans
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::border_inactive());
        let mut spans = vec![
            Span::raw(" "),
            self.filter_span(),
            separator.clone(),
            self.scroll_indicator(),
            separator.clone(),
            Span::styled(self.log_position(), styles::text_secondary()),
            separator,
        ];
        spans.extend(self.trailing_spans());
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments()))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use psmon_core::{CategoryFilter, LevelFilter};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(140, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_default_status_shows_hints() {
        let state = AppState::new();
        let term = render(&state);
        assert!(term.buffer_contains("Everything · All levels"));
        assert!(term.buffer_contains("Auto"));
        assert!(term.buffer_contains("0/0"));
        assert!(term.buffer_contains("K kill switch"));
    }

    #[test]
    fn test_manual_scroll_indicator() {
        let mut state = AppState::new();
        state.log_view_state.set_auto_scroll(false);
        let term = render(&state);
        assert!(term.buffer_contains("Manual"));
    }

    #[test]
    fn test_active_filters_shown() {
        let mut state = AppState::new();
        state.filter.category = CategoryFilter::Tracker;
        state.filter.level = LevelFilter::Warn;
        let term = render(&state);
        assert!(term.buffer_contains("Trackers · Warnings"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut state = AppState::new();
        state.set_notice("Connect failed: refused", NoticeKind::Error);
        let term = render(&state);
        assert!(term.buffer_contains("Connect failed: refused"));
        assert!(!term.buffer_contains("kill switch"));
    }

    #[test]
    fn test_log_position() {
        let mut state = AppState::new();
        state.log_view_state.update_content_size(50, 10, None);
        state.log_view_state.offset = 5;
        let term = render(&state);
        assert!(term.buffer_contains("6-15/50"));
    }
}
