//! Dashboard header
//!
//! Two rows inside a glass container: the collaborator controls with the
//! link health on the right, then the protection counters.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use psmon_app::state::{Control, PollHealth};
use psmon_core::{exit_country_name, Snapshot};

use crate::theme::{palette, styles};

/// Header showing connection controls and the latest counters
pub struct DashboardHeader<'a> {
    snapshot: Option<&'a Snapshot>,
    connection: &'a Control<bool>,
    kill_switch: &'a Control<bool>,
    exit_country: &'a Control<Option<String>>,
    health: &'a PollHealth,
}

impl<'a> DashboardHeader<'a> {
    pub fn new(
        snapshot: Option<&'a Snapshot>,
        connection: &'a Control<bool>,
        kill_switch: &'a Control<bool>,
        exit_country: &'a Control<Option<String>>,
        health: &'a PollHealth,
    ) -> Self {
        Self {
            snapshot,
            connection,
            kill_switch,
            exit_country,
            health,
        }
    }

    fn connection_spans(&self) -> Vec<Span<'static>> {
        let (icon, style) =
            styles::control_indicator(*self.connection.confirmed(), self.connection.is_pending());
        let label = match self.connection.pending() {
            Some(true) => "Connecting…",
            Some(false) => "Disconnecting…",
            None if *self.connection.confirmed() => "Connected",
            None => "Disconnected",
        };
        vec![
            Span::raw(" "),
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
        ]
    }

    fn kill_switch_spans(&self) -> Vec<Span<'static>> {
        let (_, style) =
            styles::control_indicator(*self.kill_switch.confirmed(), self.kill_switch.is_pending());
        let label = match self.kill_switch.pending() {
            Some(true) => "ON (pending)",
            Some(false) => "OFF (pending)",
            None if *self.kill_switch.confirmed() => "ON",
            None => "OFF",
        };
        vec![
            Span::styled("Kill switch ", styles::text_secondary()),
            Span::styled(label, style),
        ]
    }

    fn exit_country_spans(&self) -> Vec<Span<'static>> {
        let (code, pending) = match self.exit_country.pending() {
            Some(requested) => (requested.as_deref(), true),
            None => (self.exit_country.confirmed().as_deref(), false),
        };
        let mut name = exit_country_name(code).to_string();
        if pending {
            name.push_str(" (pending)");
        }
        let style = if pending {
            styles::status_yellow()
        } else {
            styles::text_primary()
        };
        vec![
            Span::styled("Exit ", styles::text_secondary()),
            Span::styled(name, style),
        ]
    }

    fn link_span(&self) -> Span<'static> {
        let failures = self.health.consecutive_failures();
        if self.health.is_linked() && failures == 0 {
            Span::styled("● linked ", styles::status_green())
        } else if failures > 0 {
            Span::styled(format!("✗ unreachable ({failures}) "), styles::status_red())
        } else {
            Span::styled("◌ waiting… ", styles::text_muted())
        }
    }

    fn controls_line(&self) -> (Line<'static>, Span<'static>) {
        let separator = Span::styled("  │  ", styles::border_inactive());
        let mut spans = self.connection_spans();
        spans.push(separator.clone());
        spans.extend(self.kill_switch_spans());
        spans.push(separator);
        spans.extend(self.exit_country_spans());
        (Line::from(spans), self.link_span())
    }

    fn counters_line(&self) -> Line<'static> {
        let Some(snap) = self.snapshot else {
            return Line::from(Span::styled(
                " No data from collaborator yet",
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ));
        };

        let counter = |label: &'static str, value: String, style: Style| {
            [
                Span::styled(format!(" {label} "), styles::text_muted()),
                Span::styled(value, style),
            ]
        };
        let value_style = styles::text_primary().add_modifier(Modifier::BOLD);
        let threats_style = if snap.security_threats_detected > 0 {
            styles::status_red().add_modifier(Modifier::BOLD)
        } else {
            value_style
        };

        let mut spans = Vec::new();
        spans.extend(counter("Blocked", snap.requests_blocked.to_string(), value_style));
        spans.extend(counter("Trackers", snap.trackers_blocked.to_string(), value_style));
        spans.extend(counter("WebRTC", snap.webrtc_blocked.to_string(), value_style));
        spans.extend(counter("IPv6", snap.ipv6_blocked.to_string(), value_style));
        spans.extend(counter(
            "Threats",
            snap.security_threats_detected.to_string(),
            threats_style,
        ));
        spans.extend(counter("Requests", snap.total_requests.to_string(), value_style));
        spans.extend(counter(
            "Rate",
            format!("{}%", snap.block_rate_percent()),
            Style::default().fg(palette::ACCENT),
        ));
        spans.extend(counter("Up", snap.uptime_display(), styles::text_secondary()));
        Line::from(spans)
    }
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Privacy Suite Monitor ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (controls, link) = self.controls_line();
        let controls_area = Rect { height: 1, ..inner };
        Paragraph::new(controls).render(controls_area, buf);

        // Link health is right-aligned when it fits beside the controls
        let link_width = link.width() as u16;
        if link_width < inner.width {
            let link_area = Rect {
                x: inner.x + inner.width - link_width,
                y: inner.y,
                width: link_width,
                height: 1,
            };
            Paragraph::new(Line::from(link)).render(link_area, buf);
        }

        if inner.height >= 2 {
            let counters_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Paragraph::new(self.counters_line()).render(counters_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use psmon_app::state::PollKind;
    use psmon_client::test_utils::test_snapshot;

    struct Fixture {
        snapshot: Option<Snapshot>,
        connection: Control<bool>,
        kill_switch: Control<bool>,
        exit_country: Control<Option<String>>,
        health: PollHealth,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                snapshot: None,
                connection: Control::new(false),
                kill_switch: Control::new(false),
                exit_country: Control::new(None),
                health: PollHealth::default(),
            }
        }

        fn render(&self) -> TestTerminal {
            let mut term = TestTerminal::with_size(110, 4);
            let header = DashboardHeader::new(
                self.snapshot.as_ref(),
                &self.connection,
                &self.kill_switch,
                &self.exit_country,
                &self.health,
            );
            term.render_widget(header, term.area());
            term
        }
    }

    #[test]
    fn test_header_before_first_poll() {
        let term = Fixture::new().render();
        assert!(term.buffer_contains("Privacy Suite Monitor"));
        assert!(term.buffer_contains("Disconnected"));
        assert!(term.buffer_contains("No data from collaborator yet"));
        assert!(term.buffer_contains("waiting"));
    }

    #[test]
    fn test_header_shows_counters() {
        let mut fx = Fixture::new();
        fx.snapshot = Some(test_snapshot(true, 12, 5));
        fx.connection = Control::new(true);
        fx.health.record_success(PollKind::Snapshot, 1);

        let term = fx.render();
        assert!(term.buffer_contains("Connected"));
        assert!(term.buffer_contains("Blocked 12"));
        assert!(term.buffer_contains("Trackers 5"));
        assert!(term.buffer_contains("linked"));
    }

    #[test]
    fn test_header_pending_connect() {
        let mut fx = Fixture::new();
        fx.connection.begin(true);
        let term = fx.render();
        assert!(term.buffer_contains("Connecting"));
    }

    #[test]
    fn test_header_pending_kill_switch() {
        let mut fx = Fixture::new();
        fx.kill_switch.begin(true);
        let term = fx.render();
        assert!(term.buffer_contains("Kill switch ON (pending)"));
    }

    #[test]
    fn test_header_exit_country_name() {
        let mut fx = Fixture::new();
        fx.exit_country = Control::new(Some("de".to_string()));
        let term = fx.render();
        assert!(term.buffer_contains(exit_country_name(Some("de"))));
    }

    #[test]
    fn test_header_unreachable_count() {
        let mut fx = Fixture::new();
        fx.health.record_failure(PollKind::Snapshot, 1, "refused".into());
        fx.health.record_failure(PollKind::Snapshot, 2, "refused".into());
        let term = fx.render();
        assert!(term.buffer_contains("unreachable (2)"));
    }

    #[test]
    fn test_header_tiny_area_does_not_panic() {
        let fx = Fixture::new();
        let mut term = TestTerminal::with_size(10, 2);
        let header = DashboardHeader::new(
            None,
            &fx.connection,
            &fx.kill_switch,
            &fx.exit_country,
            &fx.health,
        );
        term.render_widget(header, term.area());
    }
}
