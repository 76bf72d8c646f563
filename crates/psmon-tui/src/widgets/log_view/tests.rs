//! Tests for the event log widget

use super::*;
use crate::test_utils::TestTerminal;
use psmon_core::{Category, CategoryFilter, Endpoint, Level, LevelFilter, Verdict};

fn event(ts: &str, level: Level, category: Category, msg: &str) -> Event {
    Event::new(ts, level, category, msg, None)
}

fn tracker_block(ts: &str, domain: &str) -> Event {
    let details = EventDetails::Blocked {
        endpoint: Endpoint {
            url: Some(format!("https://{domain}/pixel")),
            domain: Some(domain.to_string()),
            port: Some(443),
            ..Default::default()
        },
        verdict: Verdict {
            threat_type: Some("tracker".to_string()),
            reason: Some("Known ad network".to_string()),
        },
    };
    Event::new(
        ts,
        Level::Warn,
        Category::Tracker,
        format!("Blocked {domain}"),
        Some(details),
    )
}

fn render(
    log: EventLog<'_>,
    state: &mut LogViewState,
    width: u16,
    height: u16,
) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.render_stateful_widget(log, term.area(), state);
    term
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

// ─────────────────────────────────────────────────────────
// Empty and filtered states
// ─────────────────────────────────────────────────────────

#[test]
fn test_empty_log_shows_placeholder() {
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    let term = render(EventLog::new(&[], 0, &collapse), &mut state, 60, 10);

    assert!(term.buffer_contains("No events yet"));
    assert!(!term.buffer_contains("reset filters"));
}

#[test]
fn test_no_matches_hints_reset() {
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    let filter = FilterState::new(CategoryFilter::Security, LevelFilter::All);
    let log = EventLog::new(&[], 4, &collapse).filter(filter);
    let term = render(log, &mut state, 60, 10);

    assert!(term.buffer_contains("No events match current filter"));
    assert!(term.buffer_contains("Press r to reset filters"));
    assert!(term.buffer_contains("Security"));
}

#[test]
fn test_title_shows_filter_and_count() {
    let a = event("10:00:01", Level::Info, Category::Tracker, "one");
    let visible = vec![&a];
    let collapse = CollapseState::new();
    let log = EventLog::new(&visible, 3, &collapse)
        .filter(FilterState::new(CategoryFilter::All, LevelFilter::Info));

    let title = log.build_title();
    assert!(title.contains("All protections"));
    assert!(title.contains("Info"));
    assert!(title.contains("1 of 3"));
}

#[test]
fn test_title_without_filters() {
    let a = event("10:00:01", Level::Info, Category::General, "one");
    let visible = vec![&a];
    let collapse = CollapseState::new();
    let log = EventLog::new(&visible, 1, &collapse);
    assert_eq!(log.build_title(), " Events (1) ");
}

// ─────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────

#[test]
fn test_row_shows_timestamp_category_and_message() {
    let a = event("10:00:01", Level::Info, Category::Network, "GET example.org");
    let visible = vec![&a];
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    let term = render(EventLog::new(&visible, 1, &collapse), &mut state, 70, 6);

    assert!(term.buffer_contains("10:00:01"));
    assert!(term.buffer_contains("[network]"));
    assert!(term.buffer_contains("GET example.org"));
}

#[test]
fn test_collapsed_row_hides_details() {
    let a = tracker_block("10:00:01", "ads.example");
    let visible = vec![&a];
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    let term = render(EventLog::new(&visible, 1, &collapse), &mut state, 70, 8);

    assert!(term.buffer_contains("Blocked ads.example"));
    assert!(!term.buffer_contains("Known ad network"));
    assert!(term.buffer_contains(styles::MARKER_COLLAPSED));
}

#[test]
fn test_expanded_row_shows_details() {
    let a = tracker_block("10:00:01", "ads.example");
    let visible = vec![&a];
    let mut collapse = CollapseState::new();
    collapse.toggle(&a);
    let mut state = LogViewState::new();
    let term = render(EventLog::new(&visible, 1, &collapse), &mut state, 70, 10);

    assert!(term.buffer_contains("Reason: Known ad network"));
    assert!(term.buffer_contains("Domain: ads.example"));
    assert!(term.buffer_contains(styles::MARKER_EXPANDED));
    assert_eq!(state.total_lines, 6);
}

#[test]
fn test_expansion_follows_content_not_position() {
    let a = tracker_block("10:00:01", "a.example");
    let b = tracker_block("10:00:02", "b.example");
    let mut collapse = CollapseState::new();
    collapse.toggle(&b);

    // A new event arrives in front; b stays expanded at its new position
    let c = tracker_block("10:00:00", "c.example");
    let visible = vec![&c, &a, &b];
    let mut state = LogViewState::with_auto_scroll(false);
    let term = render(EventLog::new(&visible, 3, &collapse), &mut state, 70, 14);

    assert!(term.buffer_contains("Domain: b.example"));
    assert!(!term.buffer_contains("Domain: a.example"));
    assert!(!term.buffer_contains("Domain: c.example"));
}

#[test]
fn test_selected_row_is_highlighted() {
    let a = event("10:00:01", Level::Info, Category::General, "first");
    let b = event("10:00:02", Level::Info, Category::General, "second");
    let visible = vec![&a, &b];
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    let log = EventLog::new(&visible, 2, &collapse).selected(Some(b.key()));
    let term = render(log, &mut state, 60, 6);

    // Row 2 of the inner area (border at y=0)
    let selected_bg = term.buffer()[(4, 2)].bg;
    let plain_bg = term.buffer()[(4, 1)].bg;
    assert_eq!(selected_bg, crate::theme::palette::ACCENT);
    assert_ne!(plain_bg, crate::theme::palette::ACCENT);
}

#[test]
fn test_detail_lines_snapshot() {
    let a = tracker_block("10:00:01", "ads.example");
    let details = a.details.as_ref().expect("details");
    let rendered = EventLog::detail_lines(details)
        .iter()
        .map(|line| line_text(line).trim_start_matches([' ', '│']).to_string())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!("tracker_details", rendered);
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

fn numbered(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            event(
                &format!("10:00:{i:02}"),
                Level::Info,
                Category::Network,
                &format!("request {i}"),
            )
        })
        .collect()
}

#[test]
fn test_follow_pending_scrolls_to_newest() {
    let events = numbered(30);
    let visible: Vec<&Event> = events.iter().collect();
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    state.on_content_replaced();

    let term = render(EventLog::new(&visible, 30, &collapse), &mut state, 60, 12);

    // 10 inner lines, 30 rows
    assert_eq!(state.offset, 20);
    assert!(term.buffer_contains("request 29"));
    assert!(!term.buffer_contains("request 0 "));
}

#[test]
fn test_manual_scroll_keeps_offset() {
    let events = numbered(30);
    let visible: Vec<&Event> = events.iter().collect();
    let collapse = CollapseState::new();
    let mut state = LogViewState::with_auto_scroll(false);
    state.offset = 5;

    let term = render(EventLog::new(&visible, 30, &collapse), &mut state, 60, 12);

    assert_eq!(state.offset, 5);
    assert!(term.buffer_contains("request 5"));
    assert!(!term.buffer_contains("request 29"));
}

#[test]
fn test_reveal_brings_selection_into_view() {
    let events = numbered(30);
    let visible: Vec<&Event> = events.iter().collect();
    let collapse = CollapseState::new();
    let mut state = LogViewState::with_auto_scroll(false);
    state.request_reveal();

    let log = EventLog::new(&visible, 30, &collapse).selected(Some(events[25].key()));
    let term = render(log, &mut state, 60, 12);

    assert!(term.buffer_contains("request 25"));
    assert_eq!(state.offset, 16);
}

#[test]
fn test_tiny_area_does_not_panic() {
    let events = numbered(5);
    let visible: Vec<&Event> = events.iter().collect();
    let collapse = CollapseState::new();
    let mut state = LogViewState::new();
    render(EventLog::new(&visible, 5, &collapse), &mut state, 8, 2);
}
