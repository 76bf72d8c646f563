//! Category × level filtering of the event list.

use serde::{Deserialize, Serialize};

use crate::event::{Category, Event, Level};

/// Filter on event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    Everything,
    /// Protections only: tracker, webrtc, ipv6 and security
    All,
    Network,
    Tracker,
    Webrtc,
    Ipv6,
    Security,
    General,
}

impl CategoryFilter {
    const ORDER: [CategoryFilter; 8] = [
        CategoryFilter::Everything,
        CategoryFilter::All,
        CategoryFilter::Network,
        CategoryFilter::Tracker,
        CategoryFilter::Webrtc,
        CategoryFilter::Ipv6,
        CategoryFilter::Security,
        CategoryFilter::General,
    ];

    /// Cycle to the next filter option (wraps around)
    pub fn cycle(self) -> Self {
        step(&Self::ORDER, self, 1)
    }

    /// Cycle to the previous filter option (wraps around)
    pub fn cycle_back(self) -> Self {
        step(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    /// Check if a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Everything => true,
            CategoryFilter::All => category.is_protection(),
            CategoryFilter::Network => category == Category::Network,
            CategoryFilter::Tracker => category == Category::Tracker,
            CategoryFilter::Webrtc => category == Category::Webrtc,
            CategoryFilter::Ipv6 => category == Category::Ipv6,
            CategoryFilter::Security => category == Category::Security,
            CategoryFilter::General => category == Category::General,
        }
    }

    /// Get a user-friendly display name for the filter
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::Everything => "Everything",
            CategoryFilter::All => "All protections",
            CategoryFilter::Network => "Network",
            CategoryFilter::Tracker => "Trackers",
            CategoryFilter::Webrtc => "WebRTC",
            CategoryFilter::Ipv6 => "IPv6",
            CategoryFilter::Security => "Security",
            CategoryFilter::General => "General",
        }
    }
}

/// Filter on event level. Exact match, not a severity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    #[default]
    All,
    Debug,
    Info,
    Warn,
    Error,
}

impl LevelFilter {
    const ORDER: [LevelFilter; 5] = [
        LevelFilter::All,
        LevelFilter::Debug,
        LevelFilter::Info,
        LevelFilter::Warn,
        LevelFilter::Error,
    ];

    pub fn cycle(self) -> Self {
        step(&Self::ORDER, self, 1)
    }

    pub fn cycle_back(self) -> Self {
        step(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn matches(&self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Debug => level == Level::Debug,
            LevelFilter::Info => level == Level::Info,
            LevelFilter::Warn => level == Level::Warn,
            LevelFilter::Error => level == Level::Error,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LevelFilter::All => "All levels",
            LevelFilter::Debug => "Debug",
            LevelFilter::Info => "Info",
            LevelFilter::Warn => "Warnings",
            LevelFilter::Error => "Errors",
        }
    }
}

fn step<T: Copy + PartialEq>(order: &[T], current: T, by: usize) -> T {
    let idx = order.iter().position(|v| *v == current).unwrap_or(0);
    order[(idx + by) % order.len()]
}

/// Combined filter state for both category and level filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub level: LevelFilter,
}

impl FilterState {
    pub fn new(category: CategoryFilter, level: LevelFilter) -> Self {
        Self { category, level }
    }

    /// Reset all filters to their default state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if any filter restricts the list
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::Everything || self.level != LevelFilter::All
    }

    /// Check if an event passes both filters
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(event.category) && self.level.matches(event.level)
    }

    /// Indices into `events` of the entries that pass, in order.
    pub fn visible_indices(&self, events: &[Event]) -> Vec<usize> {
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| self.matches(e))
            .map(|(i, _)| i)
            .collect()
    }
}

/// The events that pass both filters, in their original relative order.
pub fn visible<'a>(
    events: &'a [Event],
    category: CategoryFilter,
    level: LevelFilter,
) -> Vec<&'a Event> {
    let filter = FilterState::new(category, level);
    events.iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(category: Category, level: Level, message: &str) -> Event {
        Event::new("10:00:00.000", level, category, message, None)
    }

    fn sample() -> Vec<Event> {
        vec![
            ev(Category::Network, Level::Info, "GET example.com"),
            ev(Category::Tracker, Level::Warn, "blocked ads.example"),
            ev(Category::General, Level::Info, "proxy started"),
            ev(Category::Security, Level::Error, "malware domain"),
            ev(Category::Webrtc, Level::Warn, "stun leak"),
            ev(Category::Ipv6, Level::Debug, "v6 dropped"),
            ev(Category::Tracker, Level::Info, "blocked pixel"),
        ]
    }

    fn all_filters() -> Vec<(CategoryFilter, LevelFilter)> {
        let mut out = Vec::new();
        for c in CategoryFilter::ORDER {
            for l in LevelFilter::ORDER {
                out.push((c, l));
            }
        }
        out
    }

    fn is_subsequence(sub: &[&Event], of: &[Event]) -> bool {
        let mut it = of.iter();
        sub.iter().all(|s| it.any(|e| std::ptr::eq(e, *s)))
    }

    #[test]
    fn test_visible_is_order_preserving_subsequence() {
        let events = sample();
        for (c, l) in all_filters() {
            let out = visible(&events, c, l);
            assert!(is_subsequence(&out, &events), "{c:?}/{l:?}");
        }
    }

    #[test]
    fn test_everything_all_is_identity() {
        let events = sample();
        let out = visible(&events, CategoryFilter::Everything, LevelFilter::All);
        assert_eq!(out.len(), events.len());
        assert!(out.iter().zip(events.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_all_is_union_of_protections() {
        let events = sample();
        let all = visible(&events, CategoryFilter::All, LevelFilter::All);

        let mut union: Vec<&Event> = [
            CategoryFilter::Tracker,
            CategoryFilter::Webrtc,
            CategoryFilter::Ipv6,
            CategoryFilter::Security,
        ]
        .into_iter()
        .flat_map(|c| visible(&events, c, LevelFilter::All))
        .collect();
        // restore original order for comparison
        union.sort_by_key(|e| {
            events
                .iter()
                .position(|x| std::ptr::eq(x, *e))
                .unwrap_or(usize::MAX)
        });

        assert_eq!(all.len(), union.len());
        assert!(all.iter().zip(union.iter()).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = sample();
        for (c, l) in all_filters() {
            let once: Vec<Event> = visible(&events, c, l).into_iter().cloned().collect();
            let twice: Vec<Event> = visible(&once, c, l).into_iter().cloned().collect();
            assert_eq!(once, twice, "{c:?}/{l:?}");
            assert_eq!(once, visible(&events, c, l).into_iter().cloned().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_all_keeps_tracker_and_security_only() {
        let events = vec![
            ev(Category::Tracker, Level::Info, "a"),
            ev(Category::Security, Level::Info, "b"),
            ev(Category::General, Level::Info, "c"),
        ];
        let out = visible(&events, CategoryFilter::All, LevelFilter::All);
        let messages: Vec<_> = out.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_level_filter_is_exact_match() {
        let events = sample();
        let out = visible(&events, CategoryFilter::Everything, LevelFilter::Warn);
        assert!(out.iter().all(|e| e.level == Level::Warn));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_axes_combine_with_and() {
        let events = sample();
        let out = visible(&events, CategoryFilter::Tracker, LevelFilter::Info);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "blocked pixel");
    }

    #[test]
    fn test_visible_indices_match_visible() {
        let events = sample();
        let filter = FilterState::new(CategoryFilter::All, LevelFilter::Warn);
        let idx = filter.visible_indices(&events);
        assert_eq!(idx, vec![1, 4]);
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut f = CategoryFilter::Everything;
        for _ in 0..CategoryFilter::ORDER.len() {
            f = f.cycle();
        }
        assert_eq!(f, CategoryFilter::Everything);
        assert_eq!(CategoryFilter::Everything.cycle(), CategoryFilter::All);
        assert_eq!(CategoryFilter::Everything.cycle_back(), CategoryFilter::General);
    }

    #[test]
    fn test_level_cycle_wraps() {
        assert_eq!(LevelFilter::Error.cycle(), LevelFilter::All);
        assert_eq!(LevelFilter::All.cycle_back(), LevelFilter::Error);
    }

    #[test]
    fn test_filter_state_is_active() {
        let mut state = FilterState::default();
        assert!(!state.is_active());
        state.category = CategoryFilter::All;
        assert!(state.is_active());
        state.reset();
        assert!(!state.is_active());
    }
}
