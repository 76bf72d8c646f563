//! Expand/collapse state for event detail rows.

use std::collections::HashSet;

use psmon_core::{Event, EventKey};

/// Tracks which events are expanded.
///
/// Rows start collapsed. State is keyed by [`EventKey`] so an expanded event
/// stays expanded when new events shift its position in the list.
#[derive(Debug, Clone, Default)]
pub struct CollapseState {
    expanded: HashSet<EventKey>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: EventKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Toggle an event. Events without details cannot be expanded.
    ///
    /// Returns the new expanded state.
    pub fn toggle(&mut self, event: &Event) -> bool {
        let key = event.key();
        if self.expanded.remove(&key) {
            return false;
        }
        if !event.has_details() {
            return false;
        }
        self.expanded.insert(key);
        true
    }

    /// Collapse everything
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Forget keys whose events are no longer in `events`.
    pub fn retain_present(&mut self, events: &[Event]) {
        if self.expanded.is_empty() {
            return;
        }
        let present: HashSet<EventKey> = events.iter().map(Event::key).collect();
        self.expanded.retain(|k| present.contains(k));
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
