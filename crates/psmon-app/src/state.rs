//! Application state (Model in TEA pattern)
//!
//! Everything the dashboard shows lives in one [`AppState`], owned by the
//! engine and mutated only by [`crate::handler::update`].

use chrono::{DateTime, Local};

use psmon_core::{Event, EventKey, FilterState, Snapshot};

use crate::collapse::CollapseState;
use crate::config::Settings;
use crate::log_view_state::LogViewState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Dashboard with header, event log and status bar
    #[default]
    Normal,

    /// Asking whether to shut the proxy down
    ConfirmShutdown,
}

// ─────────────────────────────────────────────────────────────────────────────
// Controls
// ─────────────────────────────────────────────────────────────────────────────

/// A setting the collaborator owns and the user can ask to change.
///
/// `confirmed` is the last value the collaborator reported. `pending` holds
/// the requested value while a command is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control<T> {
    confirmed: T,
    pending: Option<T>,
}

impl<T: Clone + PartialEq> Control<T> {
    pub fn new(confirmed: T) -> Self {
        Self {
            confirmed,
            pending: None,
        }
    }

    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Mark a request for `desired` as in flight.
    ///
    /// Returns `false` (and changes nothing) if one is already in flight.
    pub fn begin(&mut self, desired: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(desired);
        true
    }

    /// Adopt the collaborator's answer.
    pub fn confirm(&mut self, value: T) {
        self.pending = None;
        self.confirmed = value;
    }

    /// The request failed; drop the pending value and keep what was confirmed.
    pub fn fail(&mut self) {
        self.pending = None;
    }

    /// A poll reported `value`. Ignored while a command is in flight so the
    /// control does not flicker back before the answer arrives.
    pub fn observe(&mut self, value: T) {
        if self.pending.is_none() {
            self.confirmed = value;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Poll health and notices
// ─────────────────────────────────────────────────────────────────────────────

/// Which poll result a tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollKind {
    Snapshot,
    Events,
}

/// Freshness of polled data, shown passively in the header.
#[derive(Debug, Clone, Default)]
pub struct PollHealth {
    /// Newest tick whose snapshot result was applied
    pub snapshot_tick: u64,
    /// Newest tick whose event result was applied
    pub events_tick: u64,
    /// Consecutive snapshot failures
    pub snapshot_failures: u32,
    /// Consecutive event-list failures
    pub events_failures: u32,
    pub last_success: Option<DateTime<Local>>,
    pub last_error: Option<String>,
}

impl PollHealth {
    fn last_tick(&self, kind: PollKind) -> u64 {
        match kind {
            PollKind::Snapshot => self.snapshot_tick,
            PollKind::Events => self.events_tick,
        }
    }

    /// True if a result from `tick` is newer than anything applied so far.
    pub fn is_fresh(&self, kind: PollKind, tick: u64) -> bool {
        tick > self.last_tick(kind)
    }

    pub fn record_success(&mut self, kind: PollKind, tick: u64) {
        match kind {
            PollKind::Snapshot => {
                self.snapshot_tick = tick;
                self.snapshot_failures = 0;
            }
            PollKind::Events => {
                self.events_tick = tick;
                self.events_failures = 0;
            }
        }
        self.last_success = Some(Local::now());
        if self.snapshot_failures == 0 && self.events_failures == 0 {
            self.last_error = None;
        }
    }

    pub fn record_failure(&mut self, kind: PollKind, tick: u64, error: String) {
        match kind {
            PollKind::Snapshot => {
                self.snapshot_tick = tick;
                self.snapshot_failures = self.snapshot_failures.saturating_add(1);
            }
            PollKind::Events => {
                self.events_tick = tick;
                self.events_failures = self.events_failures.saturating_add(1);
            }
        }
        self.last_error = Some(error);
    }

    /// Collaborator answered the latest snapshot poll
    pub fn is_linked(&self) -> bool {
        self.last_success.is_some() && self.snapshot_failures == 0
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.snapshot_failures.max(self.events_failures)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-shot, non-blocking message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Poll ticks left before it disappears
    pub ticks_left: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub settings: Settings,

    /// Last good snapshot; `None` until the first successful poll
    pub snapshot: Option<Snapshot>,
    /// Last good event list, oldest first
    pub events: Vec<Event>,
    pub filter: FilterState,

    pub connection: Control<bool>,
    pub kill_switch: Control<bool>,
    /// `None` means the collaborator picks the exit
    pub exit_country: Control<Option<String>>,

    pub collapse: CollapseState,
    /// Selected row, by content key
    pub selected: Option<EventKey>,
    pub log_view_state: LogViewState,

    pub health: PollHealth,
    pub notice: Option<Notice>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let filter = FilterState::new(settings.ui.default_category, settings.ui.default_level);
        let log_view_state = LogViewState::with_auto_scroll(settings.ui.auto_scroll);
        Self {
            ui_mode: UiMode::Normal,
            settings,
            snapshot: None,
            events: Vec::new(),
            filter,
            connection: Control::new(false),
            kill_switch: Control::new(false),
            exit_country: Control::new(None),
            collapse: CollapseState::new(),
            selected: None,
            log_view_state,
            health: PollHealth::default(),
            notice: None,
            quitting: false,
        }
    }

    /// Events passing the current filters, in order
    pub fn visible_events(&self) -> Vec<&Event> {
        psmon_core::visible(&self.events, self.filter.category, self.filter.level)
    }

    /// Position of the selected event in the visible list
    pub fn selected_visible_index(&self) -> Option<usize> {
        let key = self.selected?;
        self.visible_events().iter().position(|e| e.key() == key)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let key = self.selected?;
        self.events.iter().find(|e| e.key() == key)
    }

    pub fn is_expanded(&self, event: &Event) -> bool {
        self.collapse.is_expanded(event.key())
    }

    pub fn set_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            ticks_left: self.settings.ui.notice_ticks.max(1),
        });
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psmon_core::{CategoryFilter, LevelFilter};

    #[test]
    fn test_control_lifecycle_confirm() {
        let mut c = Control::new(false);
        assert!(c.begin(true));
        assert!(c.is_pending());
        assert!(!*c.confirmed());
        c.confirm(true);
        assert!(!c.is_pending());
        assert!(*c.confirmed());
    }

    #[test]
    fn test_control_fail_keeps_confirmed() {
        let mut c = Control::new(true);
        c.begin(false);
        c.fail();
        assert!(!c.is_pending());
        assert!(*c.confirmed());
    }

    #[test]
    fn test_control_rejects_second_request() {
        let mut c = Control::new(false);
        assert!(c.begin(true));
        assert!(!c.begin(false));
        assert_eq!(c.pending(), Some(&true));
    }

    #[test]
    fn test_control_observe_ignored_while_pending() {
        let mut c = Control::new(false);
        c.begin(true);
        c.observe(false);
        c.confirm(true);
        c.observe(false);
        assert!(!*c.confirmed());
    }

    #[test]
    fn test_poll_health_freshness() {
        let mut h = PollHealth::default();
        assert!(h.is_fresh(PollKind::Snapshot, 1));
        h.record_success(PollKind::Snapshot, 3);
        assert!(!h.is_fresh(PollKind::Snapshot, 2));
        assert!(!h.is_fresh(PollKind::Snapshot, 3));
        assert!(h.is_fresh(PollKind::Snapshot, 4));
        // kinds are tracked independently
        assert!(h.is_fresh(PollKind::Events, 1));
    }

    #[test]
    fn test_poll_health_linked() {
        let mut h = PollHealth::default();
        assert!(!h.is_linked());
        h.record_success(PollKind::Snapshot, 1);
        assert!(h.is_linked());
        h.record_failure(PollKind::Snapshot, 2, "refused".into());
        h.record_failure(PollKind::Snapshot, 3, "refused".into());
        assert!(!h.is_linked());
        assert_eq!(h.consecutive_failures(), 2);
        h.record_success(PollKind::Snapshot, 4);
        assert!(h.is_linked());
        assert!(h.last_error.is_none());
    }

    #[test]
    fn test_state_uses_settings_defaults() {
        let mut settings = Settings::default();
        settings.ui.auto_scroll = false;
        settings.ui.default_category = CategoryFilter::All;
        settings.ui.default_level = LevelFilter::Error;
        let state = AppState::with_settings(settings);
        assert!(!state.log_view_state.auto_scroll);
        assert_eq!(state.filter.category, CategoryFilter::All);
        assert_eq!(state.filter.level, LevelFilter::Error);
    }
}
