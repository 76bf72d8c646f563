//! Poll result handlers
//!
//! Snapshot and event-list results arrive independently and in any order.
//! Each carries the tick that issued it; anything older than what is already
//! applied for the same kind is dropped.

use psmon_core::{Event, Snapshot};
use tracing::{debug, info};

use crate::state::{AppState, PollKind};

use super::UpdateResult;

/// Replace the snapshot wholesale and sync the controls from it.
pub fn handle_snapshot_received(state: &mut AppState, tick: u64, snapshot: Snapshot) -> UpdateResult {
    if !state.health.is_fresh(PollKind::Snapshot, tick) {
        debug!("Discarding stale snapshot from tick {}", tick);
        return UpdateResult::none();
    }

    if let Some(previous) = &state.snapshot {
        if previous.is_session_reset(&snapshot) {
            info!(
                "Proxy counters reset ({} -> {} requests); new session",
                previous.total_requests, snapshot.total_requests
            );
        }
        if previous.tor_connected != snapshot.tor_connected {
            info!("Proxy reports tor_connected={}", snapshot.tor_connected);
        }
    }

    state.connection.observe(snapshot.tor_connected);
    state.kill_switch.observe(snapshot.kill_switch_active);
    state.exit_country.observe(snapshot.exit_country.clone());
    state.snapshot = Some(snapshot);
    state.health.record_success(PollKind::Snapshot, tick);
    age_notice(state);
    UpdateResult::none()
}

/// Replace the event list wholesale.
pub fn handle_events_received(state: &mut AppState, tick: u64, mut events: Vec<Event>) -> UpdateResult {
    if !state.health.is_fresh(PollKind::Events, tick) {
        debug!("Discarding stale event list from tick {}", tick);
        return UpdateResult::none();
    }

    let max = state.settings.ui.max_events();
    if events.len() > max {
        events.drain(..events.len() - max);
    }

    state.events = events;
    state.collapse.retain_present(&state.events);
    reconcile_selection(state);
    state.log_view_state.on_content_replaced();
    state.health.record_success(PollKind::Events, tick);
    UpdateResult::none()
}

/// A poll failed: keep the last good data and note the failure.
pub fn handle_poll_failed(state: &mut AppState, kind: PollKind, tick: u64, error: String) -> UpdateResult {
    if !state.health.is_fresh(kind, tick) {
        return UpdateResult::none();
    }
    debug!("{:?} poll {} failed: {}", kind, tick, error);
    state.health.record_failure(kind, tick, error);
    if kind == PollKind::Snapshot {
        age_notice(state);
    }
    UpdateResult::none()
}

/// Keep the selection on the same event after the list changed.
///
/// While following, the selection tracks the newest visible event.
pub(super) fn reconcile_selection(state: &mut AppState) {
    let visible = state.visible_events();
    if state.log_view_state.auto_scroll {
        state.selected = visible.last().map(|e| e.key());
        return;
    }
    if let Some(key) = state.selected {
        if !visible.iter().any(|e| e.key() == key) {
            state.selected = None;
        }
    }
}

/// Count down the notice once per poll tick.
fn age_notice(state: &mut AppState) {
    if let Some(notice) = &mut state.notice {
        notice.ticks_left = notice.ticks_left.saturating_sub(1);
        if notice.ticks_left == 0 {
            state.notice = None;
        }
    }
}
