//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, PollKind};

use super::{commands, keys::handle_key, log_view, poll, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            // Any key press acknowledges the notice
            state.notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Poll Results
        // ─────────────────────────────────────────────────────────
        Message::SnapshotReceived { tick, snapshot } => {
            poll::handle_snapshot_received(state, tick, snapshot)
        }
        Message::SnapshotFailed { tick, error } => {
            poll::handle_poll_failed(state, PollKind::Snapshot, tick, error)
        }
        Message::EventsReceived { tick, events } => {
            poll::handle_events_received(state, tick, events)
        }
        Message::EventsFailed { tick, error } => {
            poll::handle_poll_failed(state, PollKind::Events, tick, error)
        }

        // ─────────────────────────────────────────────────────────
        // Command Intents
        // ─────────────────────────────────────────────────────────
        Message::ToggleConnection => UpdateResult::message(Message::RequestConnection {
            connect: !*state.connection.confirmed(),
        }),
        Message::RequestConnection { connect } => {
            commands::handle_request_connection(state, connect)
        }
        Message::ToggleKillSwitch => UpdateResult::message(Message::RequestKillSwitch {
            enabled: !*state.kill_switch.confirmed(),
        }),
        Message::RequestKillSwitch { enabled } => {
            commands::handle_request_kill_switch(state, enabled)
        }
        Message::CycleExitCountry => {
            let current = state.exit_country.confirmed().as_deref();
            UpdateResult::message(Message::RequestExitCountry {
                country: psmon_core::next_exit_country(current),
            })
        }
        Message::RequestExitCountry { country } => {
            commands::handle_request_exit_country(state, country)
        }
        Message::RequestShutdown => commands::handle_request_shutdown(state),
        Message::ConfirmShutdown => commands::handle_confirm_shutdown(state),
        Message::CancelShutdown => commands::handle_cancel_shutdown(state),

        // ─────────────────────────────────────────────────────────
        // Command Outcomes
        // ─────────────────────────────────────────────────────────
        Message::ConnectionConfirmed { connected } => {
            commands::handle_connection_confirmed(state, connected)
        }
        Message::ConnectionFailed { error } => commands::handle_connection_failed(state, error),
        Message::KillSwitchConfirmed { enabled } => {
            commands::handle_kill_switch_confirmed(state, enabled)
        }
        Message::KillSwitchFailed { error } => commands::handle_kill_switch_failed(state, error),
        Message::ExitCountryConfirmed { country } => {
            commands::handle_exit_country_confirmed(state, country)
        }
        Message::ExitCountryFailed { error } => {
            commands::handle_exit_country_failed(state, error)
        }
        Message::ShutdownSent => commands::handle_shutdown_sent(state),
        Message::ShutdownFailed { error } => commands::handle_shutdown_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::CycleCategoryFilter => {
            let next = state.filter.category.cycle();
            log_view::handle_set_category_filter(state, next)
        }
        Message::CycleCategoryFilterBack => {
            let next = state.filter.category.cycle_back();
            log_view::handle_set_category_filter(state, next)
        }
        Message::CycleLevelFilter => {
            let next = state.filter.level.cycle();
            log_view::handle_set_level_filter(state, next)
        }
        Message::CycleLevelFilterBack => {
            let next = state.filter.level.cycle_back();
            log_view::handle_set_level_filter(state, next)
        }
        Message::ResetFilters => log_view::handle_reset_filters(state),

        // ─────────────────────────────────────────────────────────
        // Log View Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => log_view::handle_select_previous(state),
        Message::SelectNext => log_view::handle_select_next(state),
        Message::SelectFirst => log_view::handle_select_first(state),
        Message::SelectLast => log_view::handle_select_last(state),
        Message::ToggleExpand => log_view::handle_toggle_expand(state),
        Message::CollapseAll => log_view::handle_collapse_all(state),
        Message::ToggleAutoScroll => scroll::handle_toggle_auto_scroll(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
