//! Command channel handlers
//!
//! Every control follows the same lifecycle: the intent marks the control
//! pending and emits an [`UpdateAction`]; the action task answers with a
//! `*Confirmed` message carrying the collaborator's value, or a `*Failed`
//! message, after which nothing is left pending.

use tracing::{debug, info, warn};

use psmon_core::exit_country_name;

use crate::state::{AppState, NoticeKind, UiMode};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Connection
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_request_connection(state: &mut AppState, connect: bool) -> UpdateResult {
    if !state.connection.begin(connect) {
        debug!("Connection change already in flight, ignoring request");
        return UpdateResult::none();
    }
    info!("Requesting connect={}", connect);
    let exit_country = if connect {
        state.exit_country.confirmed().clone()
    } else {
        None
    };
    UpdateResult::action(UpdateAction::SetConnection {
        connect,
        exit_country,
    })
}

pub fn handle_connection_confirmed(state: &mut AppState, connected: bool) -> UpdateResult {
    let requested = state.connection.pending().copied();
    state.connection.confirm(connected);
    info!("Collaborator reports connected={}", connected);
    if requested.is_some_and(|wanted| wanted != connected) {
        let text = if connected {
            "Collaborator stayed connected"
        } else {
            "Collaborator did not connect"
        };
        state.set_notice(text, NoticeKind::Info);
    }
    UpdateResult::none()
}

pub fn handle_connection_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.connection.fail();
    warn!("Connection request failed: {}", error);
    state.set_notice(format!("Connection change failed: {error}"), NoticeKind::Error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Kill switch
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_request_kill_switch(state: &mut AppState, enabled: bool) -> UpdateResult {
    if !state.kill_switch.begin(enabled) {
        debug!("Kill switch change already in flight, ignoring request");
        return UpdateResult::none();
    }
    info!("Requesting kill switch enabled={}", enabled);
    UpdateResult::action(UpdateAction::SetKillSwitch { enabled })
}

pub fn handle_kill_switch_confirmed(state: &mut AppState, enabled: bool) -> UpdateResult {
    let requested = state.kill_switch.pending().copied();
    state.kill_switch.confirm(enabled);
    info!("Collaborator reports kill switch enabled={}", enabled);
    if requested.is_some_and(|wanted| wanted != enabled) {
        state.set_notice("Collaborator kept the kill switch unchanged", NoticeKind::Info);
    }
    UpdateResult::none()
}

pub fn handle_kill_switch_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.kill_switch.fail();
    warn!("Kill switch request failed: {}", error);
    state.set_notice(format!("Kill switch change failed: {error}"), NoticeKind::Error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Exit country
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_request_exit_country(state: &mut AppState, country: Option<String>) -> UpdateResult {
    if !state.exit_country.begin(country.clone()) {
        debug!("Exit country change already in flight, ignoring request");
        return UpdateResult::none();
    }
    info!("Requesting exit country {}", exit_country_name(country.as_deref()));
    UpdateResult::action(UpdateAction::SetExitCountry { country })
}

pub fn handle_exit_country_confirmed(state: &mut AppState, country: Option<String>) -> UpdateResult {
    info!("Exit country is now {}", exit_country_name(country.as_deref()));
    state.exit_country.confirm(country);
    UpdateResult::none()
}

pub fn handle_exit_country_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.exit_country.fail();
    warn!("Exit country request failed: {}", error);
    state.set_notice(format!("Exit country change failed: {error}"), NoticeKind::Error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Shutdown
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_request_shutdown(state: &mut AppState) -> UpdateResult {
    if state.settings.ui.confirm_shutdown {
        state.ui_mode = UiMode::ConfirmShutdown;
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::Shutdown)
    }
}

pub fn handle_confirm_shutdown(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    info!("Asking collaborator to shut down");
    UpdateResult::action(UpdateAction::Shutdown)
}

pub fn handle_cancel_shutdown(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_shutdown_sent(state: &mut AppState) -> UpdateResult {
    state.set_notice("Shutdown sent to collaborator", NoticeKind::Info);
    UpdateResult::none()
}

pub fn handle_shutdown_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Shutdown request failed: {}", error);
    state.set_notice(format!("Shutdown failed: {error}"), NoticeKind::Error);
    UpdateResult::none()
}
