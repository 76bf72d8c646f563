//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::ConfirmShutdown => handle_key_confirm_shutdown(key),
    }
}

/// Handle key events in the shutdown confirmation dialog
fn handle_key_confirm_shutdown(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmShutdown),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelShutdown),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the dashboard
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Collaborator controls
        // ─────────────────────────────────────────────────────────
        InputKey::Char('c') => Some(Message::ToggleConnection),
        InputKey::Char('K') => Some(Message::ToggleKillSwitch),
        InputKey::Char('x') => Some(Message::CycleExitCountry),
        InputKey::Char('S') => Some(Message::RequestShutdown),

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        InputKey::Char('f') | InputKey::Tab => Some(Message::CycleCategoryFilter),
        InputKey::Char('F') | InputKey::BackTab => Some(Message::CycleCategoryFilterBack),
        InputKey::Char('l') => Some(Message::CycleLevelFilter),
        InputKey::Char('L') => Some(Message::CycleLevelFilterBack),
        InputKey::Char('r') => Some(Message::ResetFilters),

        // ─────────────────────────────────────────────────────────
        // Log view
        // ─────────────────────────────────────────────────────────
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleExpand),
        InputKey::Char('C') => Some(Message::CollapseAll),
        InputKey::Char('a') => Some(Message::ToggleAutoScroll),

        _ => None,
    }
}
