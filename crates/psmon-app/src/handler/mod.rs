//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `poll`: Snapshot and event-list results
//! - `commands`: Command intents and their outcomes
//! - `log_view`: Filter, selection and expansion handlers
//! - `scroll`: Scroll handlers

pub(crate) mod commands;
pub(crate) mod keys;
pub(crate) mod log_view;
pub(crate) mod poll;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// POST `/api/connection`
    SetConnection {
        connect: bool,
        exit_country: Option<String>,
    },
    /// POST `/api/kill-switch`
    SetKillSwitch { enabled: bool },
    /// PUT `/api/exit-country`
    SetExitCountry { country: Option<String> },
    /// POST `/api/shutdown`
    Shutdown,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
