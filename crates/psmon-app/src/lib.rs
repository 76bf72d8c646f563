//! psmon-app - Application state and orchestration for the privacy suite monitor
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: one [`AppState`] mutated only by [`handler::update`], background
//! tasks (poller, commands, signals) that report back through [`Message`]s,
//! the [`Engine`] tying them together, and configuration loading.

pub mod actions;
pub mod collapse;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod log_view_state;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Control, Notice, NoticeKind, PollHealth, UiMode};
