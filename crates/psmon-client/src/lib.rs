//! # psmon-client - Collaborator Control Plane
//!
//! HTTP client for the privacy proxy's loopback control API: snapshot and
//! event polling plus the connection, kill-switch, exit-country and shutdown
//! commands.
//!
//! Depends on [`psmon_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Control Plane
//! - [`ControlPlane`] - Async operations against the collaborator (Send variant)
//! - [`HttpControlPlane`] - reqwest-backed implementation
//! - [`ClientConfig`] - Base URL and timeouts
//!
//! ### Wire Format (`wire`)
//! - [`decode_events()`], [`decode_connection()`], [`decode_kill_switch()`] -
//!   permissive response decoding

pub mod control;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod wire;

pub use control::{
    normalize_base_url, ClientConfig, ControlPlane, HttpControlPlane, LocalControlPlane,
    DEFAULT_BASE_URL, DEFAULT_COMMAND_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
};
pub use wire::{decode_connection, decode_events, decode_kill_switch, decode_snapshot};
