//! # psmon-core - Core Domain Types
//!
//! Foundation crate for the privacy suite monitor. Provides the snapshot and
//! event models, the category × level filter engine, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, tracing-subscriber).
//!
//! ## Public API
//!
//! ### Snapshot (`snapshot`)
//! - [`Snapshot`] - Aggregate counters and connection flags
//! - [`format_uptime()`], [`exit_country_name()`], [`next_exit_country()`]
//!
//! ### Events (`event`)
//! - [`Event`] - A single classified log record
//! - [`EventDetails`] - Category-specific detail payload
//! - [`EventKey`] - Content-derived identity used for UI state
//! - [`Level`], [`Category`]
//!
//! ### Filtering (`filter`)
//! - [`visible()`] - Order-preserving category × level filter
//! - [`CategoryFilter`], [`LevelFilter`], [`FilterState`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use psmon_core::prelude::*;
//! ```

pub mod error;
pub mod event;
pub mod filter;
pub mod logging;
pub mod snapshot;

/// Prelude for common imports used throughout all psmon crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use event::{Category, DetailFields, Endpoint, Event, EventDetails, EventKey, Level, Verdict};
pub use filter::{visible, CategoryFilter, FilterState, LevelFilter};
pub use snapshot::{
    exit_country_name, format_uptime, next_exit_country, Snapshot, EXIT_COUNTRIES,
};
