//! Configuration file parsing for the privacy suite monitor
//!
//! Supports `~/.config/psmon/config.toml` (or a path given on the command
//! line). Command-line flags override file values.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
