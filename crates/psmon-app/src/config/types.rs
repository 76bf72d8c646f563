//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use psmon_client::{ClientConfig, DEFAULT_BASE_URL};
use psmon_core::{CategoryFilter, LevelFilter};

/// Minimum poll interval; anything faster just hammers the collaborator.
pub const POLL_INTERVAL_MIN_MS: u64 = 250;

/// Fewest events kept from a poll; `0` would blank the log on every tick.
pub const MAX_EVENTS_MIN: usize = 1;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub collaborator: CollaboratorSettings,

    #[serde(default)]
    pub poll: PollSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the proxy's control API lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollaboratorSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for `/api/stats` and `/api/logs`
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Timeout for connection, kill-switch and exit-country commands
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
}

impl Default for CollaboratorSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            command_timeout_ms: default_command_timeout_ms(),
        }
    }
}

impl CollaboratorSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            command_timeout: Duration::from_millis(self.command_timeout_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollSettings {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl PollSettings {
    /// Interval with the minimum applied
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(POLL_INTERVAL_MIN_MS))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Follow new events to the bottom of the log
    #[serde(default = "default_true")]
    pub auto_scroll: bool,

    /// Most recent events kept from each poll
    #[serde(default = "default_max_events")]
    pub max_events: usize,

    /// Poll ticks a notice stays on screen
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,

    #[serde(default)]
    pub default_category: CategoryFilter,

    #[serde(default)]
    pub default_level: LevelFilter,

    /// Ask before sending a shutdown to the proxy
    #[serde(default = "default_true")]
    pub confirm_shutdown: bool,
}

impl UiSettings {
    /// Event cap with the minimum applied
    pub fn max_events(&self) -> usize {
        self.max_events.max(MAX_EVENTS_MIN)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            max_events: default_max_events(),
            notice_ticks: default_notice_ticks(),
            default_category: CategoryFilter::default(),
            default_level: LevelFilter::default(),
            confirm_shutdown: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_command_timeout_ms() -> u64 {
    10_000
}

fn default_interval_ms() -> u64 {
    1_000
}

fn default_max_events() -> usize {
    2_000
}

fn default_notice_ticks() -> u32 {
    5
}

fn default_true() -> bool {
    true
}
