//! Settings file loading and creation

use std::path::{Path, PathBuf};

use psmon_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "psmon";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Privacy suite monitor configuration

[collaborator]
base_url = "http://127.0.0.1:3030"
request_timeout_ms = 5000     # /api/stats and /api/logs
command_timeout_ms = 10000    # connect, kill switch, exit country

[poll]
interval_ms = 1000            # minimum 250

[ui]
auto_scroll = true
max_events = 2000
notice_ticks = 5
default_category = "everything"   # everything, all, network, tracker, webrtc, ipv6, security, general
default_level = "all"             # all, debug, info, warn, error
confirm_shutdown = true
"#;

/// Default config file location (`~/.config/psmon/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists.
///
/// Returns the path written (or found).
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(config_path.to_path_buf());
    }
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    info!("Wrote default config to {:?}", config_path);
    Ok(config_path.to_path_buf())
}
