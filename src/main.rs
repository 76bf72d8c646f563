//! psmon - terminal dashboard for the privacy suite proxy
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use psmon_app::config::{self, Settings};
use psmon_client::HttpControlPlane;

/// Monitor and control the privacy suite proxy from the terminal
#[derive(Parser, Debug)]
#[command(name = "psmon")]
#[command(about = "Terminal dashboard for the privacy suite proxy", long_about = None)]
struct Args {
    /// Collaborator base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Poll interval in milliseconds (overrides the config file, minimum 250)
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.url {
            settings.collaborator.base_url = url.clone();
        }
        if let Some(interval) = self.interval {
            settings.poll.interval_ms = interval;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    psmon_core::logging::init().wrap_err("failed to set up logging")?;

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);

    if args.init_config {
        let written = config::init_config_file(&config_path).wrap_err("failed to write config")?;
        println!("Config file: {}", written.display());
        return Ok(());
    }

    let mut settings = config::load_settings(&config_path);
    args.apply_overrides(&mut settings);
    info!(
        "Collaborator at {} (config {})",
        settings.collaborator.base_url,
        config_path.display()
    );

    let client = HttpControlPlane::new(settings.collaborator.client_config())
        .wrap_err("invalid collaborator settings")?;

    psmon_tui::run(client, settings)
        .await
        .wrap_err("dashboard failed")
}
