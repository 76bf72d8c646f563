//! Main TUI runner - entry point and event loop
//!
//! The [`Engine`] owns state, channels and background tasks; this module adds
//! the terminal: draw, poll input, feed it back in.

use psmon_app::config::Settings;
use psmon_app::Engine;
use psmon_client::ControlPlane;
use psmon_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard against `client` until the user quits.
///
/// Must be called from within a multi-threaded tokio runtime: input polling
/// blocks the calling worker for up to one poll timeout at a time.
pub async fn run<C>(client: C, settings: Settings) -> Result<()>
where
    C: ControlPlane + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    info!(
        "Starting dashboard: poll every {:?}, auto-scroll {}",
        settings.poll.interval(),
        settings.ui.auto_scroll
    );

    let mut term = ratatui::init();
    let mut engine = Engine::new(client, settings);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    if let Err(e) = &result {
        error!("Dashboard loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: ControlPlane + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Poll results, command outcomes and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
