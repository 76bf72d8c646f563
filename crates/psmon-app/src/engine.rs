//! Engine - orchestration state for the dashboard runner
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal and
//! the background tasks (poller and signal handler). Frontends drive it by
//! feeding input messages and draining the channel before each render.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use psmon_client::ControlPlane;

use crate::actions::spawn_poller;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// How long shutdown waits for each background task
const TASK_STOP_TIMEOUT: Duration = Duration::from_secs(2);

/// Orchestration engine for the privacy suite monitor.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    client: Arc<C>,
    poller: Option<JoinHandle<()>>,
    signal_handler: Option<JoinHandle<()>>,
}

impl<C> Engine<C>
where
    C: ControlPlane + Send + Sync + 'static,
{
    /// Create the engine and start its background tasks.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(client: C, settings: Settings) -> Self {
        let interval = settings.poll.interval();
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let client = Arc::new(client);

        let signal_handler = signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());
        let poller = spawn_poller(
            Arc::clone(&client),
            msg_tx.clone(),
            interval,
            shutdown_rx.clone(),
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            client,
            poller: Some(poller),
            signal_handler: Some(signal_handler),
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop polling and the signal listener.
    ///
    /// Commands still in flight are left to finish on their own; their
    /// outcomes are dropped with the channel.
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);

        let tasks = [
            ("poller", self.poller.take()),
            ("signal handler", self.signal_handler.take()),
        ];
        for (name, handle) in tasks {
            let Some(handle) = handle else { continue };
            match tokio::time::timeout(TASK_STOP_TIMEOUT, handle).await {
                Ok(Ok(())) => info!("{} stopped", name),
                Ok(Err(e)) => warn!("{} panicked: {}", name, e),
                Err(_) => warn!("{} did not stop in time", name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psmon_client::test_utils::{test_event, test_snapshot, ScriptedControlPlane};
    use psmon_core::Category;

    #[tokio::test(start_paused = true)]
    async fn test_engine_applies_polled_data() {
        let plane = ScriptedControlPlane::new();
        plane.push_snapshot(Ok(test_snapshot(true, 12, 5)));
        plane.push_events(Ok(vec![
            test_event("t1", Category::Tracker, "a"),
            test_event("t2", Category::Security, "b"),
        ]));
        let mut engine = Engine::new(plane, Settings::default());

        for _ in 0..2 {
            let msg = engine.msg_rx.recv().await.expect("poll result");
            engine.process_message(msg);
        }

        assert!(*engine.state.connection.confirmed());
        assert_eq!(engine.state.events.len(), 2);
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_message() {
        let mut engine = Engine::new(ScriptedControlPlane::new(), Settings::default());
        assert!(!engine.should_quit());

        engine.process_message(Message::Quit);

        assert!(engine.should_quit());
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_polling() {
        let mut engine = Engine::new(ScriptedControlPlane::new(), Settings::default());
        engine.shutdown().await;

        assert!(engine.poller.is_none());
        assert!(*engine.shutdown_receiver().borrow());
        engine.drain_pending_messages();

        // No further ticks arrive
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(engine.drain_pending_messages(), 0);
    }
}
