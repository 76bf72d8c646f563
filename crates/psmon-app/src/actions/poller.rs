//! Periodic polling of the collaborator's snapshot and event list.
//!
//! The single entry point is [`spawn_poller`], started once by the engine.
//!
//! **Polling strategy:**
//! - Ticks are numbered from 1 and run one at a time. A tick that overruns
//!   the interval delays the next one instead of overlapping it.
//! - Within a tick, `/api/stats` and `/api/logs` are requested concurrently.
//!   Each result is sent as soon as it arrives, tagged with the tick number,
//!   so a slow or failing request never holds back the other.
//! - Failures are reported as `*Failed` messages and retried on the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use psmon_client::ControlPlane;

use crate::config::POLL_INTERVAL_MIN_MS;
use crate::message::Message;

/// Spawn the polling task.
///
/// The loop runs until:
/// - The shutdown channel changes or its sender is dropped, or
/// - The `msg_tx` channel is closed (engine shutting down).
///
/// Shutdown also abandons a tick that is still in flight, so no result is
/// sent after the signal. `interval` is clamped to a minimum of
/// [`POLL_INTERVAL_MIN_MS`].
pub fn spawn_poller<C>(
    client: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    C: ControlPlane + Send + Sync + 'static,
{
    let interval = interval.max(Duration::from_millis(POLL_INTERVAL_MIN_MS));

    tokio::spawn(async move {
        if *shutdown_rx.borrow() {
            return;
        }
        info!("Polling collaborator every {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown_rx.changed() => break,
            }

            tick += 1;
            tokio::select! {
                open = poll_once(client.as_ref(), &msg_tx, tick) => {
                    if !open {
                        // Engine shutting down.
                        break;
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }

        debug!("Poller stopped after {} ticks", tick);
    })
}

/// Run both requests for one tick. Returns `false` once the message channel
/// is closed.
async fn poll_once<C>(client: &C, msg_tx: &mpsc::Sender<Message>, tick: u64) -> bool
where
    C: ControlPlane + Sync,
{
    let snapshot = async {
        let msg = match client.fetch_snapshot().await {
            Ok(snapshot) => Message::SnapshotReceived { tick, snapshot },
            Err(e) => {
                // Collaborator not running yet or restarting. Retry next tick.
                debug!("Snapshot poll {} failed: {}", tick, e);
                Message::SnapshotFailed {
                    tick,
                    error: e.to_string(),
                }
            }
        };
        msg_tx.send(msg).await.is_ok()
    };

    let events = async {
        let msg = match client.fetch_events().await {
            Ok(events) => Message::EventsReceived { tick, events },
            Err(e) => {
                debug!("Event poll {} failed: {}", tick, e);
                Message::EventsFailed {
                    tick,
                    error: e.to_string(),
                }
            }
        };
        msg_tx.send(msg).await.is_ok()
    };

    let (snapshot_open, events_open) = tokio::join!(snapshot, events);
    snapshot_open && events_open
}
