//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Command tasks never touch [`AppState`](crate::state::AppState). Each one
//! reports its outcome as exactly one message, so a pending control is always
//! resolved once the request completes or times out.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use psmon_client::ControlPlane;
use psmon_core::Error;

use crate::handler::UpdateAction;
use crate::message::Message;

pub(crate) mod poller;
pub use poller::spawn_poller;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &Arc<C>)
where
    C: ControlPlane + Send + Sync + 'static,
{
    let client = Arc::clone(client);
    match action {
        UpdateAction::SetConnection {
            connect,
            exit_country,
        } => {
            tokio::spawn(async move {
                let msg = match client.set_connection(connect, exit_country).await {
                    Ok(connected) => Message::ConnectionConfirmed { connected },
                    Err(e) => Message::ConnectionFailed {
                        error: describe(&e),
                    },
                };
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::SetKillSwitch { enabled } => {
            tokio::spawn(async move {
                let msg = match client.set_kill_switch(enabled).await {
                    Ok(enabled) => Message::KillSwitchConfirmed { enabled },
                    Err(e) => Message::KillSwitchFailed {
                        error: describe(&e),
                    },
                };
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::SetExitCountry { country } => {
            tokio::spawn(async move {
                let msg = match client.set_exit_country(country).await {
                    Ok(country) => Message::ExitCountryConfirmed { country },
                    Err(e) => Message::ExitCountryFailed {
                        error: describe(&e),
                    },
                };
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::Shutdown => {
            tokio::spawn(async move {
                let msg = match client.shutdown().await {
                    Ok(()) => Message::ShutdownSent,
                    Err(e) => Message::ShutdownFailed {
                        error: describe(&e),
                    },
                };
                report(&msg_tx, msg).await;
            });
        }
    }
}

/// Short, user-facing form of a command error
fn describe(error: &Error) -> String {
    if error.is_recoverable() {
        debug!("Command error: {:?}", error);
    } else {
        warn!("Unexpected command error: {:?}", error);
    }
    error.to_string()
}

async fn report(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Engine shutting down.
        debug!("Dropping command outcome, message channel closed");
    }
}
