//! Message processing
//!
//! Runs a message through the TEA update function, follows the chain of
//! follow-up messages and dispatches any resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use psmon_client::ControlPlane;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: ControlPlane + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use psmon_client::test_utils::{Call, ScriptedControlPlane};

    #[tokio::test]
    async fn test_key_press_runs_full_command_chain() {
        let plane = Arc::new(ScriptedControlPlane::new());
        plane.push_connection(Ok(true));
        let (tx, mut rx) = mpsc::channel(4);
        let mut state = AppState::new();

        // `c` -> ToggleConnection -> RequestConnection -> SetConnection action
        process_message(&mut state, Message::Key(InputKey::Char('c')), &tx, &plane);
        assert!(state.connection.is_pending());

        let outcome = rx.recv().await.expect("command outcome");
        process_message(&mut state, outcome, &tx, &plane);

        assert!(*state.connection.confirmed());
        assert!(!state.connection.is_pending());
        assert_eq!(
            plane.calls(),
            vec![Call::SetConnection {
                connect: true,
                exit_country: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_unanswered_command_clears_pending() {
        // Nothing scripted: the request fails like an unreachable collaborator.
        let plane = Arc::new(ScriptedControlPlane::new());
        let (tx, mut rx) = mpsc::channel(4);
        let mut state = AppState::new();

        process_message(&mut state, Message::RequestConnection { connect: true }, &tx, &plane);
        let outcome = rx.recv().await.expect("command outcome");
        process_message(&mut state, outcome, &tx, &plane);

        assert!(!state.connection.is_pending());
        assert!(!*state.connection.confirmed());
        assert!(state.notice.is_some());
    }
}
