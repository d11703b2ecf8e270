//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::Services;
use crate::state::AppState;

/// Process a message through the TEA update function, following up
/// messages until none remain
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services, shutdown_rx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
