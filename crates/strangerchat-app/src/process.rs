//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerSet;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call, and every action is
/// dispatched in the order the handlers returned them.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    timers: &mut TimerSet,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, timers, msg_tx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
