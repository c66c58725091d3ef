//! Action handlers: UpdateAction dispatch

use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::TimerSet;

/// Execute an action returned by `update()`
pub fn handle_action(action: UpdateAction, timers: &mut TimerSet, msg_tx: &mpsc::Sender<Message>) {
    match action {
        UpdateAction::Schedule(request) => {
            tracing::trace!(
                "Scheduling {:?} in {:?} for session {}",
                request.event,
                request.delay,
                request.epoch
            );
            timers.schedule(request, msg_tx.clone());
        }

        UpdateAction::CancelTimers => timers.cancel_all(),
    }
}
