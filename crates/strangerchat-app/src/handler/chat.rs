//! Chat handlers: outgoing messages, simulated replies, compose buffer

use strangerchat_core::{ChatMessage, AGENT_REPLIES, HUMAN_REPLIES};

use crate::message::{Message, TimerEvent};
use crate::state::AppState;

use super::{schedule, UpdateResult};

pub fn handle_send_message(state: &mut AppState, text: String) -> UpdateResult {
    if !state.session.is_connected() {
        tracing::debug!("SendMessage ignored: not connected");
        return UpdateResult::none();
    }
    if text.trim().is_empty() {
        tracing::debug!("SendMessage ignored: empty text");
        return UpdateResult::none();
    }

    state.session.push_message(ChatMessage::from_me(text));

    let r = state.rng.next_f64();
    UpdateResult::action(schedule(
        state.settings.timing.reply_delay(r),
        state.session.epoch,
        TimerEvent::ReplyDue,
    ))
}

/// Reply delay elapsed: the agent always answers, a human only sometimes
pub fn handle_reply_due(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() {
        return UpdateResult::none();
    }

    let pool = if state.session.peer_is_agent() {
        AGENT_REPLIES
    } else if state.rng.chance(state.settings.odds.human_reply) {
        HUMAN_REPLIES
    } else {
        tracing::debug!("{} left the message unanswered", state.session.peer_name());
        return UpdateResult::none();
    };

    let reply = pool[state.rng.pick(pool.len())];
    state.session.push_message(ChatMessage::from_peer(reply));
    UpdateResult::none()
}

/// Send the compose buffer; blank input stays put
pub fn handle_submit_input(state: &mut AppState) -> UpdateResult {
    if state.input.trim().is_empty() || !state.session.is_connected() {
        return UpdateResult::none();
    }
    let text = std::mem::take(&mut state.input);
    UpdateResult::message(Message::SendMessage { text })
}
