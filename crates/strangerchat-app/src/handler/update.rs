//! Main update function - handles state transitions (TEA pattern)

use crate::message::{Message, TimerEvent};
use crate::state::AppState;

use super::keys::handle_key;
use super::{call, chat, session, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and actions for the event loop
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.session.is_searching() {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::FindMatch => session::handle_find_match(state),

        Message::EndSession => session::handle_end_session(state),

        // ─────────────────────────────────────────────────────────
        // Chat Messages
        // ─────────────────────────────────────────────────────────
        Message::SendMessage { text } => chat::handle_send_message(state, text),

        Message::InputChar(c) => {
            state.input.push(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.input.pop();
            UpdateResult::none()
        }

        Message::InputClear => {
            state.input.clear();
            UpdateResult::none()
        }

        Message::SubmitInput => chat::handle_submit_input(state),

        // ─────────────────────────────────────────────────────────
        // Call Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestCall => call::handle_request_call(state),

        Message::CancelCallRequest => call::handle_cancel_request(state),

        Message::AcceptCall => call::handle_accept(state),

        Message::RejectCall => call::handle_reject(state),

        Message::EndCall => call::handle_end_call(state),

        // ─────────────────────────────────────────────────────────
        // Timer Messages
        // ─────────────────────────────────────────────────────────
        Message::Timer { epoch, event } => {
            if epoch != state.session.epoch {
                tracing::debug!(
                    "Dropping stale timer {:?} from {} (current {})",
                    event,
                    epoch,
                    state.session.epoch
                );
                return UpdateResult::none();
            }
            handle_timer(state, event)
        }
    }
}

fn handle_timer(state: &mut AppState, event: TimerEvent) -> UpdateResult {
    match event {
        TimerEvent::MatchResolved => session::handle_match_resolved(state),
        TimerEvent::GreetingDue => session::handle_greeting_due(state),
        TimerEvent::CountdownTick => session::handle_countdown_tick(state),
        TimerEvent::SessionExpired => session::handle_session_expired(state),
        TimerEvent::ReplyDue => chat::handle_reply_due(state),
        TimerEvent::CallResponseDue => call::handle_call_response_due(state),
        TimerEvent::IncomingCallCheck { watch } => call::handle_incoming_call_check(state, watch),
    }
}
