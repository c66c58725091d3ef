//! Mock video call negotiation handlers
//!
//! Call state changes go through [`Session::set_call`](crate::session::Session::set_call),
//! which bumps the call watch. Each return to idle while connected to a human
//! schedules a fresh incoming call check tied to the new watch value, so checks
//! scheduled before the change fire into a mismatched watch and are ignored.

use strangerchat_core::pool::{call_declined_by, incoming_call_from};
use strangerchat_core::pool::{CALL_ACCEPTED_BY_ME, CALL_REJECTED_BY_ME};
use strangerchat_core::{CallOrigin, CallState, ChatMessage, AGENT_CALL_REFUSAL};

use crate::message::TimerEvent;
use crate::state::AppState;

use super::{schedule, UpdateAction, UpdateResult};

/// Next incoming call check for the current watch value
pub(crate) fn incoming_check_action(state: &AppState) -> UpdateAction {
    schedule(
        state.settings.timing.incoming_call_interval(),
        state.session.epoch,
        TimerEvent::IncomingCallCheck {
            watch: state.session.call_watch,
        },
    )
}

/// Move the call back to idle, restarting the incoming check for humans
fn return_to_idle(state: &mut AppState) -> UpdateResult {
    state.session.set_call(CallState::Idle);
    if state.session.is_connected() && state.session.human_peer().is_some() {
        UpdateResult::action(incoming_check_action(state))
    } else {
        UpdateResult::none()
    }
}

pub fn handle_request_call(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() {
        tracing::debug!("RequestCall ignored: not connected");
        return UpdateResult::none();
    }
    if !state.session.call.is_idle() {
        tracing::debug!("RequestCall ignored: call is {}", state.session.call.label());
        return UpdateResult::none();
    }

    if state.session.peer_is_agent() {
        state
            .session
            .push_message(ChatMessage::from_peer(AGENT_CALL_REFUSAL));
        return UpdateResult::none();
    }

    state.session.set_call(CallState::Requested { by: CallOrigin::Me });
    UpdateResult::action(schedule(
        state.settings.timing.call_response_delay(),
        state.session.epoch,
        TimerEvent::CallResponseDue,
    ))
}

/// The peer answers our request
pub fn handle_call_response_due(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() || !state.session.call.is_outgoing() {
        return UpdateResult::none();
    }

    if state.rng.chance(state.settings.odds.call_accept) {
        tracing::info!("{} accepted the call", state.session.peer_name());
        state.session.set_call(CallState::Active);
        return UpdateResult::none();
    }

    let declined = call_declined_by(state.session.peer_name());
    state.session.push_message(ChatMessage::from_peer(declined));
    return_to_idle(state)
}

/// Periodic roll for a peer-initiated call
pub fn handle_incoming_call_check(state: &mut AppState, watch: u64) -> UpdateResult {
    if watch != state.session.call_watch
        || !state.session.is_connected()
        || !state.session.call.is_idle()
        || state.session.human_peer().is_none()
    {
        return UpdateResult::none();
    }

    if !state.rng.chance(state.settings.odds.incoming_call) {
        return UpdateResult::action(incoming_check_action(state));
    }

    let notice = incoming_call_from(state.session.peer_name());
    tracing::info!("{}", notice);
    state.session.push_message(ChatMessage::from_peer(notice));
    state.session.set_call(CallState::Requested {
        by: CallOrigin::Peer,
    });
    UpdateResult::none()
}

pub fn handle_accept(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() || !state.session.call.is_incoming() {
        tracing::debug!("AcceptCall ignored: no incoming request");
        return UpdateResult::none();
    }
    state.session.set_call(CallState::Active);
    state
        .session
        .push_message(ChatMessage::from_me(CALL_ACCEPTED_BY_ME));
    UpdateResult::none()
}

pub fn handle_reject(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() || !state.session.call.is_incoming() {
        tracing::debug!("RejectCall ignored: no incoming request");
        return UpdateResult::none();
    }
    state
        .session
        .push_message(ChatMessage::from_me(CALL_REJECTED_BY_ME));
    return_to_idle(state)
}

pub fn handle_end_call(state: &mut AppState) -> UpdateResult {
    if state.session.call != CallState::Active {
        tracing::debug!("EndCall ignored: no active call");
        return UpdateResult::none();
    }
    return_to_idle(state)
}

pub fn handle_cancel_request(state: &mut AppState) -> UpdateResult {
    if !state.session.call.is_outgoing() {
        tracing::debug!("CancelCallRequest ignored: no outgoing request");
        return UpdateResult::none();
    }
    return_to_idle(state)
}
