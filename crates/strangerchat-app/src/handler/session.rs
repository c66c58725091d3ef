//! Match lifecycle handlers: search, match resolution, greeting, countdown
//! and teardown

use strangerchat_core::pool::{agent_peer, human_greeting};
use strangerchat_core::{ChatMessage, AGENT_GREETING};

use crate::message::TimerEvent;
use crate::state::AppState;

use super::{call, schedule, UpdateAction, UpdateResult};

/// Handle FindMatch: start searching, ending the current chat first
pub fn handle_find_match(state: &mut AppState) -> UpdateResult {
    if state.session.is_searching() {
        tracing::debug!("FindMatch ignored: already searching");
        return UpdateResult::none();
    }

    let mut result = UpdateResult::none();
    if state.session.is_connected() {
        tracing::info!("Skipping to the next stranger");
        result = handle_end_session(state);
    }

    let epoch = state
        .session
        .begin_search(state.settings.timing.session_length_secs);
    state.spinner_frame = 0;
    tracing::info!("Searching for a stranger (session {})", epoch);

    result.with_action(schedule(
        state.settings.timing.search_delay(),
        epoch,
        TimerEvent::MatchResolved,
    ))
}

/// Search delay elapsed: pick a human at random, else the agent
pub fn handle_match_resolved(state: &mut AppState) -> UpdateResult {
    if !state.session.is_searching() {
        return UpdateResult::none();
    }

    let available: Vec<_> = state.pool.available().into_iter().cloned().collect();
    let peer = if available.is_empty() {
        agent_peer()
    } else {
        let index = state.rng.pick(available.len());
        let peer = available[index].clone();
        state.pool.claim(&peer.id);
        peer
    };

    tracing::info!("Matched with {} ({})", peer.name, peer.id);
    let is_human = !peer.is_agent();
    state.session.connect(peer);

    let timing = &state.settings.timing;
    let epoch = state.session.epoch;
    let mut result = UpdateResult::action(schedule(
        timing.greeting_delay(),
        epoch,
        TimerEvent::GreetingDue,
    ))
    .with_action(schedule(
        timing.countdown_tick(),
        epoch,
        TimerEvent::CountdownTick,
    ));

    if is_human {
        result = result.with_action(call::incoming_check_action(state));
    }
    result
}

/// Greeting delay elapsed: the peer says hello
pub fn handle_greeting_due(state: &mut AppState) -> UpdateResult {
    let Some(peer) = state.session.peer.as_ref() else {
        return UpdateResult::none();
    };

    let greeting = if peer.is_agent() {
        AGENT_GREETING.to_string()
    } else {
        human_greeting(&peer.name)
    };
    state.session.push_message(ChatMessage::from_peer(greeting));
    UpdateResult::none()
}

/// One second of the countdown elapsed
pub fn handle_countdown_tick(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() || state.session.expiring {
        return UpdateResult::none();
    }

    let epoch = state.session.epoch;
    if state.session.remaining_secs <= 1 {
        state.session.remaining_secs = 0;
        state.session.expiring = true;
        tracing::info!("Session {} time is up", epoch);
        return UpdateResult::action(schedule(
            state.settings.timing.expiry_grace(),
            epoch,
            TimerEvent::SessionExpired,
        ));
    }

    state.session.remaining_secs -= 1;
    UpdateResult::action(schedule(
        state.settings.timing.countdown_tick(),
        epoch,
        TimerEvent::CountdownTick,
    ))
}

pub fn handle_session_expired(state: &mut AppState) -> UpdateResult {
    if !state.session.is_connected() || !state.session.expiring {
        return UpdateResult::none();
    }
    handle_end_session(state)
}

/// Leave the current chat or search: release the peer, cancel timers
pub fn handle_end_session(state: &mut AppState) -> UpdateResult {
    if state.session.is_idle() {
        tracing::debug!("EndSession ignored: no session");
        return UpdateResult::none();
    }

    if let Some(peer) = state.session.human_peer() {
        let id = peer.id.clone();
        if !state.pool.release(&id) {
            tracing::warn!("Peer {} was already available", id);
        }
    }

    let peer = state.session.teardown();
    tracing::info!(
        "Session ended{}",
        peer.map(|p| format!(" with {}", p.name)).unwrap_or_default()
    );
    UpdateResult::action(UpdateAction::CancelTimers)
}
