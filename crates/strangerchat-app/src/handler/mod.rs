//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `session`: Match lifecycle and countdown
//! - `chat`: Sending messages, simulated replies, compose buffer
//! - `call`: Mock video call negotiation
//! - `keys`: Key event handlers for UI modes

pub(crate) mod call;
pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod session;
pub(crate) mod update;


use std::time::Duration;

use crate::message::{Message, TimerEvent};
use crate::session::SessionEpoch;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// A delayed event to deliver back to `update()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub delay: Duration,
    /// Session generation the timer belongs to
    pub epoch: SessionEpoch,
    pub event: TimerEvent,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver `Message::Timer` after a delay
    Schedule(TimerRequest),

    /// Abort every pending timer
    CancelTimers,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    /// Append another action after the existing ones
    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Merge a later result into this one
    pub fn and(mut self, other: UpdateResult) -> Self {
        self.actions.extend(other.actions);
        if other.message.is_some() {
            self.message = other.message;
        }
        self
    }
}

/// Shorthand for a `Schedule` action
pub(crate) fn schedule(delay: Duration, epoch: SessionEpoch, event: TimerEvent) -> UpdateAction {
    UpdateAction::Schedule(TimerRequest {
        delay,
        epoch,
        event,
    })
}
