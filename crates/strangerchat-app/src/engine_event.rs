//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use strangerchat_core::{CallState, ChatMessage, ConnectionStatus, Peer};

/// Domain events emitted by the Engine for external consumers.
///
/// Events are derived by comparing state before and after each message,
/// so subscribers see a consistent view of what changed.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Session Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Connection status changed
    StatusChanged {
        from: ConnectionStatus,
        to: ConnectionStatus,
    },

    /// A peer was matched
    Matched { peer: Peer },

    /// A session ended (manually, by expiry, or by skipping to the next one)
    SessionEnded { peer: Option<Peer> },

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    /// A line was appended to the transcript
    MessageAppended { message: ChatMessage },

    // ─────────────────────────────────────────────────────────
    // Calls
    // ─────────────────────────────────────────────────────────
    /// Video call state changed
    CallChanged { from: CallState, to: CallState },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::StatusChanged { .. } => "status_changed",
            Self::Matched { .. } => "matched",
            Self::SessionEnded { .. } => "session_ended",
            Self::MessageAppended { .. } => "message",
            Self::CallChanged { .. } => "call_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
