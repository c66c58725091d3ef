//! Headless mode - JSON event output for scripting and E2E checks
//!
//! Instead of drawing a TUI, the headless runner reads one command per line
//! from stdin and writes structured JSON events to stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"status_changed","from":"idle","to":"searching","timestamp":1704700001000}
//! {"event":"matched","peer_id":"user3","peer_name":"Jordan","agent":false,"timestamp":1704700003000}
//! {"event":"message","sender":"peer","text":"Hi there! I'm Jordan. Nice to meet you!","time":"14:02","timestamp":1704700004000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use strangerchat_app::EngineEvent;
use strangerchat_core::{
    CallOrigin, CallState, ChatMessage, ConnectionStatus, Error, Peer, Sender,
};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Connection status moved between idle, searching and connected
    StatusChanged {
        from: ConnectionStatus,
        to: ConnectionStatus,
        timestamp: i64,
    },

    /// A peer was matched
    Matched {
        peer_id: String,
        peer_name: String,
        agent: bool,
        timestamp: i64,
    },

    /// A transcript line was appended
    Message {
        sender: Sender,
        text: String,
        time: String,
        timestamp: i64,
    },

    /// Video call state changed
    CallChanged {
        from: &'static str,
        to: &'static str,
        timestamp: i64,
    },

    /// The current chat ended
    SessionEnded {
        peer_name: Option<String>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        // Serialize to JSON
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its NDJSON form
    ///
    /// Engine shutdown has no headless counterpart.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let event = match event {
            EngineEvent::StatusChanged { from, to } => Self::status_changed(*from, *to),
            EngineEvent::Matched { peer } => Self::matched(peer),
            EngineEvent::MessageAppended { message } => Self::message(message),
            EngineEvent::CallChanged { from, to } => Self::call_changed(*from, *to),
            EngineEvent::SessionEnded { peer } => Self::session_ended(peer.as_ref()),
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn status_changed(from: ConnectionStatus, to: ConnectionStatus) -> Self {
        Self::StatusChanged {
            from,
            to,
            timestamp: Self::now(),
        }
    }

    pub fn matched(peer: &Peer) -> Self {
        Self::Matched {
            peer_id: peer.id.clone(),
            peer_name: peer.name.clone(),
            agent: peer.is_agent(),
            timestamp: Self::now(),
        }
    }

    pub fn message(message: &ChatMessage) -> Self {
        Self::Message {
            sender: message.sender,
            text: message.text.clone(),
            time: message.time.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn call_changed(from: CallState, to: CallState) -> Self {
        Self::CallChanged {
            from: call_label(from),
            to: call_label(to),
            timestamp: Self::now(),
        }
    }

    pub fn session_ended(peer: Option<&Peer>) -> Self {
        Self::SessionEnded {
            peer_name: peer.map(|p| p.name.clone()),
            timestamp: Self::now(),
        }
    }

    /// Report a runner error, flagging the ones that end the run
    pub fn from_error(error: &Error) -> Self {
        Self::error(error.to_string(), error.is_fatal())
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// Flat name for a call state, distinguishing who asked
fn call_label(call: CallState) -> &'static str {
    match call {
        CallState::Idle => "idle",
        CallState::Requested { by: CallOrigin::Me } => "requested_by_me",
        CallState::Requested {
            by: CallOrigin::Peer,
        } => "requested_by_peer",
        CallState::Active => "active",
    }
}
