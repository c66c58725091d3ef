//! Core domain types for the matchmaking simulation

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Upper bound on a session's countdown, in seconds (five minutes)
pub const MAX_SESSION_SECS: u32 = 300;

/// Matchmaking lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Nobody matched, waiting for the user to search
    #[default]
    Idle,
    /// A match is being simulated
    Searching,
    /// Chatting with a peer; the countdown is running
    Connected,
}

impl ConnectionStatus {
    /// Human-readable label for status bars
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "Idle",
            ConnectionStatus::Searching => "Searching",
            ConnectionStatus::Connected => "Connected",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a peer stands in for another user or for the AI companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerKind {
    Human,
    Agent,
}

/// A simulated chat partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub id: String,
    pub name: String,
    pub kind: PeerKind,
}

impl Peer {
    pub fn human(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PeerKind::Human,
        }
    }

    pub fn agent(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PeerKind::Agent,
        }
    }

    pub fn is_agent(&self) -> bool {
        self.kind == PeerKind::Agent
    }
}

/// Author of a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The local user
    Me,
    /// The matched peer
    Peer,
}

/// One line in the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Wall-clock label, `HH:MM`
    pub time: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self::at(sender, text, Local::now())
    }

    /// Build a message stamped with an explicit time
    pub fn at(sender: Sender, text: impl Into<String>, when: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            sender,
            time: when.format("%H:%M").to_string(),
        }
    }

    pub fn from_me(text: impl Into<String>) -> Self {
        Self::new(Sender::Me, text)
    }

    pub fn from_peer(text: impl Into<String>) -> Self {
        Self::new(Sender::Peer, text)
    }
}

/// Which side asked for a video call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOrigin {
    Me,
    Peer,
}

/// Mock video call negotiation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CallState {
    /// No call requested or running
    #[default]
    Idle,
    /// Waiting for the other side to answer
    Requested { by: CallOrigin },
    /// Call in progress
    Active,
}

impl CallState {
    pub fn is_idle(&self) -> bool {
        matches!(self, CallState::Idle)
    }

    /// True when the peer is ringing us and we may accept or reject
    pub fn is_incoming(&self) -> bool {
        matches!(
            self,
            CallState::Requested {
                by: CallOrigin::Peer
            }
        )
    }

    /// True when we are waiting for the peer to answer our request
    pub fn is_outgoing(&self) -> bool {
        matches!(self, CallState::Requested { by: CallOrigin::Me })
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallState::Idle => "none",
            CallState::Requested { .. } => "requested",
            CallState::Active => "active",
        }
    }
}

/// Format a countdown as `m:ss`
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
