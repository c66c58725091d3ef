//! Fixed peer roster, canned texts, and human peer availability

use crate::types::Peer;

/// (id, display name) of every simulated human
pub const HUMAN_PEERS: &[(&str, &str)] = &[
    ("user1", "Alex"),
    ("user2", "Taylor"),
    ("user3", "Jordan"),
    ("user4", "Casey"),
];

/// (id, display name) of the always-available AI companion
pub const AGENT_PEER: (&str, &str) = ("ai1", "AI Companion");

pub const AGENT_GREETING: &str =
    "Hello! I'm an AI companion here to chat while you wait for a human connection.";

pub const AGENT_CALL_REFUSAL: &str =
    "I'm an AI and can't participate in video calls. You can only chat with me.";

pub const AGENT_REPLIES: &[&str] = &[
    "That's an interesting perspective!",
    "I'm an AI here to chat while you wait for a human connection.",
    "What are your thoughts on this topic?",
    "I'm learning from these conversations to become more helpful.",
    "That's a great point! Humans often say similar things.",
    "I can chat about many topics - what interests you?",
    "This is fascinating. Tell me more.",
    "I don't have personal experiences but I can share information.",
    "How has your day been so far?",
    "What do you enjoy doing in your free time?",
];

pub const HUMAN_REPLIES: &[&str] = &[
    "That's interesting!",
    "I see what you mean.",
    "Tell me more about that.",
    "I hadn't thought about it that way.",
    "What do you think about this topic?",
    "That's a good point!",
    "I agree with you.",
    "Let's change the subject.",
    "How's your day going?",
    "Do you have any hobbies?",
];

pub const CALL_ACCEPTED_BY_ME: &str = "You accepted the video call request.";
pub const CALL_REJECTED_BY_ME: &str = "You declined the video call request.";

pub fn human_greeting(name: &str) -> String {
    format!("Hi there! I'm {}. Nice to meet you!", name)
}

pub fn call_declined_by(name: &str) -> String {
    format!("{} declined the video call request.", name)
}

pub fn incoming_call_from(name: &str) -> String {
    format!("{} is requesting a video call.", name)
}

/// The fallback agent peer
pub fn agent_peer() -> Peer {
    Peer::agent(AGENT_PEER.0, AGENT_PEER.1)
}

/// A human peer and whether it can be matched right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub peer: Peer,
    pub available: bool,
}

/// Human peers that can be matched
///
/// Availability only changes through [`PeerPool::claim`] and
/// [`PeerPool::release`].
#[derive(Debug, Clone)]
pub struct PeerPool {
    entries: Vec<PoolEntry>,
}

impl Default for PeerPool {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerPool {
    /// Pool with every human from [`HUMAN_PEERS`] available
    pub fn new() -> Self {
        Self::from_peers(
            HUMAN_PEERS
                .iter()
                .map(|(id, name)| Peer::human(*id, *name)),
        )
    }

    pub fn from_peers(peers: impl IntoIterator<Item = Peer>) -> Self {
        Self {
            entries: peers
                .into_iter()
                .map(|peer| PoolEntry {
                    peer,
                    available: true,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Peers that can currently be matched, in roster order
    pub fn available(&self) -> Vec<&Peer> {
        self.entries
            .iter()
            .filter(|e| e.available)
            .map(|e| &e.peer)
            .collect()
    }

    pub fn unavailable_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.available).count()
    }

    pub fn is_available(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.peer.id == id && e.available)
    }

    /// Mark a peer unavailable. Returns false if unknown or already taken.
    pub fn claim(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.peer.id == id) {
            Some(entry) if entry.available => {
                entry.available = false;
                true
            }
            _ => false,
        }
    }

    /// Mark a peer available again. Returns false if unknown or not taken.
    pub fn release(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.peer.id == id) {
            Some(entry) if !entry.available => {
                entry.available = true;
                true
            }
            _ => false,
        }
    }
}
