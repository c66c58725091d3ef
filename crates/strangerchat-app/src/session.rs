//! The current chat session: status, peer, countdown, transcript and call.

use strangerchat_core::{CallState, ChatMessage, ConnectionStatus, Peer};

/// Generation counter for the session lifetime
///
/// Bumped on every match start and every teardown. Timer messages carry the
/// epoch they were scheduled in and are dropped once it has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of the single matchmaking session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub status: ConnectionStatus,

    /// Countdown, only decremented while connected
    pub remaining_secs: u32,

    pub peer: Option<Peer>,

    /// Ordered, append-only for the life of a match
    pub transcript: Vec<ChatMessage>,

    pub call: CallState,

    /// Current generation; see [`SessionEpoch`]
    pub epoch: SessionEpoch,

    /// Bumped on every call state change. The incoming call check is tied to
    /// the value current when the call last went idle.
    pub call_watch: u64,

    /// Countdown hit zero and the expiry timer is pending
    pub expiring: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.status == ConnectionStatus::Idle
    }

    pub fn is_searching(&self) -> bool {
        self.status == ConnectionStatus::Searching
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Connected peer that is a simulated human
    pub fn human_peer(&self) -> Option<&Peer> {
        self.peer.as_ref().filter(|p| !p.is_agent())
    }

    pub fn peer_is_agent(&self) -> bool {
        self.peer.as_ref().is_some_and(|p| p.is_agent())
    }

    pub fn peer_name(&self) -> &str {
        self.peer.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Enter the searching phase with a fresh transcript and countdown
    pub fn begin_search(&mut self, session_length_secs: u32) -> SessionEpoch {
        self.epoch = self.epoch.next();
        self.status = ConnectionStatus::Searching;
        self.transcript.clear();
        self.call = CallState::Idle;
        self.remaining_secs = session_length_secs;
        self.peer = None;
        self.expiring = false;
        self.epoch
    }

    /// Attach the matched peer
    pub fn connect(&mut self, peer: Peer) {
        self.status = ConnectionStatus::Connected;
        self.peer = Some(peer);
        self.call_watch = self.call_watch.wrapping_add(1);
    }

    /// Return to idle, handing back the peer that was matched
    ///
    /// The transcript is kept until the next match starts.
    pub fn teardown(&mut self) -> Option<Peer> {
        self.epoch = self.epoch.next();
        self.status = ConnectionStatus::Idle;
        self.call = CallState::Idle;
        self.call_watch = self.call_watch.wrapping_add(1);
        self.expiring = false;
        self.peer.take()
    }

    /// Change the call state. Returns false when nothing changed.
    pub fn set_call(&mut self, call: CallState) -> bool {
        if self.call == call {
            return false;
        }
        self.call = call;
        self.call_watch = self.call_watch.wrapping_add(1);
        true
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }

    /// Countdown as `m:ss`
    pub fn countdown_display(&self) -> String {
        strangerchat_core::format_countdown(self.remaining_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strangerchat_core::CallOrigin;

    #[test]
    fn test_begin_search_resets_session() {
        let mut session = Session::new();
        session.push_message(ChatMessage::from_me("old"));
        session.call = CallState::Active;
        session.expiring = true;
        let before = session.epoch;

        let epoch = session.begin_search(300);

        assert!(epoch > before);
        assert!(session.is_searching());
        assert!(session.transcript.is_empty());
        assert_eq!(session.call, CallState::Idle);
        assert_eq!(session.remaining_secs, 300);
        assert!(!session.expiring);
    }

    #[test]
    fn test_teardown_returns_peer_and_keeps_transcript() {
        let mut session = Session::new();
        session.begin_search(300);
        session.connect(Peer::human("user1", "Alex"));
        session.push_message(ChatMessage::from_peer("hi"));
        let epoch = session.epoch;

        let peer = session.teardown();

        assert_eq!(peer.map(|p| p.id), Some("user1".to_string()));
        assert!(session.is_idle());
        assert!(session.peer.is_none());
        assert_ne!(session.epoch, epoch);
        assert_eq!(session.transcript.len(), 1);
    }

    #[test]
    fn test_set_call_bumps_watch_only_on_change() {
        let mut session = Session::new();
        let watch = session.call_watch;

        assert!(!session.set_call(CallState::Idle));
        assert_eq!(session.call_watch, watch);

        assert!(session.set_call(CallState::Requested { by: CallOrigin::Me }));
        assert_eq!(session.call_watch, watch + 1);
    }

    #[test]
    fn test_human_peer_filters_agent() {
        let mut session = Session::new();
        session.connect(Peer::agent("ai1", "AI Companion"));
        assert!(session.human_peer().is_none());
        assert!(session.peer_is_agent());
    }

    #[test]
    fn test_countdown_display() {
        let mut session = Session::new();
        session.remaining_secs = 61;
        assert_eq!(session.countdown_display(), "1:01");
    }
}
