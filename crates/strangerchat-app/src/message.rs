//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::session::SessionEpoch;

/// Delayed events produced by scheduled timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Search delay elapsed, pick a peer
    MatchResolved,
    /// Peer says hello
    GreetingDue,
    /// Peer may answer the last message
    ReplyDue,
    /// Peer answers our call request
    CallResponseDue,
    /// Periodic roll for a peer-initiated call
    IncomingCallCheck { watch: u64 },
    /// One second of the countdown elapsed
    CountdownTick,
    /// Grace period after the countdown hit zero
    SessionExpired,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic UI updates
    Tick,

    /// Request to quit (may show confirmation dialog while connected)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Start searching for a stranger (ends the current chat first)
    FindMatch,
    /// Leave the current chat or search
    EndSession,

    // ─────────────────────────────────────────────────────────
    // Chat Messages
    // ─────────────────────────────────────────────────────────
    /// Send a message to the peer
    SendMessage { text: String },
    /// Append a character to the compose buffer
    InputChar(char),
    /// Delete the last compose character
    InputBackspace,
    /// Clear the compose buffer
    InputClear,
    /// Send the compose buffer
    SubmitInput,

    // ─────────────────────────────────────────────────────────
    // Call Messages
    // ─────────────────────────────────────────────────────────
    /// Ask the peer for a video call
    RequestCall,
    /// Withdraw our pending call request
    CancelCallRequest,
    /// Accept the peer's call request
    AcceptCall,
    /// Decline the peer's call request
    RejectCall,
    /// Hang up the active call
    EndCall,

    // ─────────────────────────────────────────────────────────
    // Timer Messages
    // ─────────────────────────────────────────────────────────
    /// A scheduled timer fired
    Timer {
        epoch: SessionEpoch,
        event: TimerEvent,
    },
}
