//! # strangerchat-core - Core Domain Types
//!
//! Foundation crate for Stranger Chat. Provides domain types, the fixed peer
//! and reply pools, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConnectionStatus`] - Matchmaking lifecycle (Idle, Searching, Connected)
//! - [`Peer`], [`PeerKind`] - A chat partner, human or agent
//! - [`ChatMessage`], [`Sender`] - One transcript line
//! - [`CallState`], [`CallOrigin`] - Mock video call negotiation state
//!
//! ### Pools (`pool`)
//! - [`PeerPool`] - Human peers with availability flags
//! - [`HUMAN_PEERS`], [`AGENT_PEER`] - Fixed peer roster
//! - [`HUMAN_REPLIES`], [`AGENT_REPLIES`] - Canned reply texts
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use strangerchat_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod pool;
pub mod types;

/// Prelude for common imports used throughout all Stranger Chat crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use pool::{
    PeerPool, PoolEntry, AGENT_CALL_REFUSAL, AGENT_GREETING, AGENT_PEER, AGENT_REPLIES,
    HUMAN_PEERS, HUMAN_REPLIES,
};
pub use types::{
    format_countdown, CallOrigin, CallState, ChatMessage, ConnectionStatus, Peer, PeerKind, Sender,
    MAX_SESSION_SECS,
};
