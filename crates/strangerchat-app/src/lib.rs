//! strangerchat-app - Application state and orchestration for Stranger Chat
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! matchmaking simulation, the Engine abstraction shared by the TUI and
//! headless runners, simulation timers, injectable randomness and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod random;
pub mod session;
pub mod signals;
pub mod state;
pub mod timers;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{TimerRequest, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, TimerEvent};
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use session::{Session, SessionEpoch};
pub use state::{AppPhase, AppState, UiMode};
