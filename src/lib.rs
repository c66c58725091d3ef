//! Stranger Chat Library
//!
//! A random-chat matchmaking simulator. The TUI lives in `strangerchat-tui`;
//! this crate adds the headless runner used by scripts and end-to-end checks.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use strangerchat_tui::run;
