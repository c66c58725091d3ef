//! Configuration file parsing for Stranger Chat
//!
//! Supports a single `config.toml` with `[timing]`, `[odds]` and
//! `[behavior]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, save_settings, CONFIG_FILENAME,
};
pub use types::*;
