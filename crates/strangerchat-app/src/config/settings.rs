//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use strangerchat_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "strangerchat";

/// Default settings location: `<config_dir>/strangerchat/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a TOML file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// Loaded values are clamped into range.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                let normalized = settings.clone().normalized();
                if normalized != settings {
                    warn!("Out-of-range values in {:?} were clamped", config_path);
                }
                normalized
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Save settings to a TOML file, creating parent directories as needed
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(config_path, content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    debug!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Write a default config file unless one already exists
///
/// Returns true if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    save_settings(config_path, &Settings::default())?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));

        assert_eq!(settings, Settings::default());
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let config = r#"
[timing]
search_delay_ms = 500
session_length_secs = 60

[odds]
human_reply = 1.0

[behavior]
confirm_quit = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.timing.search_delay_ms, 500);
        assert_eq!(settings.timing.session_length_secs, 60);
        // Unspecified fields keep their defaults
        assert_eq!(settings.timing.greeting_delay_ms, 1000);
        assert_eq!(settings.odds.human_reply, 1.0);
        assert_eq!(settings.odds.call_accept, 0.5);
        assert!(!settings.behavior.confirm_quit);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_clamps_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[timing]\nsession_length_secs = 1200\n[odds]\nincoming_call = 4.0\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.timing.session_length_secs, 300);
        assert_eq!(settings.odds.incoming_call, 1.0);
    }

    #[test]
    fn test_load_settings_rejects_zero_incoming_interval() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[timing]\nincoming_call_interval_ms = 0\nreply_delay_min_ms = 9000000000000\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert!(settings.timing.incoming_call_interval() >= std::time::Duration::from_millis(100));
        assert_eq!(settings.timing.reply_delay_min_ms, crate::config::MAX_DELAY_MS);
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        let mut settings = Settings::default();
        settings.timing.incoming_call_interval_ms = 5000;
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn test_init_config_file_only_once() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert!(!init_config_file(&path).unwrap());
    }

    #[test]
    fn test_default_config_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("strangerchat/config.toml"));
    }
}
