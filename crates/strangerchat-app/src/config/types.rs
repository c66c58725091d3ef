//! Configuration types for Stranger Chat
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `TimingSettings` - Simulated delays and session length
//! - `OddsSettings` - Probabilities for simulated peer behavior
//! - `BehaviorSettings` - Front-end behavior toggles

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strangerchat_core::MAX_SESSION_SECS;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub odds: OddsSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl Settings {
    /// Clamp every value into its valid range
    pub fn normalized(mut self) -> Self {
        self.timing = self.timing.normalized();
        self.odds.human_reply = clamp_probability(self.odds.human_reply);
        self.odds.call_accept = clamp_probability(self.odds.call_accept);
        self.odds.incoming_call = clamp_probability(self.odds.incoming_call);
        self
    }
}

/// Longest accepted delay for any simulated event (ten minutes)
pub const MAX_DELAY_MS: u64 = 600_000;

/// Shortest accepted incoming call check period
pub const MIN_INCOMING_CALL_INTERVAL_MS: u64 = 100;

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Simulated delays, all in milliseconds except the session length
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Time spent "searching" before a peer is picked
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Delay between connecting and the peer's greeting
    #[serde(default = "default_greeting_delay_ms")]
    pub greeting_delay_ms: u64,

    /// Minimum reply delay
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,

    /// Random extra reply delay on top of the minimum
    #[serde(default = "default_reply_delay_spread_ms")]
    pub reply_delay_spread_ms: u64,

    /// Time the peer takes to answer our call request
    #[serde(default = "default_call_response_delay_ms")]
    pub call_response_delay_ms: u64,

    /// Period of the incoming call check
    #[serde(default = "default_incoming_call_interval_ms")]
    pub incoming_call_interval_ms: u64,

    /// Pause between the countdown hitting zero and the session ending
    #[serde(default = "default_expiry_grace_ms")]
    pub expiry_grace_ms: u64,

    /// Countdown start value, capped at five minutes
    #[serde(default = "default_session_length_secs")]
    pub session_length_secs: u32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            search_delay_ms: default_search_delay_ms(),
            greeting_delay_ms: default_greeting_delay_ms(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_spread_ms: default_reply_delay_spread_ms(),
            call_response_delay_ms: default_call_response_delay_ms(),
            incoming_call_interval_ms: default_incoming_call_interval_ms(),
            expiry_grace_ms: default_expiry_grace_ms(),
            session_length_secs: default_session_length_secs(),
        }
    }
}

impl TimingSettings {
    /// Cap every delay and keep the periodic check from spinning
    fn normalized(mut self) -> Self {
        for delay in [
            &mut self.search_delay_ms,
            &mut self.greeting_delay_ms,
            &mut self.reply_delay_min_ms,
            &mut self.reply_delay_spread_ms,
            &mut self.call_response_delay_ms,
            &mut self.expiry_grace_ms,
        ] {
            *delay = (*delay).min(MAX_DELAY_MS);
        }
        self.incoming_call_interval_ms = self
            .incoming_call_interval_ms
            .clamp(MIN_INCOMING_CALL_INTERVAL_MS, MAX_DELAY_MS);
        self.session_length_secs = self.session_length_secs.clamp(1, MAX_SESSION_SECS);
        self
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }

    /// Reply delay for a uniform draw `r` in `[0, 1)`
    pub fn reply_delay(&self, r: f64) -> Duration {
        let extra = (self.reply_delay_spread_ms as f64 * r.clamp(0.0, 1.0)) as u64;
        Duration::from_millis(self.reply_delay_min_ms.saturating_add(extra))
    }

    pub fn call_response_delay(&self) -> Duration {
        Duration::from_millis(self.call_response_delay_ms)
    }

    pub fn incoming_call_interval(&self) -> Duration {
        Duration::from_millis(self.incoming_call_interval_ms)
    }

    pub fn expiry_grace(&self) -> Duration {
        Duration::from_millis(self.expiry_grace_ms)
    }

    /// Countdown tick period
    pub fn countdown_tick(&self) -> Duration {
        Duration::from_secs(1)
    }
}

fn default_search_delay_ms() -> u64 {
    2000
}

fn default_greeting_delay_ms() -> u64 {
    1000
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_spread_ms() -> u64 {
    3000
}

fn default_call_response_delay_ms() -> u64 {
    2000
}

fn default_incoming_call_interval_ms() -> u64 {
    15_000
}

fn default_expiry_grace_ms() -> u64 {
    1000
}

fn default_session_length_secs() -> u32 {
    MAX_SESSION_SECS
}

/// Probabilities for simulated peer behavior, each in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OddsSettings {
    /// Chance that a human peer answers a message
    #[serde(default = "default_human_reply")]
    pub human_reply: f64,

    /// Chance that a human peer accepts our call request
    #[serde(default = "default_call_accept")]
    pub call_accept: f64,

    /// Chance, per check, that a human peer starts a call
    #[serde(default = "default_incoming_call")]
    pub incoming_call: f64,
}

impl Default for OddsSettings {
    fn default() -> Self {
        Self {
            human_reply: default_human_reply(),
            call_accept: default_call_accept(),
            incoming_call: default_incoming_call(),
        }
    }
}

fn default_human_reply() -> f64 {
    0.7
}

fn default_call_accept() -> f64 {
    0.5
}

fn default_incoming_call() -> f64 {
    0.3
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while connected
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_matches_simulation_constants() {
        let timing = TimingSettings::default();
        assert_eq!(timing.search_delay(), Duration::from_millis(2000));
        assert_eq!(timing.greeting_delay(), Duration::from_millis(1000));
        assert_eq!(timing.call_response_delay(), Duration::from_millis(2000));
        assert_eq!(timing.incoming_call_interval(), Duration::from_secs(15));
        assert_eq!(timing.session_length_secs, 300);
    }

    #[test]
    fn test_reply_delay_spans_min_to_min_plus_spread() {
        let timing = TimingSettings::default();
        assert_eq!(timing.reply_delay(0.0), Duration::from_millis(1000));
        assert_eq!(timing.reply_delay(0.5), Duration::from_millis(2500));
        assert!(timing.reply_delay(0.999) < Duration::from_millis(4000));
    }

    #[test]
    fn test_normalized_clamps_out_of_range_values() {
        let mut settings = Settings::default();
        settings.timing.session_length_secs = 9000;
        settings.odds.human_reply = 1.5;
        settings.odds.call_accept = -0.2;
        settings.odds.incoming_call = f64::NAN;

        let settings = settings.normalized();

        assert_eq!(settings.timing.session_length_secs, 300);
        assert_eq!(settings.odds.human_reply, 1.0);
        assert_eq!(settings.odds.call_accept, 0.0);
        assert_eq!(settings.odds.incoming_call, 0.0);
    }

    #[test]
    fn test_normalized_keeps_incoming_check_periodic() {
        let mut settings = Settings::default();
        settings.timing.incoming_call_interval_ms = 0;

        let timing = settings.normalized().timing;

        assert_eq!(
            timing.incoming_call_interval(),
            Duration::from_millis(MIN_INCOMING_CALL_INTERVAL_MS)
        );
    }

    #[test]
    fn test_normalized_caps_huge_delays() {
        let mut settings = Settings::default();
        settings.timing.reply_delay_min_ms = u64::MAX;
        settings.timing.reply_delay_spread_ms = u64::MAX;
        settings.timing.search_delay_ms = u64::MAX;

        let timing = settings.normalized().timing;

        assert_eq!(timing.search_delay(), Duration::from_millis(MAX_DELAY_MS));
        assert_eq!(timing.reply_delay(0.9), Duration::from_millis(MAX_DELAY_MS + 540_000));
        // Defaults are already in range
        assert_eq!(
            TimingSettings::default().normalized(),
            TimingSettings::default()
        );
    }

    #[test]
    fn test_reply_delay_saturates_without_normalizing() {
        let timing = TimingSettings {
            reply_delay_min_ms: u64::MAX,
            ..TimingSettings::default()
        };
        assert_eq!(timing.reply_delay(0.9), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_normalized_raises_zero_session_length() {
        let mut settings = Settings::default();
        settings.timing.session_length_secs = 0;
        assert_eq!(settings.normalized().timing.session_length_secs, 1);
    }

    #[test]
    fn test_default_odds() {
        let odds = OddsSettings::default();
        assert_eq!(odds.human_reply, 0.7);
        assert_eq!(odds.call_accept, 0.5);
        assert_eq!(odds.incoming_call, 0.3);
    }
}
