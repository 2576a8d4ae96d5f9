//! Application settings.
//!
//! Every tunable constant lives here so views and the store agree on them.
//! Deployments may override any subset through a JSON document; missing keys
//! keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CardResult;

/// 2 MiB, the largest image file accepted before encoding.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Longest personal message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Tunable application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix prepended to a card id to form its storage key
    pub storage_prefix: String,
    /// URL query parameter carrying the card id
    pub query_param: String,
    /// Countdown recomputation cadence
    pub tick_ms: u64,
    /// Particle animation frame interval
    pub frame_ms: u64,
    /// How long a notice stays on screen
    pub notice_ms: u64,
    /// How long a confetti burst lasts
    pub confetti_ms: u64,
    /// Image file size limit in bytes
    pub max_image_bytes: u64,
    /// Message length limit in characters
    pub max_message_chars: usize,
    /// Number of ambient particles
    pub particle_count: usize,
    /// Number of confetti pieces per burst
    pub confetti_pieces: usize,
    /// Base URL for song embeds
    pub embed_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_prefix: "card-".to_string(),
            query_param: "ref".to_string(),
            tick_ms: 1_000,
            frame_ms: 16,
            notice_ms: 4_000,
            confetti_ms: 5_000,
            max_image_bytes: MAX_IMAGE_BYTES,
            max_message_chars: MAX_MESSAGE_CHARS,
            particle_count: 60,
            confetti_pieces: 150,
            embed_base: "https://open.spotify.com/embed".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings overrides from JSON.
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn confetti_duration(&self) -> Duration {
        Duration::from_millis(self.confetti_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.storage_prefix, "card-");
        assert_eq!(settings.query_param, "ref");
        assert_eq!(settings.tick(), Duration::from_secs(1));
        assert_eq!(settings.confetti_duration(), Duration::from_secs(5));
        assert_eq!(settings.notice_duration(), Duration::from_secs(4));
        assert_eq!(settings.max_image_bytes, 2_097_152);
        assert_eq!(settings.max_message_chars, 300);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "query_param": "card", "tick_ms": 250 }"#).unwrap();
        assert_eq!(settings.query_param, "card");
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.storage_prefix, "card-");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(Settings::from_json("{ nope").is_err());
    }
}
