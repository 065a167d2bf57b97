//! Game settings and embed configuration
//!
//! Preferences the host page can override through a global
//! `window.FRUIT_SLASH_CONFIG` JSON object, read once at startup.
//! Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which on-slice feedback handlers to install
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    /// Slice sound effect only
    Sound,
    /// Word reveal only
    Word,
    /// Both handlers
    #[default]
    Both,
}

impl FeedbackMode {
    pub fn sound_enabled(&self) -> bool {
        matches!(self, FeedbackMode::Sound | FeedbackMode::Both)
    }

    pub fn word_enabled(&self) -> bool {
        matches!(self, FeedbackMode::Word | FeedbackMode::Both)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// On-slice feedback selection
    pub feedback: FeedbackMode,
    /// Target word for the reveal mechanic
    pub target_word: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === Video ===
    /// Webcam underlay size relative to the canvas
    pub video_scale: f32,
    /// Draw the red fingertip cursor
    pub show_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feedback: FeedbackMode::Both,
            target_word: "ORANGE".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            video_scale: 0.8,
            show_cursor: true,
        }
    }
}

/// Top-level embed configuration (`window.FRUIT_SLASH_CONFIG`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl Config {
    /// Parse an embed configuration. Missing fields default, unknown
    /// fields are rejected so typos surface at startup.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_mode_flags() {
        assert!(FeedbackMode::Sound.sound_enabled());
        assert!(!FeedbackMode::Sound.word_enabled());
        assert!(FeedbackMode::Word.word_enabled());
        assert!(!FeedbackMode::Word.sound_enabled());
        assert!(FeedbackMode::Both.sound_enabled() && FeedbackMode::Both.word_enabled());
    }

    #[test]
    fn test_config_partial_json() {
        let config =
            Config::from_json(r#"{"settings": {"feedback": "word", "target_word": "BANANA"}}"#)
                .unwrap();
        assert_eq!(config.settings.feedback, FeedbackMode::Word);
        assert_eq!(config.settings.target_word, "BANANA");
        // untouched sections keep their defaults
        assert_eq!(config.tuning.spawn_interval, 40);
        assert!((config.settings.video_scale - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_rejects_unknown_section() {
        assert!(Config::from_json(r#"{"tunning": {}}"#).is_err());
    }
}
