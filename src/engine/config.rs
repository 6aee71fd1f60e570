//! Configuration for the pacing engine and the terminal shell.
//!
//! Defaults reproduce the reader's tuned pacing constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::error::ConfigError;
use crate::reading::progress::ProgressMode;

/// Pacing weights and navigation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Weight of a paragraph break (default 4.0x)
    pub break_multiplier: f64,

    /// Word ending in `,` or `;` (default 2.0x)
    pub clause_multiplier: f64,

    /// Word ending in `. ? ! : ” 。` (default 3.0x)
    pub sentence_multiplier: f64,

    /// Words longer than this many chars get `long_word_multiplier` (default 10)
    pub long_word_threshold: usize,
    pub long_word_multiplier: f64, // default 1.7x

    /// Words longer than this many chars get `very_long_word_multiplier` instead (default 15)
    pub very_long_word_threshold: usize,
    pub very_long_word_multiplier: f64, // default 2.0x

    /// Smallest word skip (default 5)
    pub min_skip_words: usize,

    /// A skip covers this many seconds of reading at the current rate (default 2)
    pub skip_seconds: u32,

    /// Remaining-token count below which time remaining is summed exactly (default 2000)
    pub exact_estimate_limit: usize,

    /// Average weight assumed above the exact limit (default 1.3)
    pub average_weight: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            break_multiplier: 4.0,
            clause_multiplier: 2.0,
            sentence_multiplier: 3.0,
            long_word_threshold: 10,
            long_word_multiplier: 1.7,
            very_long_word_threshold: 15,
            very_long_word_multiplier: 2.0,
            min_skip_words: 5,
            skip_seconds: 2,
            exact_estimate_limit: 2000,
            average_weight: 1.3,
        }
    }
}

/// Rate control owned by the host shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub default_wpm: u32,
    pub min_wpm: u32,
    pub max_wpm: u32,

    /// WPM change per speed key press
    pub wpm_step: u32,

    pub progress_mode: ProgressMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_wpm: 300,
            min_wpm: 60,
            max_wpm: 1200,
            wpm_step: 25,
            progress_mode: ProgressMode::Percent,
        }
    }
}

impl PlaybackConfig {
    pub fn clamp_wpm(&self, wpm: i64) -> u32 {
        wpm.clamp(i64::from(self.min_wpm), i64::from(self.max_wpm)) as u32
    }
}

/// Terminal colours as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
    pub anchor_color: String,
    pub dimmed_color: String,
    pub heading_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            anchor_color: "#F7768E".to_string(),
            dimmed_color: "#646E96".to_string(),
            heading_color: "#2A9D8F".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub playback: PlaybackConfig,
    pub theme: ThemeConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let playback = &self.playback;
        if playback.min_wpm == 0 || playback.min_wpm > playback.max_wpm {
            return Err(ConfigError::InvalidWpmRange {
                min: playback.min_wpm,
                max: playback.max_wpm,
            });
        }
        if !(playback.min_wpm..=playback.max_wpm).contains(&playback.default_wpm) {
            return Err(ConfigError::DefaultWpmOutOfRange(playback.default_wpm));
        }
        Ok(())
    }
}
