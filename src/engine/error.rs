use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid WPM range: {min}..={max}")]
    InvalidWpmRange { min: u32, max: u32 },

    #[error("Default WPM {0} is outside the configured range")]
    DefaultWpmOutOfRange(u32),
}
