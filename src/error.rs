//! Construction-time error types
//!
//! The simulation itself has no failure modes; everything that can go wrong
//! happens while reading config and level sources, before the first tick.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a playable level set
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level source {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level `{name}` has no lines")]
    Empty { name: String },
    #[error("no level sources found")]
    NoLevels,
}

/// Failure to load or validate a [`crate::Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
