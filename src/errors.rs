// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The shell could not be started for a stage command.
    #[error("failed to launch `{command}` in {}: {source}", dir.display())]
    Launch {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Publish error: {0}")]
    Publish(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GitterError>;
