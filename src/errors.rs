// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColocateError {
    /// No candidate node hosts every declared dependency. Carries the
    /// rendered `--volumes-from=... --link=... --net=...` description.
    #[error("unable to find a node fulfilling all dependencies: {0}")]
    UnsatisfiableDependency(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ColocateError>;
