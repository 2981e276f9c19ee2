// src/logging.rs

//! `tracing` subscriber for the `colocate` binary.
//!
//! `--log-level` wins when given. Otherwise `COLOCATE_LOG` is read as an
//! `EnvFilter` directive string, so both `debug` and
//! `colocate::filter=trace` work. Anything else falls back to `info`.
//!
//! Output goes to STDERR; STDOUT carries only the candidate list.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable consulted when no CLI level is given.
pub const LOG_ENV_VAR: &str = "COLOCATE_LOG";

/// Build the filter for the given CLI level, falling back to
/// [`LOG_ENV_VAR`] and then `info`.
pub fn env_filter(cli_level: Option<LogLevel>) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}
