// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawScenario, Scenario};
use crate::errors::Result;

/// Load a scenario file and return the raw [`RawScenario`].
///
/// Only TOML deserialization happens here. Use [`load_and_validate`] to also
/// check node and container entries.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScenario> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_str(&contents)
}

/// Parse scenario TOML from a string.
pub fn parse_str(contents: &str) -> Result<RawScenario> {
    let raw: RawScenario = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a scenario file from path and validate it.
///
/// This is the entry point the CLI uses: read TOML, apply defaults, then
/// reject scenarios without nodes, duplicate node names, and empty or
/// duplicate container ids on a node.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Scenario> {
    let raw = load_from_path(&path)?;
    Scenario::try_from(raw)
}

/// Default scenario path: `Colocate.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Colocate.toml")
}
