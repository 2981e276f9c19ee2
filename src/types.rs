// src/types.rs

//! Value types describing the container being scheduled.
//!
//! These mirror the subset of a Docker container config that carries
//! co-location dependencies. Field aliases accept the Docker spellings
//! (`VolumesFrom`, `Links`, `NetworkMode`) so configs lifted straight from
//! an engine API payload deserialize as-is.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Network mode prefix that shares another container's network namespace.
pub const CONTAINER_NETWORK_PREFIX: &str = "container:";

/// Container configuration as consumed by the filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContainerConfig {
    #[serde(flatten)]
    pub host_config: HostConfig,
}

impl ContainerConfig {
    pub fn new(host_config: HostConfig) -> Self {
        Self { host_config }
    }
}

/// Host-level settings of a container config.
///
/// Every field is optional in the source and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Containers whose volumes are mounted (`--volumes-from`).
    #[serde(alias = "VolumesFrom")]
    pub volumes_from: Vec<String>,

    /// Links in `<container>:<alias>` form (`--link`).
    #[serde(alias = "Links")]
    pub links: Vec<String>,

    /// Raw network mode string (`--net`), e.g. `"bridge"` or
    /// `"container:web1"`.
    #[serde(alias = "NetworkMode")]
    pub network_mode: String,
}

impl HostConfig {
    /// Parsed view of [`HostConfig::network_mode`].
    pub fn network(&self) -> NetworkMode {
        let Ok(mode) = self.network_mode.parse::<NetworkMode>();
        mode
    }
}

/// Parsed network mode.
///
/// Unknown values (user-defined network names, for instance) are kept as
/// [`NetworkMode::Other`] rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NetworkMode {
    /// Empty string or `"default"`.
    #[default]
    Default,
    Bridge,
    Host,
    None,
    /// `container:<id>`: join the network namespace of another container.
    Container(String),
    Other(String),
}

impl NetworkMode {
    /// The container this mode depends on, if any.
    pub fn container(&self) -> Option<&str> {
        match self {
            NetworkMode::Container(id) => Some(id),
            _ => None,
        }
    }
}

impl FromStr for NetworkMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix(CONTAINER_NETWORK_PREFIX) {
            return Ok(NetworkMode::Container(id.to_string()));
        }
        Ok(match s {
            "" | "default" => NetworkMode::Default,
            "bridge" => NetworkMode::Bridge,
            "host" => NetworkMode::Host,
            "none" => NetworkMode::None,
            other => NetworkMode::Other(other.to_string()),
        })
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::Default => f.write_str("default"),
            NetworkMode::Bridge => f.write_str("bridge"),
            NetworkMode::Host => f.write_str("host"),
            NetworkMode::None => f.write_str("none"),
            NetworkMode::Container(id) => write!(f, "{CONTAINER_NETWORK_PREFIX}{id}"),
            NetworkMode::Other(name) => f.write_str(name),
        }
    }
}

/// Container named by a `--link` entry.
///
/// Splits once on the first `:` and drops the alias. An entry without a
/// colon is taken as a bare container identifier.
pub fn link_target(raw: &str) -> &str {
    raw.split_once(':').map_or(raw, |(target, _alias)| target)
}
