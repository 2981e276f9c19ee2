// src/filter/dependencies.rs

//! Extraction of co-location dependencies from a container config.

use crate::types::{ContainerConfig, link_target};

/// Direct dependencies declared by a container, one list per source.
///
/// Lists keep declaration order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// From `--volumes-from`, verbatim.
    pub volumes_from: Vec<String>,
    /// Link targets, with the alias half dropped.
    pub links: Vec<String>,
    /// The `container:<id>` network target. At most one entry.
    pub network: Vec<String>,
}

impl Dependencies {
    pub fn from_config(config: &ContainerConfig) -> Self {
        let host = &config.host_config;

        let links = host
            .links
            .iter()
            .map(|raw| link_target(raw).to_string())
            .collect();

        let network = host
            .network()
            .container()
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();

        Self {
            volumes_from: host.volumes_from.clone(),
            links,
            network,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.volumes_from.is_empty() && self.links.is_empty() && self.network.is_empty()
    }

    /// All identifiers: volumes first, then links, then network.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.volumes_from
            .iter()
            .chain(self.links.iter())
            .chain(self.network.iter())
            .map(String::as_str)
    }
}
