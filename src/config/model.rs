// src/config/model.rs

use serde::Deserialize;

use crate::node::{ClusterNode, Container};
use crate::types::ContainerConfig;

/// Scenario file as read from TOML, before validation.
///
/// ```toml
/// [container]
/// volumes_from = ["db1"]
/// links = ["cache1:redis"]
/// network_mode = "container:net1"
///
/// [[node]]
/// name = "A"
/// containers = ["db1", { id = "4f2a9c", names = ["/cache1"] }]
/// ```
///
/// Both sections are optional at the TOML level; validation requires at
/// least one node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScenario {
    /// The container being scheduled.
    #[serde(default)]
    pub container: ContainerConfig,

    /// Candidate nodes from `[[node]]`, in file order.
    #[serde(default)]
    pub node: Vec<NodeSpec>,
}

/// `[[node]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub name: String,

    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
}

/// A container running on a node: either a bare id or a table with names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContainerSpec {
    Id(String),
    Full {
        id: String,
        #[serde(default)]
        names: Vec<String>,
    },
}

impl ContainerSpec {
    pub fn id(&self) -> &str {
        match self {
            ContainerSpec::Id(id) => id,
            ContainerSpec::Full { id, .. } => id,
        }
    }
}

impl From<&ContainerSpec> for Container {
    fn from(spec: &ContainerSpec) -> Self {
        match spec {
            ContainerSpec::Id(id) => Container::new(id.clone()),
            ContainerSpec::Full { id, names } => Container {
                id: id.clone(),
                names: names.clone(),
            },
        }
    }
}

impl From<&NodeSpec> for ClusterNode {
    fn from(spec: &NodeSpec) -> Self {
        spec.containers
            .iter()
            .fold(ClusterNode::new(spec.name.clone()), |node, c| {
                node.with_container(c.into())
            })
    }
}

/// A validated scenario. Construct via `Scenario::try_from(RawScenario)` or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone)]
pub struct Scenario {
    pub container: ContainerConfig,
    pub nodes: Vec<ClusterNode>,
}

impl Scenario {
    pub(crate) fn new_unchecked(container: ContainerConfig, nodes: Vec<ClusterNode>) -> Self {
        Self { container, nodes }
    }
}
