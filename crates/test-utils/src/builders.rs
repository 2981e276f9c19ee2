#![allow(dead_code)]

use colocate::node::{ClusterNode, Container};
use colocate::types::{ContainerConfig, HostConfig};

/// Builder for `ContainerConfig` to simplify test setup.
pub struct ContainerConfigBuilder {
    host: HostConfig,
}

impl ContainerConfigBuilder {
    pub fn new() -> Self {
        Self {
            host: HostConfig::default(),
        }
    }

    pub fn volumes_from(mut self, container: &str) -> Self {
        self.host.volumes_from.push(container.to_string());
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.host.links.push(link.to_string());
        self
    }

    pub fn network_mode(mut self, mode: &str) -> Self {
        self.host.network_mode = mode.to_string();
        self
    }

    pub fn build(self) -> ContainerConfig {
        ContainerConfig::new(self.host)
    }
}

impl Default for ContainerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ClusterNode`.
pub struct NodeBuilder {
    node: ClusterNode,
}

impl NodeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            node: ClusterNode::new(name),
        }
    }

    /// Add a container known only by id.
    pub fn hosting(mut self, id: &str) -> Self {
        self.node.add_container(Container::new(id));
        self
    }

    /// Add a container with an id and a single name.
    pub fn hosting_named(mut self, id: &str, name: &str) -> Self {
        self.node.add_container(Container::new(id).with_name(name));
        self
    }

    pub fn build(self) -> ClusterNode {
        self.node
    }
}

/// Shorthand: a node called `name` hosting each of `ids`.
pub fn node(name: &str, ids: &[&str]) -> ClusterNode {
    ids.iter()
        .fold(NodeBuilder::new(name), |b, id| b.hosting(id))
        .build()
}
