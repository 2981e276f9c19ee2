// src/node/memory.rs

use super::{Container, Node};

/// In-memory node holding a fixed list of containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterNode {
    name: String,
    containers: Vec<Container>,
}

impl ClusterNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containers: Vec::new(),
        }
    }

    pub fn add_container(&mut self, container: Container) {
        self.containers.push(container);
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.add_container(container);
        self
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }
}

impl Node for ClusterNode {
    fn name(&self) -> &str {
        &self.name
    }

    /// Resolution order: exact id, then name, then a unique id prefix.
    /// An empty identifier or an ambiguous prefix resolves to nothing.
    fn container(&self, identifier: &str) -> Option<&Container> {
        if identifier.is_empty() {
            return None;
        }

        if let Some(c) = self.containers.iter().find(|c| c.id == identifier) {
            return Some(c);
        }

        if let Some(c) = self.containers.iter().find(|c| c.has_name(identifier)) {
            return Some(c);
        }

        let mut by_prefix = self
            .containers
            .iter()
            .filter(|c| c.id.starts_with(identifier));
        match (by_prefix.next(), by_prefix.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}
