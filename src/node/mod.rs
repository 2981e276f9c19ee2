// src/node/mod.rs

//! Node abstraction consumed by the filters.
//!
//! Filters never look inside a node's representation; they only ask whether
//! a container is present. [`ClusterNode`] is the in-memory implementation
//! used by the CLI and tests.

use std::fmt::Debug;
use std::sync::Arc;

pub mod memory;

pub use memory::ClusterNode;

/// A container known to be running on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    /// Container names, Docker style (usually with a leading `/`).
    pub names: Vec<String>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// True if one of the container's names equals `name`, ignoring the
    /// leading `/` on either side.
    pub fn has_name(&self, name: &str) -> bool {
        let wanted = name.trim_start_matches('/');
        self.names
            .iter()
            .any(|n| n.trim_start_matches('/') == wanted)
    }
}

/// Read-only view of a candidate node.
pub trait Node: Debug + Send + Sync {
    /// Node name, for logs and output only.
    fn name(&self) -> &str;

    /// Look up a container by id or name.
    fn container(&self, identifier: &str) -> Option<&Container>;

    fn has_container(&self, identifier: &str) -> bool {
        self.container(identifier).is_some()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn container(&self, identifier: &str) -> Option<&Container> {
        (**self).container(identifier)
    }

    fn has_container(&self, identifier: &str) -> bool {
        (**self).has_container(identifier)
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn container(&self, identifier: &str) -> Option<&Container> {
        (**self).container(identifier)
    }

    fn has_container(&self, identifier: &str) -> bool {
        (**self).has_container(identifier)
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn container(&self, identifier: &str) -> Option<&Container> {
        (**self).container(identifier)
    }

    fn has_container(&self, identifier: &str) -> bool {
        (**self).has_container(identifier)
    }
}
