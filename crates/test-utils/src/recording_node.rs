use std::sync::{Arc, Mutex};

use colocate::node::{ClusterNode, Container, Node};

/// A node that:
/// - delegates lookups to an inner [`ClusterNode`]
/// - records every identifier it was asked about, in order.
///
/// Used to check that the filter stops probing a node after the first
/// missing dependency.
#[derive(Debug, Clone)]
pub struct RecordingNode {
    inner: ClusterNode,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl RecordingNode {
    pub fn new(inner: ClusterNode) -> Self {
        Self {
            inner,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Identifiers looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl Node for RecordingNode {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn container(&self, identifier: &str) -> Option<&Container> {
        self.lookups.lock().unwrap().push(identifier.to_string());
        self.inner.container(identifier)
    }
}
