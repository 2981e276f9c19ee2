// src/filter/dependency.rs

//! Co-scheduling of dependent containers.
//!
//! A container that uses `--volumes-from`, `--link` or `--net=container:`
//! can only be placed on a node that already runs every container it refers
//! to. [`DependencyFilter`] narrows a candidate list down to those nodes.

use tracing::{debug, trace};

use crate::errors::{ColocateError, Result};
use crate::filter::dependencies::Dependencies;
use crate::node::Node;
use crate::types::ContainerConfig;

/// Keeps only the nodes hosting all direct dependencies of a container.
///
/// Stateless; one value can be shared freely between scheduling attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyFilter;

impl DependencyFilter {
    pub const NAME: &'static str = "dependency";

    pub fn new() -> Self {
        DependencyFilter
    }

    /// Label of this filter in a filter chain.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Return the nodes, in input order, that host every dependency
    /// declared by `config`.
    ///
    /// An empty `nodes` list is returned as-is. If `nodes` is non-empty and
    /// no node qualifies, fails with [`ColocateError::UnsatisfiableDependency`]
    /// carrying [`DependencyFilter::describe`] of the config.
    pub fn filter<N: Node>(&self, config: &ContainerConfig, nodes: Vec<N>) -> Result<Vec<N>> {
        if nodes.is_empty() {
            return Ok(nodes);
        }

        let deps = Dependencies::from_config(config);
        let total = nodes.len();

        if deps.is_empty() {
            trace!(filter = Self::NAME, total, "no dependencies declared");
            return Ok(nodes);
        }
        debug!(
            filter = Self::NAME,
            total,
            dependencies = ?deps.iter().collect::<Vec<_>>(),
            "checking candidate nodes"
        );

        let candidates: Vec<N> = nodes
            .into_iter()
            .filter(|node| self.accepts(&deps, node))
            .collect();

        if candidates.is_empty() {
            let rendered = self.describe(config);
            debug!(
                filter = Self::NAME,
                total,
                dependencies = %rendered,
                "no node fulfils all dependencies"
            );
            return Err(ColocateError::UnsatisfiableDependency(rendered));
        }

        debug!(
            filter = Self::NAME,
            kept = candidates.len(),
            total,
            "dependency filter applied"
        );
        Ok(candidates)
    }

    /// Render the declared dependencies as `docker run` style flags.
    ///
    /// Order is volumes, links, network; links and network mode are shown as
    /// written in the config. Empty when nothing is declared.
    pub fn describe(&self, config: &ContainerConfig) -> String {
        let host = &config.host_config;
        let mut parts = Vec::new();

        for volume in &host.volumes_from {
            parts.push(format!("--volumes-from={volume}"));
        }
        for link in &host.links {
            parts.push(format!("--link={link}"));
        }
        let network = host.network();
        if network.container().is_some() {
            parts.push(format!("--net={network}"));
        }

        parts.join(" ")
    }

    fn accepts<N: Node>(&self, deps: &Dependencies, node: &N) -> bool {
        let missing = first_missing(&deps.volumes_from, node)
            .or_else(|| first_missing(&deps.links, node))
            .or_else(|| first_missing(&deps.network, node));

        match missing {
            Some(dependency) => {
                debug!(node = node.name(), dependency, "node lacks dependency, excluded");
                false
            }
            None => {
                trace!(node = node.name(), "node hosts all dependencies");
                true
            }
        }
    }
}

/// First identifier in `dependencies` the node does not host.
fn first_missing<'a, N: Node>(dependencies: &'a [String], node: &N) -> Option<&'a str> {
    dependencies
        .iter()
        .map(String::as_str)
        .find(|id| !node.has_container(id))
}
