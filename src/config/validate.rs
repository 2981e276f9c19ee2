// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{NodeSpec, RawScenario, Scenario};
use crate::errors::{ColocateError, Result};
use crate::node::ClusterNode;

impl TryFrom<RawScenario> for Scenario {
    type Error = crate::errors::ColocateError;

    fn try_from(raw: RawScenario) -> std::result::Result<Self, Self::Error> {
        validate_raw_scenario(&raw)?;
        let nodes = raw.node.iter().map(ClusterNode::from).collect();
        Ok(Scenario::new_unchecked(raw.container, nodes))
    }
}

fn validate_raw_scenario(raw: &RawScenario) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_node_names(raw)?;
    for node in raw.node.iter() {
        validate_node_containers(node)?;
    }
    Ok(())
}

fn ensure_has_nodes(raw: &RawScenario) -> Result<()> {
    if raw.node.is_empty() {
        return Err(ColocateError::ConfigError(
            "scenario must contain at least one [[node]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_node_names(raw: &RawScenario) -> Result<()> {
    let mut seen = HashSet::new();
    for node in raw.node.iter() {
        if node.name.trim().is_empty() {
            return Err(ColocateError::ConfigError(
                "[[node]] entry has an empty name".to_string(),
            ));
        }
        if !seen.insert(node.name.as_str()) {
            return Err(ColocateError::ConfigError(format!(
                "duplicate node name '{}'",
                node.name
            )));
        }
    }
    Ok(())
}

// Identifiers in the [container] section are opaque and not checked.
fn validate_node_containers(node: &NodeSpec) -> Result<()> {
    let mut seen = HashSet::new();
    for container in node.containers.iter() {
        let id = container.id();
        if id.is_empty() {
            return Err(ColocateError::ConfigError(format!(
                "node '{}' has a container with an empty id",
                node.name
            )));
        }
        if !seen.insert(id) {
            return Err(ColocateError::ConfigError(format!(
                "node '{}' lists container '{}' more than once",
                node.name, id
            )));
        }
    }
    Ok(())
}
