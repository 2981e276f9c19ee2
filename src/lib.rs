// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod node;
pub mod types;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{Scenario, load_and_validate};
use crate::filter::DependencyFilter;
use crate::node::{ClusterNode, Node};

/// High-level entry point used by `main.rs`.
///
/// Writes results to stdout; see [`run_with_output`].
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Load the scenario, then either write the dependency description
/// (`--describe`) or run the dependency filter and write the surviving node
/// names, one per line.
pub fn run_with_output(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let scenario = load_and_validate(&config_path)?;

    if args.describe {
        writeln!(out, "{}", DependencyFilter::new().describe(&scenario.container))?;
        return Ok(());
    }

    let candidates = evaluate(&scenario)?;
    info!(
        kept = candidates.len(),
        total = scenario.nodes.len(),
        "candidate nodes selected"
    );

    for node in candidates {
        writeln!(out, "{}", node.name())?;
    }
    Ok(())
}

/// Run the dependency filter over a validated scenario.
///
/// Nodes are borrowed from the scenario and returned in file order.
pub fn evaluate(scenario: &Scenario) -> errors::Result<Vec<&ClusterNode>> {
    let nodes: Vec<&ClusterNode> = scenario.nodes.iter().collect();
    DependencyFilter::new().filter(&scenario.container, nodes)
}
