// src/config/mod.rs

//! Scenario loading and validation.
//!
//! A scenario pairs the container being scheduled with the candidate nodes
//! it may land on. Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a scenario file from disk (`loader.rs`).
//! - Validate node and container entries (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, parse_str};
pub use model::{ContainerSpec, NodeSpec, RawScenario, Scenario};
