// src/filter/mod.rs

//! Node filters.
//!
//! - [`dependencies`] extracts the direct dependencies a container declares.
//! - [`dependency`] holds [`DependencyFilter`], which keeps only nodes that
//!   already run all of them.

pub mod dependencies;
pub mod dependency;

pub use dependencies::Dependencies;
pub use dependency::DependencyFilter;
