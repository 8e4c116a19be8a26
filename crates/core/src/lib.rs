//! Core library for rdspg
//!
//! This crate implements the **Functional Core** of rdspg, following the
//! Functional Core - Imperative Shell pattern.
//!
//! - **`rdspg_core`** (this crate): pure data shaping with zero I/O
//! - **`rdspg`**: RDS API calls, table printing and template rendering
//!
//! Everything here takes parameter groups, parameters and databases already
//! fetched from RDS and turns them into rows, diffs, mappings or template
//! contexts. Nothing talks to AWS, so every function is tested with plain
//! fixture data.
//!
//! # Module Organization
//!
//! - [`mode`]: instance vs cluster parameter groups and their field names
//! - [`parameters`]: parameter model, user-set filtering, row projection
//! - [`groups`]: parameter group and tag models, group rows
//! - [`diff`]: comparison of two parameter sets
//! - [`mapping`]: which databases use which parameter group
//! - [`terraform`]: context for the Terraform templates
//!
//! # Example Usage
//!
//! ```rust
//! use rdspg_core::diff::calculate_diff;
//! use rdspg_core::parameters::Parameter;
//!
//! let a = vec![Parameter {
//!     name: "max_connections".to_string(),
//!     value: Some("100".to_string()),
//!     ..Default::default()
//! }];
//! let b = vec![Parameter {
//!     name: "max_connections".to_string(),
//!     value: Some("200".to_string()),
//!     ..Default::default()
//! }];
//!
//! let diff = calculate_diff(&a, &b);
//! assert_eq!(diff.len(), 1);
//! assert_eq!(diff[0].name, "max_connections");
//! ```

pub mod diff;
pub mod groups;
pub mod mapping;
pub mod mode;
pub mod parameters;
pub mod terraform;
