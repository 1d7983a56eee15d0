//! Shared test fixtures for set cover crates.
//!
//! This crate provides set families and pure helper functions for testing.
//! It does NOT depend on `setcover-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`families`] - Hand-built and seeded random set families
//! - [`optimal`] - Brute-force optimum and the harmonic approximation bound
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! setcover-test = { workspace = true }
//! ```

pub mod families;
pub mod optimal;

pub use families::{disjoint_family, example_family, random_family, single_set_family};
pub use optimal::{greedy_bound, harmonic, optimal_cover_size};
