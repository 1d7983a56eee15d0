//! Set Cover Core - Core types for greedy set cover
//!
//! This crate provides the data model shared by the solver and its
//! collaborators:
//! - [`SetFamily`] for the named input sets and their universe
//! - [`Cover`] for the ordered selection a solver returns
//! - [`SetCoverError`] for input contract violations

pub mod cover;
pub mod error;
pub mod family;


pub use cover::Cover;
pub use error::{Result, SetCoverError};
pub use family::{Element, SetFamily, SetId};
