//! Set Cover IO - Datasets on disk
//!
//! This crate moves set families and covers between CSV files and memory:
//! - [`load_family`] / [`read_family`] parse `(set_id, member_id)` rows
//! - [`write_cover`] / [`write_cover_to`] emit a cover as `rank,set_id`
//! - [`DatasetName`] encodes dataset parameters in file names
//! - [`generate_datasets`] writes seeded synthetic datasets

pub mod error;
pub mod generator;
pub mod loader;
pub mod naming;
pub mod sink;

pub use error::{DatasetError, Result};
pub use generator::{generate_datasets, generate_rows, write_rows, DatasetSpec, MembershipRow};
pub use loader::{load_family, read_family, MEMBER_ID_COLUMN, SET_ID_COLUMN};
pub use naming::DatasetName;
pub use sink::{write_cover, write_cover_to};
