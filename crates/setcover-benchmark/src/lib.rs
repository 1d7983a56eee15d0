//! Batch driver for greedy set cover.
//!
//! Runs the solver over every dataset file in a directory and reports how
//! many sets each needs for complete coverage.
//!
//! # Overview
//!
//! - [`BatchRunner`] discovers `set_data_{set_size}_{unique_members}.csv`
//!   files, solves them one after another and writes the results
//! - [`BatchResult`] holds per-dataset figures ordered by grid coordinates
//! - [`CsvExporter`] and [`MarkdownReport`] render a batch
//!
//! # Example
//!
//! ```no_run
//! use setcover_benchmark::BatchRunner;
//! use setcover_config::BatchConfig;
//! use setcover_solver::GreedySetCoverSolver;
//!
//! let config = BatchConfig::default().with_markdown_report("results/report.md");
//! let batch = BatchRunner::new(GreedySetCoverSolver::default(), config).run()?;
//! println!("{} datasets solved", batch.len());
//! # Ok::<(), setcover_benchmark::BatchError>(())
//! ```

mod error;
mod report;
mod result;
mod runner;

pub use error::BatchError;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BatchResult, DatasetResult};
pub use runner::BatchRunner;
