//! Batch runner.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use setcover_config::BatchConfig;
use setcover_io::{load_family, write_cover, DatasetName};
use setcover_solver::GreedySetCoverSolver;
use tracing::{info, warn};

use crate::error::BatchError;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{BatchResult, DatasetResult};

/// Solves every dataset in a directory, one after another, and writes the
/// collected results.
///
/// # Example
///
/// ```
/// use setcover_benchmark::BatchRunner;
/// use setcover_config::BatchConfig;
/// use setcover_solver::GreedySetCoverSolver;
///
/// let runner = BatchRunner::new(
///     GreedySetCoverSolver::default(),
///     BatchConfig::default().with_dataset_dir("data"),
/// );
/// assert_eq!(runner.config().dataset_dir, "data");
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    solver: GreedySetCoverSolver,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(solver: GreedySetCoverSolver, config: BatchConfig) -> Self {
        Self { solver, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn solver(&self) -> &GreedySetCoverSolver {
        &self.solver
    }

    /// Runs the batch and writes the results file, plus the Markdown report
    /// and per-dataset covers when configured.
    ///
    /// Fails on the first dataset that cannot be read or solved.
    pub fn run(&self) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        let results_dir = PathBuf::from(&self.config.results_dir);
        fs::create_dir_all(&results_dir).map_err(|source| BatchError::Io {
            path: results_dir.clone(),
            source,
        })?;

        let (datasets, skipped) = self.discover()?;
        info!(
            event = "batch_start",
            dataset_dir = %self.config.dataset_dir,
            dataset_count = datasets.len() as u64,
            skipped = skipped.len() as u64,
        );

        let mut batch = BatchResult::new();
        batch.skipped = skipped;
        for (path, name) in &datasets {
            batch.add(self.solve_dataset(path, *name)?);
        }
        batch.sort();

        let results_file = results_dir.join(&self.config.results_file);
        CsvExporter::to_file(&batch, &results_file).map_err(|source| BatchError::Io {
            path: results_file.clone(),
            source,
        })?;

        if let Some(report) = &self.config.markdown_report {
            let report = PathBuf::from(report);
            MarkdownReport::to_file(&batch, &report)
                .map_err(|source| BatchError::Io { path: report, source })?;
        }

        info!(
            event = "batch_end",
            dataset_count = batch.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
            results_file = %results_file.display(),
        );

        Ok(batch)
    }

    /// Lists `*.csv` files in the dataset directory, sorted by name.
    ///
    /// Returns the files whose names parse as a [`DatasetName`], and the
    /// names of the files skipped because they do not.
    pub fn discover(&self) -> Result<(Vec<(PathBuf, DatasetName)>, Vec<String>), BatchError> {
        let dir = Path::new(&self.config.dataset_dir);
        let io_error = |source| BatchError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut datasets = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();
        for path in paths {
            let file_name = file_name(&path);
            match file_name.parse::<DatasetName>() {
                Ok(name) => datasets.push((path, name)),
                Err(err) => {
                    warn!(event = "dataset_skipped", file = %file_name, reason = %err);
                    skipped.push(file_name);
                }
            }
        }

        Ok((datasets, skipped))
    }

    /// Loads and solves one dataset, writing its cover when configured.
    pub fn solve_dataset(
        &self,
        path: &Path,
        name: DatasetName,
    ) -> Result<DatasetResult, BatchError> {
        let family = load_family(path).map_err(|source| BatchError::Dataset {
            path: path.to_path_buf(),
            source,
        })?;
        let outcome = self
            .solver
            .solve_with_stats(&family)
            .map_err(|source| BatchError::Solve {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = file_name(path);
        if self.config.write_covers {
            let cover_path = Path::new(&self.config.results_dir).join(format!("cover_{file_name}"));
            write_cover(&cover_path, &outcome.cover).map_err(|source| BatchError::Dataset {
                path: cover_path.clone(),
                source,
            })?;
        }

        let result = DatasetResult::from_stats(file_name, name, &outcome.stats, outcome.cover.len());
        info!(
            event = "dataset_solved",
            file = %result.file_name,
            set_count = result.set_count as u64,
            universe_size = result.universe_size as u64,
            required_sets = result.required_sets as u64,
            duration_ms = result.solve_time_ms() as u64,
        );
        Ok(result)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
