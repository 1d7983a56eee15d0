//! Configuration system for set cover.
//!
//! Load solver, dataset generator and batch settings from TOML or YAML files
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use setcover_config::{SetCoverConfig, TieBreak};
//!
//! let config = SetCoverConfig::from_toml_str(r#"
//!     [solver]
//!     tie_break = "insertion_order"
//!     prune_exhausted = false
//!
//!     [generator]
//!     set_sizes = [5, 10]
//!     unique_members = [100]
//!     total_sets = 50
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.solver.tie_break, TieBreak::InsertionOrder);
//! assert!(!config.solver.prune_exhausted);
//! assert_eq!(config.generator.total_sets, 50);
//! assert_eq!(config.batch.results_dir, "results");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use setcover_config::SetCoverConfig;
//!
//! let config = SetCoverConfig::load("setcover.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SetCoverConfig {
    /// Greedy solver settings.
    pub solver: SolverConfig,

    /// Synthetic dataset generation settings.
    pub generator: GeneratorConfig,

    /// Batch driver settings.
    pub batch: BatchConfig,
}

impl SetCoverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Replaces the generator settings.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Replaces the batch settings.
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }
}

/// Environment mode affecting solver checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Deterministic solving without extra checks.
    #[default]
    Reproducible,

    /// Verifies every returned cover against its input family.
    FullAssert,
}

/// Secondary ordering between sets that cover equally many new elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Smaller set identifier wins.
    #[default]
    Identifier,

    /// Set inserted earlier into the family wins.
    InsertionOrder,
}

/// Greedy solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode.
    pub environment_mode: EnvironmentMode,

    /// Tie-break between equally useful sets.
    pub tie_break: TieBreak,

    /// Drop sets from the queue once they contribute nothing.
    pub prune_exhausted: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::Reproducible,
            tie_break: TieBreak::Identifier,
            prune_exhausted: true,
        }
    }
}

impl SolverConfig {
    /// Creates a new default solver configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the tie-break.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Enables or disables pruning of exhausted sets.
    pub fn with_prune_exhausted(mut self, prune: bool) -> Self {
        self.prune_exhausted = prune;
        self
    }
}

/// Synthetic dataset generator configuration.
///
/// One dataset is generated per `(set_size, unique_members)` combination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Members sampled into each set.
    pub set_sizes: Vec<usize>,

    /// Size of the member pool sampled from.
    pub unique_members: Vec<usize>,

    /// Sets per dataset.
    pub total_sets: usize,

    /// Random seed for reproducible datasets.
    pub random_seed: u64,

    /// Directory datasets are written to.
    pub output_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            set_sizes: vec![1, 2, 5, 10, 20, 50, 100],
            unique_members: vec![10, 20, 50, 100, 200, 500, 1000],
            total_sets: 1000,
            random_seed: 1,
            output_dir: "datasets".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the number of sets per dataset.
    pub fn with_total_sets(mut self, total_sets: usize) -> Self {
        self.total_sets = total_sets;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the parameter grid.
    pub fn with_grid(mut self, set_sizes: Vec<usize>, unique_members: Vec<usize>) -> Self {
        self.set_sizes = set_sizes;
        self.unique_members = unique_members;
        self
    }

    /// Rejects empty datasets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_sets == 0 {
            return Err(ConfigError::Invalid(
                "generator.total_sets must be at least 1".to_string(),
            ));
        }
        if self.set_sizes.contains(&0) {
            return Err(ConfigError::Invalid(
                "generator.set_sizes must not contain 0".to_string(),
            ));
        }
        if self.unique_members.contains(&0) {
            return Err(ConfigError::Invalid(
                "generator.unique_members must not contain 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Batch driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BatchConfig {
    /// Directory scanned for `set_data_*.csv` datasets.
    pub dataset_dir: String,

    /// Directory results are written to; created if missing.
    pub results_dir: String,

    /// Aggregated results file name inside `results_dir`.
    pub results_file: String,

    /// Optional Markdown report path.
    pub markdown_report: Option<String>,

    /// Also write each dataset's cover to `results_dir`.
    pub write_covers: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dataset_dir: "datasets".to_string(),
            results_dir: "results".to_string(),
            results_file: "min_sets_by_size_cardinality.csv".to_string(),
            markdown_report: None,
            write_covers: false,
        }
    }
}

impl BatchConfig {
    /// Sets the dataset directory.
    pub fn with_dataset_dir(mut self, dir: impl Into<String>) -> Self {
        self.dataset_dir = dir.into();
        self
    }

    /// Sets the results directory.
    pub fn with_results_dir(mut self, dir: impl Into<String>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Sets the Markdown report path.
    pub fn with_markdown_report(mut self, path: impl Into<String>) -> Self {
        self.markdown_report = Some(path.into());
        self
    }

    /// Enables writing per-dataset covers.
    pub fn with_write_covers(mut self, write: bool) -> Self {
        self.write_covers = write;
        self
    }
}

#[cfg(test)]
mod tests;
