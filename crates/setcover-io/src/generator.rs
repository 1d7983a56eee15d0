//! Synthetic dataset generation.
//!
//! Each dataset holds `total_sets` sets with ids `1..=total_sets`. Every set
//! samples `set_size` distinct members from `1..=unique_members`. A single
//! `ChaCha8Rng` seeded from the configured seed drives the whole grid, so the
//! same configuration always writes the same files.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use setcover_config::GeneratorConfig;
use tracing::{info, warn};

use crate::error::{DatasetError, Result};
use crate::naming::DatasetName;

/// Shape of one synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub set_size: usize,
    pub unique_members: usize,
    pub total_sets: usize,
}

impl DatasetSpec {
    pub fn new(set_size: usize, unique_members: usize, total_sets: usize) -> Self {
        Self {
            set_size,
            unique_members,
            total_sets,
        }
    }

    /// File name this dataset is written under.
    pub fn name(&self) -> DatasetName {
        DatasetName::new(self.set_size, self.unique_members)
    }

    /// Sampling without replacement needs a pool at least as large as a set.
    pub fn validate(&self) -> Result<()> {
        if self.unique_members < self.set_size {
            return Err(DatasetError::InvalidSpec(format!(
                "set_size {} exceeds unique_members {}",
                self.set_size, self.unique_members
            )));
        }
        Ok(())
    }
}

/// One `(set_id, member_id)` row of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    pub set_id: usize,
    pub member_id: usize,
}

/// Samples the membership rows of one dataset.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use setcover_io::{generate_rows, DatasetSpec};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let rows = generate_rows(&DatasetSpec::new(3, 10, 4), &mut rng).unwrap();
///
/// assert_eq!(rows.len(), 12);
/// assert!(rows.iter().all(|row| (1..=10).contains(&row.member_id)));
/// ```
pub fn generate_rows<R: Rng + ?Sized>(
    spec: &DatasetSpec,
    rng: &mut R,
) -> Result<Vec<MembershipRow>> {
    spec.validate()?;
    let mut rows = Vec::with_capacity(spec.total_sets * spec.set_size);
    for set_id in 1..=spec.total_sets {
        for index in sample(&mut *rng, spec.unique_members, spec.set_size) {
            rows.push(MembershipRow {
                set_id,
                member_id: index + 1,
            });
        }
    }
    Ok(rows)
}

/// Writes membership rows as CSV with header `set_id,member_id`.
pub fn write_rows(path: impl AsRef<Path>, rows: &[MembershipRow]) -> Result<()> {
    let mut csv = csv::Writer::from_path(path)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes every valid `(set_size, unique_members)` combination of the grid
/// under `output_dir` and returns the written paths in generation order.
pub fn generate_datasets(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let output_dir = Path::new(&config.output_dir);
    fs::create_dir_all(output_dir)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.random_seed);
    let mut written = Vec::new();

    for &set_size in &config.set_sizes {
        for &unique_members in &config.unique_members {
            let spec = DatasetSpec::new(set_size, unique_members, config.total_sets);
            let rows = match generate_rows(&spec, &mut rng) {
                Ok(rows) => rows,
                Err(err) => {
                    warn!(
                        event = "dataset_skipped",
                        set_size = set_size as u64,
                        unique_members = unique_members as u64,
                        reason = %err,
                    );
                    continue;
                }
            };

            let path = output_dir.join(spec.name().file_name());
            write_rows(&path, &rows)?;
            info!(
                event = "dataset_generated",
                path = %path.display(),
                set_size = set_size as u64,
                unique_members = unique_members as u64,
                rows = rows.len() as u64,
            );
            written.push(path);
        }
    }

    Ok(written)
}
