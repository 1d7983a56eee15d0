//! Batch errors.

use std::io;
use std::path::{Path, PathBuf};

use setcover_core::SetCoverError;
use setcover_io::DatasetError;
use thiserror::Error;

/// Error aborting a batch run, tagged with the path that caused it.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dataset error in {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },

    #[error("Solve failed for {}: {source}", path.display())]
    Solve {
        path: PathBuf,
        #[source]
        source: SetCoverError,
    },
}

impl BatchError {
    /// The file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Dataset { path, .. } | Self::Solve { path, .. } => path,
        }
    }
}
