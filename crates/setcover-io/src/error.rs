//! Error types for dataset I/O

use thiserror::Error;

/// Error reading, writing or generating a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// An identifier cell is blank
    #[error("Invalid input: empty {column} on line {line}")]
    EmptyIdentifier { line: u64, column: &'static str },

    /// A file name does not follow the dataset naming scheme
    #[error("Invalid dataset file name: {0}")]
    InvalidFileName(String),

    /// Generator parameters that cannot produce a dataset
    #[error("Invalid dataset spec: {0}")]
    InvalidSpec(String),
}

/// Result type alias for dataset I/O
pub type Result<T> = std::result::Result<T, DatasetError>;
