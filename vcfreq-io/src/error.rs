use std::io;
use thiserror::Error;

/// Error type for vcfreq-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A record's lookup key has no entry in the frequency map.
    #[error("No allele frequency was resolved for {0}")]
    MissingFrequency(String),

    /// A row doesn't have one value per column.
    #[error("Row {row} has {found} values but the report has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for vcfreq-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
