//! Error types for table reading.

use fill_core::types::SeriesError;
use thiserror::Error;

/// Errors from reading a delimiter-separated sample table.
#[derive(Error, Debug)]
pub enum TableError {
    /// Underlying CSV or I/O failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing the value column.
    #[error("Missing value column on line {line}")]
    MissingColumn {
        /// 1-based line number of the offending row
        line: u64,
    },

    /// The position field is not an integer.
    #[error("Invalid position '{field}' on line {line}")]
    InvalidPosition {
        /// 1-based line number of the offending row
        line: u64,
        /// The offending field contents
        field: String,
    },

    /// The parsed rows do not form a valid series.
    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}
