//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the CLI user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Unsupported flag value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read the sample table.
    #[error("Table error: {0}")]
    Table(#[from] adapter_table::TableError),

    /// Failed to write output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialise the report.
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),
}
