//! Error types for the aggregation pipeline.

use thiserror::Error;

/// Result type alias for fatal pipeline operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Fatal errors that terminate the run before any report is produced.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to read the input stream or write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file missing or unreadable
    #[error("File not found at '{path}'")]
    FileNotFound {
        path: String,
        source: std::io::Error,
    },

    /// Missing input file argument
    #[error("Missing file argument. Usage: currency-aggregator <filename>")]
    MissingArgument,
}

/// Line-level rejection reasons.
///
/// A rejected line is logged and skipped; it never terminates the run or
/// affects the exit code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line did not tokenize into exactly two fields
    #[error("malformed line length: expected 2 fields, got {0}")]
    FieldCount(usize),

    /// Amount field is not a valid decimal numeral
    #[error("malformed amount '{0}'")]
    InvalidAmount(String),
}
