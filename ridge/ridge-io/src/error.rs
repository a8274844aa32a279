//! Error types for ridgeline file I/O.

use std::path::PathBuf;

use ridge_types::MatrixError;
use thiserror::Error;

/// Result type for file I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading samples or writing output files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A CSV cell is not a number.
    #[error("invalid number '{value}' at line {line}, column {column}")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// One-based column number.
        column: usize,
        /// Cell content.
        value: String,
    },

    /// The parsed rows do not form a rectangular matrix.
    #[error("invalid sample matrix: {0}")]
    Matrix(#[from] MatrixError),

    /// An output path exists but is not a directory.
    #[error("path exists but is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Failed to create or write an output file or directory.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
