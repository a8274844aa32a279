//! Error types for sample matrix construction.

use thiserror::Error;

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors that can occur while building a [`SampleMatrix`](crate::SampleMatrix).
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    /// The matrix has no rows, or its rows have no samples.
    #[error("sample matrix is empty")]
    Empty,

    /// A row does not have the same length as the first row.
    #[error("row {row} has {got} samples, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::RaggedRow {
            row: 3,
            expected: 5,
            got: 4,
        };
        assert_eq!(format!("{err}"), "row 3 has 4 samples, expected 5");
        assert_eq!(format!("{}", MatrixError::Empty), "sample matrix is empty");
    }
}
