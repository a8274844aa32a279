//! Error types for profile building and extrusion planning.

use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur while building profiles.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    /// A row does not have the column count the builder was set up for.
    #[error("row has {got} samples, expected {expected}")]
    DataShape {
        /// Column count of the matrix.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A single-column matrix has no horizontal extent to scale against.
    #[error("cannot scale a single-column matrix: at least 2 samples per row are required")]
    SingleColumn,

    /// A parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParam {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Unknown baseline mode name.
    #[error("unknown baseline mode '{0}' (expected 'global' or 'row')")]
    UnknownBaseline(String),
}
