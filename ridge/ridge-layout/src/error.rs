//! Error types for batch layout.

use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while packing batches.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A single part does not fit on an empty bed.
    #[error(
        "part {index} is {height}mm tall but a bed holds at most {capacity}mm after margin and spacing"
    )]
    PartTooLarge {
        /// Position of the part in the packing order.
        index: usize,
        /// Height of the part.
        height: f64,
        /// Usable depth of an empty bed (`bed_y - margin_y - spacing_y`).
        capacity: f64,
    },

    /// A part height is negative or not a number.
    #[error("part {index} has invalid height {height}")]
    InvalidHeight {
        /// Position of the part in the packing order.
        index: usize,
        /// Rejected height.
        height: f64,
    },

    /// A packing parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParam {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}
