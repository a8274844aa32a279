//! Core data types for the ridgeline fabrication pipeline.
//!
//! A ridgeline job turns a rectangular matrix of numeric samples into one
//! extruded cross-section per row. This crate holds the types every stage
//! shares:
//!
//! - [`SampleMatrix`] - Rectangular, immutable rows of rounded samples
//! - [`Profile`] - Closed 2D outline derived from one row
//! - [`round_to`] - Fixed-precision rounding used at every computation step
//! - [`lowest_value`] / [`highest_value`] - Extremes folded from a zero floor
//!
//! # Example
//!
//! ```
//! use ridge_types::{SampleMatrix, matrix_lowest};
//!
//! let matrix = SampleMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![2.0, -1.0, 0.0],
//! ]).unwrap();
//!
//! assert_eq!(matrix.row_count(), 2);
//! assert_eq!(matrix.column_count(), 3);
//! assert!((matrix_lowest(&matrix) + 1.0).abs() < f64::EPSILON);
//! ```
//!
//! # Coordinate System
//!
//! Profiles live in the XY plane:
//! - X: sample index direction (left to right)
//! - Y: sample value direction, baseline at `y = 0`

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extremes;
mod matrix;
mod profile;
mod round;

pub use error::{MatrixError, MatrixResult};
pub use extremes::{highest_value, lowest_value, matrix_highest, matrix_lowest};
pub use matrix::SampleMatrix;
pub use profile::Profile;
pub use round::{DEFAULT_PRECISION, MAX_PRECISION, round_to};

pub use nalgebra::Point2;
