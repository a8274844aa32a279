//! Rectangular sample matrix.

use crate::{MatrixError, MatrixResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular matrix of numeric samples, one row per profile.
///
/// The matrix is validated on construction and immutable afterwards. Every
/// row has exactly [`column_count`](Self::column_count) samples; ragged input
/// is rejected rather than padded.
///
/// # Example
///
/// ```
/// use ridge_types::{MatrixError, SampleMatrix};
///
/// let ragged = SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
/// assert_eq!(
///     ragged.unwrap_err(),
///     MatrixError::RaggedRow { row: 1, expected: 2, got: 1 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl SampleMatrix {
    /// Build a matrix from rows, checking that it is rectangular.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if there are no rows or the first row
    /// is empty, and [`MatrixError::RaggedRow`] for the first row whose
    /// length differs from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(MatrixError::Empty);
        }

        if let Some((row, got)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != columns)
        {
            return Err(MatrixError::RaggedRow {
                row,
                expected: columns,
                got,
            });
        }

        Ok(Self { rows, columns })
    }

    /// Number of rows (profiles).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of samples in every row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// All rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// A single row, if it exists.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A copy of the matrix with the row order reversed.
    ///
    /// The pipeline builds profiles from the reversed matrix so that the
    /// last data row becomes profile `00`, the first part placed on the
    /// first batch.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            rows: self.rows.iter().rev().cloned().collect(),
            columns: self.columns,
        }
    }
}
