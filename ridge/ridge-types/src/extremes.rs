//! Extreme values over flat sample sequences and whole matrices.
//!
//! Both folds start from zero: the lowest value is never above the baseline
//! and the highest value is never below it.

use crate::SampleMatrix;

/// Lowest value of a flat sequence, folded from `0.0`.
///
/// # Example
///
/// ```
/// use ridge_types::lowest_value;
///
/// assert_eq!(lowest_value(&[3.0, -2.5, 1.0]), -2.5);
/// assert_eq!(lowest_value(&[3.0, 2.5]), 0.0);
/// ```
#[must_use]
pub fn lowest_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::min)
}

/// Highest value of a flat sequence, folded from `0.0`.
#[must_use]
pub fn highest_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Lowest value across every row of a matrix.
#[must_use]
pub fn matrix_lowest(matrix: &SampleMatrix) -> f64 {
    let per_row: Vec<f64> = matrix.rows().iter().map(|row| lowest_value(row)).collect();
    lowest_value(&per_row)
}

/// Highest value across every row of a matrix.
#[must_use]
pub fn matrix_highest(matrix: &SampleMatrix) -> f64 {
    let per_row: Vec<f64> = matrix.rows().iter().map(|row| highest_value(row)).collect();
    highest_value(&per_row)
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_extremes() {
        let values = [1.5, -0.25, 7.0, 3.0];
        assert_eq!(lowest_value(&values), -0.25);
        assert_eq!(highest_value(&values), 7.0);
    }

    #[test]
    fn test_zero_floor() {
        assert_eq!(lowest_value(&[4.0, 5.0]), 0.0);
        assert_eq!(highest_value(&[-4.0, -5.0]), 0.0);
        assert_eq!(lowest_value(&[]), 0.0);
    }

    #[test]
    fn test_matrix_extremes() {
        let matrix =
            SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![-3.0, 9.5], vec![0.5, 0.0]])
                .unwrap();
        assert_eq!(matrix_lowest(&matrix), -3.0);
        assert_eq!(matrix_highest(&matrix), 9.5);
    }
}
