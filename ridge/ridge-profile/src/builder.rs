//! Sample rows to closed outlines.

// Column counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point2;
use ridge_types::{Profile, SampleMatrix, lowest_value, matrix_lowest, round_to};
use tracing::{debug, info};

use crate::params::{Baseline, ProfileParams};
use crate::{ProfileError, ProfileResult};

/// Builds profiles for the rows of one matrix.
///
/// The horizontal scale is fixed from the matrix column count, so every row
/// spans the same target width. With [`Baseline::Global`] the vertical datum
/// is also shared, which keeps spikes comparable between parts.
///
/// # Example
///
/// ```
/// use ridge_types::SampleMatrix;
/// use ridge_profile::{ProfileBuilder, ProfileParams};
///
/// let matrix = SampleMatrix::from_rows(vec![vec![0.0, 1.0, 2.0]]).unwrap();
/// let params = ProfileParams::default()
///     .with_target_width(10.0)
///     .with_xy_relation(1.0)
///     .with_padding_y(0.0);
///
/// let builder = ProfileBuilder::new(&matrix, &params).unwrap();
/// assert!((builder.scale() - 5.0).abs() < 1e-12);
///
/// let profile = builder.build(&[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(profile.height, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    params: ProfileParams,
    columns: usize,
    scale: f64,
    global_floor: f64,
}

impl ProfileBuilder {
    /// Prepare a builder for the rows of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::SingleColumn`] when the matrix has fewer than
    /// two columns, or [`ProfileError::InvalidParam`] for unusable params.
    pub fn new(matrix: &SampleMatrix, params: &ProfileParams) -> ProfileResult<Self> {
        params.validate()?;

        let columns = matrix.column_count();
        if columns < 2 {
            return Err(ProfileError::SingleColumn);
        }

        let steps = (columns - 1) as f64;
        let scale = params.target_width / (steps * params.xy_relation);
        let global_floor = matrix_lowest(matrix);

        debug!(columns, scale, global_floor, "Profile scale computed");

        Ok(Self {
            params: params.clone(),
            columns,
            scale,
            global_floor,
        })
    }

    /// Millimetres per sample unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Minimum shared by all rows in [`Baseline::Global`] mode.
    #[must_use]
    pub fn global_floor(&self) -> f64 {
        self.global_floor
    }

    /// Build the outline for one row.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::DataShape`] if the row length differs from
    /// the matrix column count.
    pub fn build(&self, row: &[f64]) -> ProfileResult<Profile> {
        if row.len() != self.columns {
            return Err(ProfileError::DataShape {
                expected: self.columns,
                got: row.len(),
            });
        }

        let floor = match self.params.baseline {
            Baseline::Global => self.global_floor,
            Baseline::Row => lowest_value(row),
        };
        let offset_y = -floor;
        let precision = self.params.precision;
        let step = self.params.xy_relation * self.scale;

        let points = row
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = round_to(i as f64 * step, precision);
                let lifted = round_to((value + offset_y) * self.scale, precision);
                let y = round_to(lifted + self.params.padding_y, precision);
                Point2::new(x, y)
            })
            .collect();

        Ok(Profile::from_points(points))
    }
}

/// Build one profile per matrix row, in row order.
///
/// Callers that want the first data row printed first must pass
/// [`SampleMatrix::reversed`]; the batch packer consumes profiles in the
/// order returned here.
///
/// # Errors
///
/// See [`ProfileBuilder::new`] and [`ProfileBuilder::build`].
pub fn build_profiles(matrix: &SampleMatrix, params: &ProfileParams) -> ProfileResult<Vec<Profile>> {
    let builder = ProfileBuilder::new(matrix, params)?;

    let profiles = matrix
        .rows()
        .iter()
        .map(|row| builder.build(row))
        .collect::<ProfileResult<Vec<_>>>()?;

    let tallest = profiles.iter().map(|p| p.height).fold(0.0, f64::max);
    info!(
        profiles = profiles.len(),
        scale = format!("{:.4}", builder.scale()),
        baseline = %params.baseline,
        tallest,
        "Profiles built"
    );

    Ok(profiles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_params() -> ProfileParams {
        ProfileParams::default()
            .with_target_width(10.0)
            .with_xy_relation(1.0)
            .with_padding_y(0.0)
    }

    fn scenario_matrix() -> SampleMatrix {
        SampleMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_three_row_scenario() {
        let profiles = build_profiles(&scenario_matrix(), &unit_params()).unwrap();
        assert_eq!(profiles.len(), 3);

        let ys: Vec<Vec<f64>> = profiles
            .iter()
            .map(|p| p.sample_points().iter().map(|pt| pt.y).collect())
            .collect();
        assert_eq!(ys[0], vec![0.0, 5.0, 10.0]);
        assert_eq!(ys[1], vec![10.0, 5.0, 0.0]);
        assert_eq!(ys[2], vec![5.0, 5.0, 5.0]);

        for p in &profiles {
            assert!(p.is_closed());
            assert_eq!(p.width, 10.0);
            let xs: Vec<f64> = p.sample_points().iter().map(|pt| pt.x).collect();
            assert_eq!(xs, vec![0.0, 5.0, 10.0]);
        }
        assert_eq!(profiles[2].height, 5.0);
    }

    #[test]
    fn test_outline_order() {
        let builder = ProfileBuilder::new(&scenario_matrix(), &unit_params()).unwrap();
        let p = builder.build(&[0.0, 1.0, 2.0]).unwrap();
        let expected = [
            (0.0, 0.0),
            (0.0, 0.0),
            (5.0, 5.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ];
        let got: Vec<(f64, f64)> = p.outline.iter().map(|pt| (pt.x, pt.y)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_padding_raises_samples() {
        let params = unit_params().with_padding_y(3.0);
        let builder = ProfileBuilder::new(&scenario_matrix(), &params).unwrap();
        let p = builder.build(&[0.0, 0.0, 0.0]).unwrap();
        assert!(p.sample_points().iter().all(|pt| pt.y == 3.0));
        assert_eq!(p.height, 3.0);
    }

    #[test]
    fn test_global_baseline_lifts_negatives() {
        let matrix =
            SampleMatrix::from_rows(vec![vec![-2.0, 0.0, 2.0], vec![1.0, 1.0, 1.0]]).unwrap();
        let builder = ProfileBuilder::new(&matrix, &unit_params()).unwrap();
        assert_eq!(builder.global_floor(), -2.0);

        let p = builder.build(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(p.height, 15.0);
    }

    #[test]
    fn test_row_baseline() {
        let matrix =
            SampleMatrix::from_rows(vec![vec![-2.0, 0.0, 2.0], vec![-1.0, 1.0, 1.0]]).unwrap();
        let params = unit_params().with_baseline(Baseline::Row);
        let profiles = build_profiles(&matrix, &params).unwrap();
        assert_eq!(profiles[0].height, 20.0);
        assert_eq!(profiles[1].height, 10.0);
        assert!(profiles.iter().all(|p| p.sample_points()[0].y == 0.0));
    }

    #[test]
    fn test_positive_data_keeps_zero_floor() {
        let matrix = SampleMatrix::from_rows(vec![vec![3.0, 4.0, 5.0]]).unwrap();
        let builder = ProfileBuilder::new(&matrix, &unit_params()).unwrap();
        assert_eq!(builder.global_floor(), 0.0);
        let p = builder.build(&[3.0, 4.0, 5.0]).unwrap();
        assert_eq!(p.sample_points()[0].y, 15.0);
    }

    #[test]
    fn test_width_matches_target_with_relation() {
        let row: Vec<f64> = (0..64_i32).map(|i| f64::from(i).sin()).collect();
        let matrix = SampleMatrix::from_rows(vec![row.clone()]).unwrap();
        let params = ProfileParams::default();
        let builder = ProfileBuilder::new(&matrix, &params).unwrap();
        let p = builder.build(&row).unwrap();
        assert_relative_eq!(p.width, 188.0, epsilon = 1e-4);
    }

    #[test]
    fn test_single_column_rejected() {
        let matrix = SampleMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(
            ProfileBuilder::new(&matrix, &unit_params()).unwrap_err(),
            ProfileError::SingleColumn
        );
    }

    #[test]
    fn test_row_length_mismatch() {
        let builder = ProfileBuilder::new(&scenario_matrix(), &unit_params()).unwrap();
        assert_eq!(
            builder.build(&[1.0, 2.0]).unwrap_err(),
            ProfileError::DataShape {
                expected: 3,
                got: 2
            }
        );
    }
}
