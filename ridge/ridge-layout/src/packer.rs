//! Greedy single-pass batch packer.

use ridge_types::{Profile, round_to};
use tracing::{debug, info};

use crate::batch::{Batch, Placement};
use crate::params::PackParams;
use crate::{LayoutError, LayoutResult};

/// Packing state carried from one part to the next.
#[derive(Debug, Default)]
struct PackState {
    cursor: f64,
    current: Vec<Placement>,
    sealed: Vec<Batch>,
}

impl PackState {
    fn start(params: &PackParams) -> Self {
        Self {
            cursor: params.margin_y,
            ..Self::default()
        }
    }

    /// Close the open batch and start an empty one.
    fn seal(mut self, params: &PackParams) -> Self {
        let batch = Batch {
            index: self.sealed.len(),
            placements: std::mem::take(&mut self.current),
            extent: round_to(self.cursor, params.precision),
        };
        debug!(
            batch = batch.index,
            parts = batch.len(),
            extent = batch.extent,
            "Batch sealed"
        );
        self.sealed.push(batch);
        self.cursor = params.margin_y;
        self
    }

    /// Place one part, sealing the open batch first if it would overflow.
    fn place(self, index: usize, height: f64, params: &PackParams) -> LayoutResult<Self> {
        if height.is_nan() || height < 0.0 {
            return Err(LayoutError::InvalidHeight { index, height });
        }
        if height > params.part_capacity() {
            return Err(LayoutError::PartTooLarge {
                index,
                height,
                capacity: params.part_capacity(),
            });
        }

        let overflows = self.cursor + params.spacing_y + height > params.bed_y;
        let mut state = if overflows && !self.current.is_empty() {
            self.seal(params)
        } else {
            self
        };

        state.cursor += height + params.spacing_y;
        state.current.push(Placement {
            profile: index,
            offset_y: round_to(state.cursor, params.precision),
            offset_x: params.margin_x,
            flipped: true,
        });
        Ok(state)
    }
}

/// Pack part heights into batches, in input order.
///
/// Each part advances the batch cursor by its height plus the spacing; its
/// placement offset is the cursor after the advance. A batch is sealed when
/// the next part would push the cursor past `bed_y`, and the last open batch
/// is sealed at the end of input. Empty input yields no batches.
///
/// # Errors
///
/// Returns [`LayoutError::PartTooLarge`] if any part cannot fit on an empty
/// bed, [`LayoutError::InvalidHeight`] for a negative or NaN height, and
/// [`LayoutError::InvalidParam`] for unusable parameters. No batches are
/// returned on error.
pub fn pack_heights(heights: &[f64], params: &PackParams) -> LayoutResult<Vec<Batch>> {
    params.validate()?;

    let state = heights
        .iter()
        .enumerate()
        .try_fold(PackState::start(params), |state, (index, &height)| {
            state.place(index, height, params)
        })?;

    let batches = if state.current.is_empty() {
        state.sealed
    } else {
        state.seal(params).sealed
    };

    info!(
        parts = heights.len(),
        batches = batches.len(),
        bed_y = params.bed_y,
        "Parts packed"
    );

    Ok(batches)
}

/// Pack profiles into batches by their heights.
///
/// Placement `profile` fields index into `profiles`.
///
/// # Errors
///
/// See [`pack_heights`].
pub fn pack_batches(profiles: &[Profile], params: &PackParams) -> LayoutResult<Vec<Batch>> {
    let heights: Vec<f64> = profiles.iter().map(|p| p.height).collect();
    pack_heights(&heights, params)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ridge_types::Point2;

    fn scenario_params() -> PackParams {
        PackParams::default()
            .with_bed_y(120.0)
            .with_margin_y(5.0)
            .with_spacing_y(2.0)
    }

    #[test]
    fn test_seals_on_overflow() {
        let batches = pack_heights(&[50.0; 5], &scenario_params()).unwrap();
        let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let groups: Vec<Vec<usize>> = batches.iter().map(|b| b.profiles().collect()).collect();
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3], vec![4]]);

        let offsets: Vec<f64> = batches[0].placements.iter().map(|p| p.offset_y).collect();
        assert_eq!(offsets, vec![57.0, 109.0]);
        assert_eq!(batches[0].extent, 109.0);
        assert_eq!(batches[2].extent, 57.0);
        assert_eq!(batches[2].index, 2);
    }

    #[test]
    fn test_exact_fit_stays_in_batch() {
        // 5 + 2 + 53 = 60, 60 + 2 + 58 = 120
        let batches = pack_heights(&[53.0, 58.0], &scenario_params()).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].extent, 120.0);
    }

    #[test]
    fn test_part_too_large() {
        let err = pack_heights(&[10.0, 116.0, 10.0], &scenario_params()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::PartTooLarge {
                index: 1,
                height: 116.0,
                capacity: 113.0
            }
        );
    }

    #[test]
    fn test_largest_fitting_part() {
        let batches = pack_heights(&[113.0, 113.0], &scenario_params()).unwrap();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.extent == 120.0));
    }

    #[test]
    fn test_invalid_height() {
        assert!(matches!(
            pack_heights(&[10.0, -1.0], &scenario_params()),
            Err(LayoutError::InvalidHeight { index: 1, .. })
        ));
        assert!(pack_heights(&[f64::NAN], &scenario_params()).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(pack_heights(&[], &scenario_params()).unwrap().is_empty());
    }

    #[test]
    fn test_placement_fields() {
        let params = scenario_params().with_margin_x(12.5);
        let batches = pack_heights(&[10.25], &params).unwrap();
        let placement = batches[0].placements[0];
        assert_eq!(placement.offset_x, 12.5);
        assert!(placement.flipped);
        assert_relative_eq!(placement.offset_y, 17.25);
    }

    #[test]
    fn test_deterministic() {
        let heights = [12.5, 40.0, 33.3, 71.0, 8.0, 99.9, 1.0];
        let a = pack_heights(&heights, &PackParams::default()).unwrap();
        let b = pack_heights(&heights, &PackParams::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pack_profiles() {
        let profiles: Vec<Profile> = [30.0, 80.0, 95.0]
            .iter()
            .map(|&h| Profile::from_points(vec![Point2::new(0.0, h), Point2::new(10.0, 1.0)]))
            .collect();
        let batches = pack_batches(&profiles, &PackParams::default()).unwrap();
        // 5 + 32 + 82 = 119, then 119 + 97 = 216 > 200
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].placements[0].profile, 2);
    }
}
