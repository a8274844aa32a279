//! Extrusion height planning.

// Row and layer counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use ridge_types::round_to;
use tracing::{info, warn};

use crate::params::ExtrusionParams;
use crate::{ProfileError, ProfileResult};

/// Absorbs quotients such as `0.6 / 0.2 = 2.9999999999999996`.
const LAYER_TOLERANCE: f64 = 1e-9;

/// Extrusion thickness shared by every profile of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionSpec {
    /// Thickness of each part in mm, a whole number of layers.
    pub height: f64,

    /// Layer height the thickness was quantized to.
    pub layer_height: f64,
}

impl ExtrusionSpec {
    /// Number of print layers in one part.
    #[must_use]
    pub fn layers(&self) -> f64 {
        (self.height / self.layer_height).round()
    }

    /// A zero thickness means the target height cannot fit one layer per row.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.height <= 0.0
    }
}

/// Quantize the per-row share of the target height down to whole layers.
///
/// The result is `floor(target_height / row_count / layer_height) *
/// layer_height`, rounded to the configured precision. It is zero, not an
/// error, when `row_count * layer_height` exceeds the target height.
///
/// The stacked height `height * row_count` never exceeds the target; a layer
/// count that would overshoot after rounding is stepped down.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidParam`] for a zero row count, a
/// non-positive target height or layer height, or an unusable precision.
///
/// # Example
///
/// ```
/// use ridge_profile::{ExtrusionParams, plan_extrusion};
///
/// let params = ExtrusionParams::default()
///     .with_target_height(256.0)
///     .with_layer_height(0.2);
/// let spec = plan_extrusion(80, &params).unwrap();
/// assert_eq!(spec.height, 3.2);
/// ```
pub fn plan_extrusion(row_count: usize, params: &ExtrusionParams) -> ProfileResult<ExtrusionSpec> {
    params.validate()?;
    if row_count == 0 {
        return Err(ProfileError::InvalidParam {
            name: "row_count",
            value: 0.0,
        });
    }

    let rows = row_count as f64;
    let share = params.target_height / rows;
    let mut layers = (share / params.layer_height + LAYER_TOLERANCE).floor();
    let mut height = round_to(layers * params.layer_height, params.precision);
    while layers > 0.0 && height * rows > params.target_height {
        layers -= 1.0;
        height = round_to(layers * params.layer_height, params.precision);
    }

    let spec = ExtrusionSpec {
        height,
        layer_height: params.layer_height,
    };

    if spec.is_degenerate() {
        warn!(
            row_count,
            target_height = params.target_height,
            layer_height = params.layer_height,
            "Target height is too small for one layer per part"
        );
    } else {
        info!(height, layers, row_count, "Extrusion height planned");
    }

    Ok(spec)
}
