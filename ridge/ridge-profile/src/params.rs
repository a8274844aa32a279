//! Profile and extrusion parameters.

use std::fmt;
use std::str::FromStr;

use ridge_types::{DEFAULT_PRECISION, MAX_PRECISION};

use crate::ProfileError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which minimum lifts samples onto the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Baseline {
    /// Lowest value across the whole matrix; rows share one vertical datum.
    #[default]
    Global,
    /// Lowest value of each row on its own.
    Row,
}

impl Baseline {
    /// Lowercase name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Row => "row",
        }
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Baseline {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "row" => Ok(Self::Row),
            other => Err(ProfileError::UnknownBaseline(other.to_string())),
        }
    }
}

/// Parameters for turning sample rows into outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileParams {
    /// Overall width of every profile in mm.
    pub target_width: f64,

    /// Relation between one horizontal sample step and the vertical axis.
    /// Lower values give taller spikes.
    pub xy_relation: f64,

    /// Extra material below the lowest sample in mm.
    pub padding_y: f64,

    /// Decimal places kept for every coordinate.
    pub precision: u32,

    /// Minimum used to lift samples onto the baseline.
    pub baseline: Baseline,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            target_width: 188.0,
            xy_relation: 1.197,
            padding_y: 3.0,
            precision: DEFAULT_PRECISION,
            baseline: Baseline::Global,
        }
    }
}

impl ProfileParams {
    /// Set the target width.
    #[must_use]
    pub const fn with_target_width(mut self, width: f64) -> Self {
        self.target_width = width;
        self
    }

    /// Set the horizontal to vertical relation.
    #[must_use]
    pub const fn with_xy_relation(mut self, relation: f64) -> Self {
        self.xy_relation = relation;
        self
    }

    /// Set the vertical padding.
    #[must_use]
    pub const fn with_padding_y(mut self, padding: f64) -> Self {
        self.padding_y = padding;
        self
    }

    /// Set the baseline mode.
    #[must_use]
    pub const fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the coordinate precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidParam`] for a non-positive width or
    /// relation, a negative padding, or more than [`MAX_PRECISION`] decimals.
    pub fn validate(&self) -> Result<(), ProfileError> {
        ensure_positive("target_width", self.target_width)?;
        ensure_positive("xy_relation", self.xy_relation)?;
        if self.padding_y.is_nan() || self.padding_y < 0.0 {
            return Err(ProfileError::InvalidParam {
                name: "padding_y",
                value: self.padding_y,
            });
        }
        ensure_precision(self.precision)
    }
}

/// Reject precisions an `f64` cannot represent.
fn ensure_precision(precision: u32) -> Result<(), ProfileError> {
    if precision > MAX_PRECISION {
        return Err(ProfileError::InvalidParam {
            name: "precision",
            value: f64::from(precision),
        });
    }
    Ok(())
}

/// Reject zero, negative and NaN values.
fn ensure_positive(name: &'static str, value: f64) -> Result<(), ProfileError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ProfileError::InvalidParam { name, value });
    }
    Ok(())
}

/// Parameters for planning the extrusion height.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrusionParams {
    /// Overall stacked height of all parts in mm.
    pub target_height: f64,

    /// Print layer height in mm; the extrusion is a multiple of it.
    pub layer_height: f64,

    /// Decimal places kept for the result.
    pub precision: u32,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            target_height: 256.0,
            layer_height: 0.2,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ExtrusionParams {
    /// Set the overall target height.
    #[must_use]
    pub const fn with_target_height(mut self, height: f64) -> Self {
        self.target_height = height;
        self
    }

    /// Set the layer height.
    #[must_use]
    pub const fn with_layer_height(mut self, height: f64) -> Self {
        self.layer_height = height;
        self
    }

    /// Set the result precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidParam`] for a non-positive height or
    /// more than [`MAX_PRECISION`] decimals.
    pub fn validate(&self) -> Result<(), ProfileError> {
        ensure_positive("target_height", self.target_height)?;
        ensure_positive("layer_height", self.layer_height)?;
        ensure_precision(self.precision)
    }
}
