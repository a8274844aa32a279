//! Packing parameters.

use ridge_types::{DEFAULT_PRECISION, MAX_PRECISION};

use crate::{LayoutError, LayoutResult};

/// Parameters for packing parts onto print beds.
#[derive(Debug, Clone, PartialEq)]
pub struct PackParams {
    /// Usable bed depth along the packing axis in mm.
    pub bed_y: f64,

    /// Empty space before the first part of every batch in mm.
    pub margin_y: f64,

    /// Gap between consecutive parts in mm.
    pub spacing_y: f64,

    /// Fixed distance of every part from the side of the bed in mm.
    pub margin_x: f64,

    /// Decimal places kept for placement offsets.
    pub precision: u32,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            bed_y: 200.0,
            margin_y: 5.0,
            spacing_y: 2.0,
            margin_x: 10.0,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PackParams {
    /// Set the bed depth.
    #[must_use]
    pub const fn with_bed_y(mut self, bed_y: f64) -> Self {
        self.bed_y = bed_y;
        self
    }

    /// Set the leading margin.
    #[must_use]
    pub const fn with_margin_y(mut self, margin: f64) -> Self {
        self.margin_y = margin;
        self
    }

    /// Set the gap between parts.
    #[must_use]
    pub const fn with_spacing_y(mut self, spacing: f64) -> Self {
        self.spacing_y = spacing;
        self
    }

    /// Set the side margin.
    #[must_use]
    pub const fn with_margin_x(mut self, margin: f64) -> Self {
        self.margin_x = margin;
        self
    }

    /// Set the offset precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Depth left for a single part on an empty bed.
    #[must_use]
    pub fn part_capacity(&self) -> f64 {
        self.bed_y - self.margin_y - self.spacing_y
    }

    /// Check that every value is usable.
    ///
    /// The spacing must be positive so that offsets strictly increase
    /// within a batch.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParam`] for the first bad value.
    pub fn validate(&self) -> LayoutResult<()> {
        let checks = [
            ("bed_y", self.bed_y, self.bed_y > 0.0),
            ("margin_y", self.margin_y, self.margin_y >= 0.0),
            ("spacing_y", self.spacing_y, self.spacing_y > 0.0),
            ("margin_x", self.margin_x, self.margin_x.is_finite()),
            (
                "precision",
                f64::from(self.precision),
                self.precision <= MAX_PRECISION,
            ),
        ];
        match checks.into_iter().find(|&(_, _, ok)| !ok) {
            Some((name, value, _)) => Err(LayoutError::InvalidParam { name, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PackParams::default();
        assert!((params.bed_y - 200.0).abs() < 1e-9);
        assert!((params.part_capacity() - 193.0).abs() < 1e-9);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let params = PackParams::default().with_spacing_y(0.0);
        assert_eq!(
            params.validate(),
            Err(LayoutError::InvalidParam {
                name: "spacing_y",
                value: 0.0
            })
        );
        assert!(PackParams::default().with_bed_y(-1.0).validate().is_err());
        assert!(PackParams::default().with_margin_y(f64::NAN).validate().is_err());
        assert!(PackParams::default().with_precision(MAX_PRECISION).validate().is_ok());
        assert_eq!(
            PackParams::default().with_precision(309).validate(),
            Err(LayoutError::InvalidParam {
                name: "precision",
                value: 309.0
            })
        );
    }
}
