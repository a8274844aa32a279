//! Placements and sealed batches.

use nalgebra::Vector3;

/// Position of one part within its batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the profile in the packing input.
    pub profile: usize,

    /// Distance from the front edge of the bed to the far side of the part,
    /// including the trailing spacing. Strictly increasing within a batch.
    pub offset_y: f64,

    /// Fixed distance from the side of the bed.
    pub offset_x: f64,

    /// Whether the part is flipped about the X axis for printing.
    pub flipped: bool,
}

impl Placement {
    /// Translation applied after the flip, for a part extruded `extrusion` mm.
    ///
    /// # Example
    ///
    /// ```
    /// use ridge_layout::Placement;
    ///
    /// let placement = Placement { profile: 0, offset_y: 57.0, offset_x: 10.0, flipped: true };
    /// let t = placement.translation(3.2);
    /// assert_eq!((t.x, t.y, t.z), (10.0, -57.0, -3.2));
    /// ```
    #[must_use]
    pub fn translation(&self, extrusion: f64) -> Vector3<f64> {
        Vector3::new(self.offset_x, -self.offset_y, -extrusion)
    }

    /// Rotation in degrees about X, Y and Z applied before the translation.
    #[must_use]
    pub fn rotation(&self) -> [f64; 3] {
        if self.flipped {
            [180.0, 0.0, 0.0]
        } else {
            [0.0, 0.0, 0.0]
        }
    }
}

/// A sealed group of parts that fits on one bed.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Zero-based batch number.
    pub index: usize,

    /// Parts in placement order.
    pub placements: Vec<Placement>,

    /// Depth used on the bed: leading margin plus every part and its spacing.
    pub extent: f64,
}

impl Batch {
    /// Number of parts in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the batch holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Profile indices in placement order.
    pub fn profiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().map(|p| p.profile)
    }
}
