//! Closed 2D cross-section outlines.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed outline derived from one sample row.
///
/// The outline starts and ends at the origin and runs along the baseline
/// (`y = 0`) between the last sample and the origin, so it always has a flat
/// bottom edge to extrude from. `width` and `height` are the largest X and Y
/// of the sample-derived points and are taken from the same rounded values
/// written into the outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    /// Outline vertices, first and last at the origin.
    pub outline: Vec<Point2<f64>>,
    /// Largest X across the sample points.
    pub width: f64,
    /// Largest Y across the sample points.
    pub height: f64,
}

impl Profile {
    /// Close a list of sample points into a profile.
    ///
    /// The outline becomes `(0,0) -> points... -> (x_last, 0) -> (0,0)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ridge_types::{Point2, Profile};
    ///
    /// let profile = Profile::from_points(vec![
    ///     Point2::new(0.0, 1.0),
    ///     Point2::new(5.0, 3.0),
    /// ]);
    ///
    /// assert!(profile.is_closed());
    /// assert_eq!(profile.outline.len(), 5);
    /// assert_eq!(profile.width, 5.0);
    /// assert_eq!(profile.height, 3.0);
    /// ```
    #[must_use]
    pub fn from_points(points: Vec<Point2<f64>>) -> Self {
        let width = points.iter().map(|p| p.x).fold(0.0, f64::max);
        let height = points.iter().map(|p| p.y).fold(0.0, f64::max);
        let last_x = points.last().map_or(0.0, |p| p.x);

        let mut outline = Vec::with_capacity(points.len() + 3);
        outline.push(Point2::origin());
        outline.extend(points);
        outline.push(Point2::new(last_x, 0.0));
        outline.push(Point2::origin());

        Self {
            outline,
            width,
            height,
        }
    }

    /// Whether the first and last outline vertices coincide.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.outline.first(), self.outline.last()) {
            (Some(first), Some(last)) => self.outline.len() > 1 && first == last,
            _ => false,
        }
    }

    /// The sample-derived vertices, without the synthetic baseline vertices.
    #[must_use]
    pub fn sample_points(&self) -> &[Point2<f64>] {
        let len = self.outline.len();
        if len < 3 {
            return &[];
        }
        &self.outline[1..len - 2]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_vertices() {
        let p = Profile::from_points(vec![Point2::new(0.0, 2.0), Point2::new(4.0, 1.0)]);
        assert_eq!(p.outline[0], Point2::origin());
        assert_eq!(p.outline[3], Point2::new(4.0, 0.0));
        assert_eq!(p.outline[4], Point2::origin());
        assert!(p.is_closed());
    }

    #[test]
    fn test_sample_points() {
        let points = vec![
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 5.0),
            Point2::new(2.0, 1.0),
        ];
        let p = Profile::from_points(points.clone());
        assert_eq!(p.sample_points(), points.as_slice());
        assert_eq!(p.height, 5.0);
        assert_eq!(p.width, 2.0);
    }

    #[test]
    fn test_open_outline() {
        let p = Profile {
            outline: vec![Point2::origin(), Point2::new(1.0, 1.0)],
            width: 1.0,
            height: 1.0,
        };
        assert!(!p.is_closed());
    }
}
