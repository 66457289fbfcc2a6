//! The axis-aligned visualization region.

use glam::{DVec2, DVec3};
use lineq_numbers::Rational;

/// Default half-extent of the visualization cube.
pub const DEFAULT_RANGE: f64 = 5.0;

/// Default slack used when testing points against the region boundary.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Symmetric bounding square/cube `[-range, range]^n`.
///
/// This is the only shared configuration the clippers read. It is passed
/// explicitly to every computation and never mutated by them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRegion {
    /// Half-extent of the region along every axis.
    pub range: f64,
    /// Slack applied to every boundary test.
    pub tolerance: f64,
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BoundingRegion {
    /// Creates a region with the default tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not a positive finite number.
    #[must_use]
    pub fn new(range: f64) -> Self {
        assert!(range.is_finite() && range > 0.0, "range must be positive, got {range}");
        Self {
            range,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Replaces the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Edge length of the region.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.range * 2.0
    }

    /// Factor mapping system coordinates into the unit cube.
    #[must_use]
    pub fn scale(&self) -> f64 {
        1.0 / self.range
    }

    /// Maps a point from system coordinates into `[-1, 1]^3`.
    #[must_use]
    pub fn to_unit(&self, point: DVec3) -> DVec3 {
        point * self.scale()
    }

    /// Strict containment test.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        within(point, self.range)
    }

    /// Containment test with [`tolerance`](Self::tolerance) slack.
    #[must_use]
    pub fn contains_with_tolerance(&self, point: DVec3) -> bool {
        within(point, self.range + self.tolerance)
    }

    /// Containment test with slack for a point in the z = 0 plane.
    #[must_use]
    pub fn contains_2d_with_tolerance(&self, point: DVec2) -> bool {
        self.contains_with_tolerance(point.extend(0.0))
    }

    /// Returns true if two points lie within [`tolerance`](Self::tolerance)
    /// of each other and so count as one boundary crossing.
    #[must_use]
    pub fn coincident(&self, a: DVec3, b: DVec3) -> bool {
        a.distance(b) <= self.tolerance
    }

    /// [`coincident`](Self::coincident) for points in the z = 0 plane.
    #[must_use]
    pub fn coincident_2d(&self, a: DVec2, b: DVec2) -> bool {
        a.distance(b) <= self.tolerance
    }

    /// Returns true if an exact solution (one value per unknown) lies in
    /// the region, within tolerance.
    #[must_use]
    pub fn contains_solution(&self, values: &[Rational]) -> bool {
        let limit = self.range + self.tolerance;
        values.iter().all(|v| v.to_f64().abs() <= limit)
    }
}

fn within(point: DVec3, limit: f64) -> bool {
    point.abs().max_element() <= limit
}
