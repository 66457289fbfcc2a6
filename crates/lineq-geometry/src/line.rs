//! Clipping of a 2D line `a·x + b·y = c` against the bounding square.

use glam::DVec2;
use lineq_linalg::{LinalgError, SystemOfEquations};
use tracing::trace;

use crate::BoundingRegion;

/// Intersections of the line `a·x + b·y = c` with the boundary of `region`.
///
/// The boundary is probed in a fixed order: y = -r, y = r (solving for x),
/// then x = -r, x = r (solving for y). A probe whose coefficient is zero is
/// skipped. Points outside the region (with tolerance) are dropped, and so
/// are points coincident (within tolerance) with one already kept: a line
/// through a corner is hit by two probes whose results may differ by
/// rounding. The result has zero, one or two points.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_edge_points(a: f64, b: f64, c: f64, region: &BoundingRegion) -> Vec<DVec2> {
    let r = region.range;
    let solve_x = |y: f64| (a != 0.0).then(|| (c - b * y) / a);
    let solve_y = |x: f64| (b != 0.0).then(|| (c - a * x) / b);

    let candidates = [
        solve_x(-r).map(|x| DVec2::new(x, -r)),
        solve_x(r).map(|x| DVec2::new(x, r)),
        solve_y(-r).map(|y| DVec2::new(-r, y)),
        solve_y(r).map(|y| DVec2::new(r, y)),
    ];

    let mut points: Vec<DVec2> = Vec::with_capacity(2);
    for point in candidates.into_iter().flatten() {
        if region.contains_2d_with_tolerance(point)
            && !points.iter().any(|&kept| region.coincident_2d(kept, point))
        {
            points.push(point);
        }
    }

    trace!(a, b, c, count = points.len(), "clipped line");
    points
}

/// A line `a·x + b·y = c` with its cached clipped segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquationLine {
    /// Coefficient of x.
    pub a: f64,
    /// Coefficient of y.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    edge_points: Vec<DVec2>,
}

impl EquationLine {
    /// Creates a line with no computed edge points.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            edge_points: Vec::new(),
        }
    }

    /// Creates a line from one equation of a two-unknown system.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedDimension`] unless the system has
    /// exactly two unknowns, or an index error for a bad row.
    pub fn from_system_row(soe: &SystemOfEquations<'_>, row: usize) -> Result<Self, LinalgError> {
        let mut line = Self::default();
        line.set_coefficients_from_system_row(soe, row)?;
        Ok(line)
    }

    /// Replaces the coefficients. Cached edge points are left stale until
    /// the next [`compute_edge_points`](Self::compute_edge_points).
    pub fn set_coefficients(&mut self, a: f64, b: f64, c: f64) {
        self.a = a;
        self.b = b;
        self.c = c;
    }

    /// Copies the coefficients of equation `row`.
    ///
    /// # Errors
    ///
    /// Same as [`EquationLine::from_system_row`].
    pub fn set_coefficients_from_system_row(
        &mut self,
        soe: &SystemOfEquations<'_>,
        row: usize,
    ) -> Result<(), LinalgError> {
        if soe.unknown_count() != 2 {
            return Err(LinalgError::UnsupportedDimension(soe.unknown_count()));
        }
        let values = soe.row_as_f64(row)?;
        self.set_coefficients(values[0], values[1], values[2]);
        Ok(())
    }

    /// Recomputes and caches the clipped segment.
    pub fn compute_edge_points(&mut self, region: &BoundingRegion) -> &[DVec2] {
        self.edge_points = line_edge_points(self.a, self.b, self.c, region);
        &self.edge_points
    }

    /// The last computed edge points.
    #[must_use]
    pub fn edge_points(&self) -> &[DVec2] {
        &self.edge_points
    }

    /// Endpoints of the visible segment, if the line crosses the region.
    #[must_use]
    pub fn segment(&self) -> Option<(DVec2, DVec2)> {
        match self.edge_points.as_slice() {
            [p, q, ..] => Some((*p, *q)),
            _ => None,
        }
    }
}
