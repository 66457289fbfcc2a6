//! # lineq-geometry
//!
//! Geometric views of linear equations for visualization.
//!
//! This crate provides:
//! - [`BoundingRegion`]: the symmetric square/cube everything is clipped to
//! - [`EquationLine`]: a two-unknown equation clipped to a segment
//! - [`EquationPlane`]: a three-unknown equation clipped to a convex polygon
//!   and triangulated into a [`PlaneMesh`]
//! - Batch recomputation over rayon via [`recompute_lines`] and
//!   [`recompute_planes`]
//!
//! All coordinates are in system units. Rendering layers map them into the
//! unit cube with [`BoundingRegion::to_unit`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod line;
pub mod parallel;
pub mod plane;
pub mod region;

pub use line::{line_edge_points, EquationLine};
pub use parallel::{recompute_lines, recompute_planes, ParallelConfig};
pub use plane::{
    plane_edge_points, plane_edge_points_and_mesh, signed_angle, EquationPlane, PlaneMesh,
    PlanePolygon, RENDER_ORDER_STEP,
};
pub use region::{BoundingRegion, DEFAULT_RANGE, DEFAULT_TOLERANCE};

#[cfg(test)]
mod proptests;
