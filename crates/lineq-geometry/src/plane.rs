//! Clipping of a plane `a·x + b·y + c·z = d` against the bounding cube,
//! with fan triangulation and polar UVs for rendering.

use glam::{DVec2, DVec3};
use lineq_linalg::{LinalgError, SystemOfEquations};
use tracing::debug;

use crate::BoundingRegion;

/// Offset along the normal per unit of render order, in system units.
pub const RENDER_ORDER_STEP: f64 = 0.001;

/// Signed angle in radians from `from` to `to`, positive when the rotation
/// is counter-clockwise seen along `axis`.
///
/// Returns 0 if either vector has zero length.
#[must_use]
pub fn signed_angle(from: DVec3, to: DVec3, axis: DVec3) -> f64 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }
    let unsigned = (from.dot(to) / denominator).clamp(-1.0, 1.0).acos();
    if axis.dot(from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Clipped polygon of a plane, before triangulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanePolygon {
    /// Vertices in angular order around `centroid`.
    pub vertices: Vec<DVec3>,
    /// Arithmetic mean of the vertices (zero when there are none).
    pub centroid: DVec3,
    /// Unit normal of the plane (zero for a degenerate plane).
    pub normal: DVec3,
}

/// Intersects the plane `a·x + b·y + c·z = d` with the edges of `region`.
///
/// Each coordinate is solved for at the four corner combinations of the
/// other two, mirroring the twelve cube edges. A solve whose coefficient is
/// zero is skipped. Points outside the region (with tolerance) are dropped,
/// and so are points coincident (within tolerance) with one already kept,
/// since a plane through a cube corner is hit by up to three probes whose
/// results may differ by rounding. The survivors are sorted by signed angle
/// around the normal, measured from the centroid relative to the first
/// survivor.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::cast_precision_loss
)]
pub fn plane_edge_points(a: f64, b: f64, c: f64, d: f64, region: &BoundingRegion) -> PlanePolygon {
    let r = region.range;
    let solve_x = |y: f64, z: f64| (a != 0.0).then(|| (d - b * y - c * z) / a);
    let solve_y = |x: f64, z: f64| (b != 0.0).then(|| (d - a * x - c * z) / b);
    let solve_z = |x: f64, y: f64| (c != 0.0).then(|| (d - a * x - b * y) / c);

    let corners = [(-r, -r), (-r, r), (r, -r), (r, r)];
    let candidates = corners
        .iter()
        .map(|&(p, q)| solve_x(p, q).map(|x| DVec3::new(x, p, q)))
        .chain(corners.iter().map(|&(p, q)| solve_y(p, q).map(|y| DVec3::new(p, y, q))))
        .chain(corners.iter().map(|&(p, q)| solve_z(p, q).map(|z| DVec3::new(p, q, z))))
        .flatten();

    let mut vertices: Vec<DVec3> = Vec::with_capacity(6);
    for point in candidates {
        if region.contains_with_tolerance(point)
            && !vertices.iter().any(|&kept| region.coincident(kept, point))
        {
            vertices.push(point);
        }
    }

    let normal = DVec3::new(a, b, c).normalize_or_zero();
    let centroid = if vertices.is_empty() {
        DVec3::ZERO
    } else {
        vertices.iter().copied().sum::<DVec3>() / vertices.len() as f64
    };

    if let Some(&first) = vertices.first() {
        let reference = first - centroid;
        vertices.sort_by(|p, q| {
            let angle_p = signed_angle(reference, *p - centroid, normal);
            let angle_q = signed_angle(reference, *q - centroid, normal);
            angle_p.total_cmp(&angle_q)
        });
    }

    PlanePolygon {
        vertices,
        centroid,
        normal,
    }
}

/// Render-ready geometry of a clipped plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneMesh {
    /// The ordered polygon, without the render-order offset.
    pub edge_points: Vec<DVec3>,
    /// Mesh vertices: the polygon shifted along the normal by the
    /// render-order offset. Empty when there are fewer than three points.
    pub vertices: Vec<DVec3>,
    /// Per-vertex normals, all equal to the plane normal.
    pub normals: Vec<DVec3>,
    /// Per-vertex polar UVs centred on the centroid.
    pub uvs: Vec<DVec2>,
    /// Fan triangles as vertex index triples.
    pub triangles: Vec<[u32; 3]>,
    /// Centroid of the polygon.
    pub centroid: DVec3,
    /// Unit normal of the plane.
    pub normal: DVec3,
}

impl PlaneMesh {
    /// Returns true if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Outline of the polygon, if it has at least two points.
    #[must_use]
    pub fn border_line(&self) -> Option<&[DVec3]> {
        (self.edge_points.len() >= 2).then_some(self.edge_points.as_slice())
    }
}

/// Clips, triangulates and unwraps the plane `a·x + b·y + c·z = d`.
///
/// `render_order` shifts the output vertices by
/// `normal * RENDER_ORDER_STEP * render_order` so that coincident planes
/// do not z-fight; the offset takes no part in the UV computation.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn plane_edge_points_and_mesh(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    region: &BoundingRegion,
    render_order: i32,
) -> PlaneMesh {
    let polygon = plane_edge_points(a, b, c, d, region);
    debug!(a, b, c, d, count = polygon.vertices.len(), "clipped plane");
    triangulate(polygon, render_order)
}

#[allow(clippy::cast_possible_truncation)]
fn triangulate(polygon: PlanePolygon, render_order: i32) -> PlaneMesh {
    let PlanePolygon {
        vertices: edge_points,
        centroid,
        normal,
    } = polygon;

    if edge_points.len() < 3 {
        return PlaneMesh {
            edge_points,
            centroid,
            normal,
            ..PlaneMesh::default()
        };
    }

    let triangles = (1..edge_points.len() as u32 - 1)
        .map(|i| [0, i, i + 1])
        .collect();

    let reference = edge_points[0] - centroid;
    let uvs = edge_points
        .iter()
        .map(|&p| {
            let angle = signed_angle(reference, p - centroid, normal);
            let distance = p.distance(centroid);
            DVec2::new(angle.sin() * distance, angle.cos() * distance)
        })
        .collect();

    let offset = normal * RENDER_ORDER_STEP * f64::from(render_order);
    let vertices = edge_points.iter().map(|&p| p + offset).collect();
    let normals = vec![normal; edge_points.len()];

    PlaneMesh {
        edge_points,
        vertices,
        normals,
        uvs,
        triangles,
        centroid,
        normal,
    }
}

/// A plane `a·x + b·y + c·z = d` with its cached mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquationPlane {
    /// Coefficient of x.
    pub a: f64,
    /// Coefficient of y.
    pub b: f64,
    /// Coefficient of z.
    pub c: f64,
    /// Constant term.
    pub d: f64,
    /// Per-instance ordering index for the render offset.
    pub render_order: i32,
    mesh: PlaneMesh,
}

impl EquationPlane {
    /// Creates a plane with no computed geometry.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            ..Self::default()
        }
    }

    /// Sets the render order.
    #[must_use]
    pub fn with_render_order(mut self, render_order: i32) -> Self {
        self.render_order = render_order;
        self
    }

    /// Creates a plane from one equation of a three-unknown system.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedDimension`] unless the system has
    /// exactly three unknowns, or an index error for a bad row.
    pub fn from_system_row(soe: &SystemOfEquations<'_>, row: usize) -> Result<Self, LinalgError> {
        let mut plane = Self::default();
        plane.set_coefficients_from_system_row(soe, row)?;
        Ok(plane)
    }

    /// Replaces the coefficients. The cached mesh is stale until the next
    /// [`update`](Self::update).
    pub fn set_coefficients(&mut self, a: f64, b: f64, c: f64, d: f64) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
    }

    /// Copies the coefficients of equation `row`.
    ///
    /// # Errors
    ///
    /// Same as [`EquationPlane::from_system_row`].
    pub fn set_coefficients_from_system_row(
        &mut self,
        soe: &SystemOfEquations<'_>,
        row: usize,
    ) -> Result<(), LinalgError> {
        if soe.unknown_count() != 3 {
            return Err(LinalgError::UnsupportedDimension(soe.unknown_count()));
        }
        let values = soe.row_as_f64(row)?;
        self.set_coefficients(values[0], values[1], values[2], values[3]);
        Ok(())
    }

    /// Unit normal `(a, b, c) / |(a, b, c)|`, or zero for a degenerate plane.
    #[must_use]
    pub fn normal(&self) -> DVec3 {
        DVec3::new(self.a, self.b, self.c).normalize_or_zero()
    }

    /// Recomputes and caches the mesh.
    pub fn update(&mut self, region: &BoundingRegion) -> &PlaneMesh {
        self.mesh =
            plane_edge_points_and_mesh(self.a, self.b, self.c, self.d, region, self.render_order);
        &self.mesh
    }

    /// The last computed mesh.
    #[must_use]
    pub fn mesh(&self) -> &PlaneMesh {
        &self.mesh
    }

    /// The last computed polygon.
    #[must_use]
    pub fn edge_points(&self) -> &[DVec3] {
        &self.mesh.edge_points
    }
}
