//! Property-based tests for line and plane clipping.

#[cfg(test)]
mod tests {
    use lineq_numbers::Rational;
    use proptest::prelude::*;

    use crate::{line_edge_points, plane_edge_points_and_mesh, BoundingRegion, PlaneMesh};

    // Exact fractions rounded to f64, as they arrive from a system row.
    // Denominators up to 6 keep any genuine near-miss of a corner far above
    // the default tolerance, so every merge is a rounding artifact.
    fn coefficient() -> impl Strategy<Value = f64> {
        prop_oneof![
            1 => Just(0.0),
            4 => (-12i64..=12, 1i64..=6).prop_map(|(p, q)| Rational::from_i64(p, q).to_f64()),
        ]
    }

    fn smallest_triangle_area(mesh: &PlaneMesh) -> f64 {
        mesh.triangles
            .iter()
            .map(|&[i, j, k]| {
                let p0 = mesh.vertices[i as usize];
                let p1 = mesh.vertices[j as usize];
                let p2 = mesh.vertices[k as usize];
                (p1 - p0).cross(p2 - p0).length() / 2.0
            })
            .fold(f64::INFINITY, f64::min)
    }

    fn region() -> impl Strategy<Value = BoundingRegion> {
        (1i32..=10).prop_map(|r| BoundingRegion::new(f64::from(r)))
    }

    proptest! {
        #[test]
        fn line_points_are_on_the_line_and_in_the_region(
            a in coefficient(),
            b in coefficient(),
            c in coefficient(),
            region in region(),
        ) {
            let points = line_edge_points(a, b, c, &region);
            prop_assert!(points.len() <= 2);
            for p in &points {
                prop_assert!(region.contains_2d_with_tolerance(*p));
                prop_assert!((a * p.x + b * p.y - c).abs() < 1e-9);
            }
            if let [p, q] = points.as_slice() {
                prop_assert!(p.distance(*q) > region.tolerance);
            }
        }

        #[test]
        fn plane_points_are_on_the_plane_and_in_the_region(
            a in coefficient(),
            b in coefficient(),
            c in coefficient(),
            d in coefficient(),
            region in region(),
        ) {
            let mesh = plane_edge_points_and_mesh(a, b, c, d, &region, 0);
            prop_assert!(mesh.edge_points.len() <= 6);
            for p in &mesh.edge_points {
                prop_assert!(region.contains_with_tolerance(*p));
                prop_assert!((a * p.x + b * p.y + c * p.z - d).abs() < 1e-9);
            }
        }

        #[test]
        fn fan_has_one_triangle_per_extra_vertex(
            a in coefficient(),
            b in coefficient(),
            c in coefficient(),
            d in coefficient(),
            order in -4i32..=4,
        ) {
            let region = BoundingRegion::default();
            let mesh = plane_edge_points_and_mesh(a, b, c, d, &region, order);
            let n = mesh.edge_points.len();
            if n < 3 {
                prop_assert!(mesh.triangles.is_empty());
                prop_assert!(mesh.vertices.is_empty());
            } else {
                prop_assert_eq!(mesh.triangles.len(), n - 2);
                prop_assert_eq!(mesh.vertices.len(), n);
                prop_assert_eq!(mesh.uvs.len(), n);
                prop_assert_eq!(mesh.normals.len(), n);
                for (i, t) in mesh.triangles.iter().enumerate() {
                    let i = u32::try_from(i).unwrap();
                    prop_assert_eq!(*t, [0, i + 1, i + 2]);
                }
                prop_assert!(smallest_triangle_area(&mesh) > 1e-10, "sliver triangle");
            }
        }

        #[test]
        fn uv_radius_is_distance_to_centroid(
            a in coefficient(),
            b in coefficient(),
            c in coefficient(),
            d in coefficient(),
        ) {
            let mesh = plane_edge_points_and_mesh(a, b, c, d, &BoundingRegion::default(), 2);
            for (uv, p) in mesh.uvs.iter().zip(&mesh.edge_points) {
                prop_assert!((uv.length() - p.distance(mesh.centroid)).abs() < 1e-9);
            }
        }
    }
}
