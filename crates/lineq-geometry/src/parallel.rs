//! Batch recomputation of equation geometry.
//!
//! Each line or plane depends only on its own coefficients and the shared
//! region, so a batch can be recomputed in any order. Above a configurable
//! size the work is spread over rayon's pool.

use rayon::prelude::*;
use tracing::debug;

use crate::{BoundingRegion, EquationLine, EquationPlane};

/// Configuration for batch recomputation.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum batch size to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

/// Recomputes the edge points of every line against `region`.
pub fn recompute_lines(lines: &mut [EquationLine], region: &BoundingRegion, config: &ParallelConfig) {
    debug!(count = lines.len(), "recomputing lines");
    if lines.len() < config.parallel_threshold {
        for line in lines.iter_mut() {
            line.compute_edge_points(region);
        }
        return;
    }
    lines.par_iter_mut().for_each(|line| {
        line.compute_edge_points(region);
    });
}

/// Recomputes the mesh of every plane against `region`.
pub fn recompute_planes(
    planes: &mut [EquationPlane],
    region: &BoundingRegion,
    config: &ParallelConfig,
) {
    debug!(count = planes.len(), "recomputing planes");
    if planes.len() < config.parallel_threshold {
        for plane in planes.iter_mut() {
            plane.update(region);
        }
        return;
    }
    planes.par_iter_mut().for_each(|plane| {
        plane.update(region);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planes(n: usize) -> Vec<EquationPlane> {
        (0..n)
            .map(|i| {
                let k = i as f64;
                EquationPlane::new(1.0, k * 0.25, -1.0, k * 0.1 - 2.0)
                    .with_render_order(i32::try_from(i).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential_planes() {
        let region = BoundingRegion::default();
        let mut sequential = planes(40);
        let mut parallel = sequential.clone();

        recompute_planes(&mut sequential, &region, &ParallelConfig { parallel_threshold: usize::MAX });
        recompute_planes(&mut parallel, &region, &ParallelConfig { parallel_threshold: 0 });

        assert_eq!(sequential, parallel);
        assert!(parallel.iter().all(|p| !p.mesh().is_empty()));
    }

    #[test]
    fn test_parallel_matches_sequential_lines() {
        let region = BoundingRegion::new(3.0);
        let mut sequential: Vec<EquationLine> = (0..40)
            .map(|i| EquationLine::new(f64::from(i % 5) - 2.0, 1.0, f64::from(i) * 0.05))
            .collect();
        let mut parallel = sequential.clone();

        recompute_lines(&mut sequential, &region, &ParallelConfig { parallel_threshold: usize::MAX });
        recompute_lines(&mut parallel, &region, &ParallelConfig { parallel_threshold: 0 });

        assert_eq!(sequential, parallel);
        assert!(parallel.iter().all(|l| l.segment().is_some()));
    }

    #[test]
    fn test_empty_batch() {
        let mut lines: Vec<EquationLine> = Vec::new();
        recompute_lines(&mut lines, &BoundingRegion::default(), &ParallelConfig::default());
        assert!(lines.is_empty());
    }
}
