//! End-to-end pipeline from an augmented matrix to drawable primitives.

use lineq_geometry::{
    recompute_lines, recompute_planes, BoundingRegion, EquationLine, EquationPlane, ParallelConfig,
};
use lineq_linalg::{
    diagnose, solve, solve_classify, Classification, LinalgError, Matrix, SolutionSet,
    SystemDiagnostics, SystemOfEquations,
};
use tracing::{debug, info};

/// One geometric primitive per equation.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitives {
    /// Clipped lines of a two-unknown system.
    Lines(Vec<EquationLine>),
    /// Clipped planes of a three-unknown system.
    Planes(Vec<EquationPlane>),
}

/// A classified system together with its geometry.
///
/// The input matrix is never modified: classification and solving work on
/// reduced copies, so the primitives always reflect the equations as
/// entered.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemVisualization {
    /// Region the primitives were clipped against.
    pub region: BoundingRegion,
    /// Ranks and solution class.
    pub classification: Classification,
    /// Structural problems in the input.
    pub diagnostics: SystemDiagnostics,
    /// Exact solution set.
    pub solution: SolutionSet,
    /// Lines or planes, one per equation, in row order.
    pub primitives: Primitives,
}

impl SystemVisualization {
    /// Builds the visualization with the default [`ParallelConfig`].
    ///
    /// # Errors
    ///
    /// See [`SystemVisualization::build_with_config`].
    pub fn build(matrix: &Matrix, region: &BoundingRegion) -> Result<Self, LinalgError> {
        Self::build_with_config(matrix, region, &ParallelConfig::default())
    }

    /// Classifies and solves `matrix`, then clips one primitive per
    /// equation against `region`. Planes get their row index as render
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotAugmented`] for a matrix without a
    /// constants column and [`LinalgError::UnsupportedDimension`] unless
    /// the system has two or three unknowns.
    pub fn build_with_config(
        matrix: &Matrix,
        region: &BoundingRegion,
        config: &ParallelConfig,
    ) -> Result<Self, LinalgError> {
        if !matrix.is_augmented() {
            return Err(LinalgError::NotAugmented);
        }
        let soe = SystemOfEquations::new(matrix);
        let unknowns = soe.unknown_count();

        let primitives = match unknowns {
            2 => {
                let mut lines = (0..soe.equation_count())
                    .map(|row| EquationLine::from_system_row(&soe, row))
                    .collect::<Result<Vec<_>, _>>()?;
                recompute_lines(&mut lines, region, config);
                Primitives::Lines(lines)
            }
            3 => {
                let mut planes = (0..soe.equation_count())
                    .map(|row| {
                        let order = i32::try_from(row).unwrap_or(i32::MAX);
                        Ok(EquationPlane::from_system_row(&soe, row)?.with_render_order(order))
                    })
                    .collect::<Result<Vec<_>, LinalgError>>()?;
                recompute_planes(&mut planes, region, config);
                Primitives::Planes(planes)
            }
            n => return Err(LinalgError::UnsupportedDimension(n)),
        };

        matrix.log_debug("input system");
        let classification = solve_classify(matrix, unknowns)?;
        let solution = solve(matrix)?;
        let diagnostics = diagnose(matrix);
        info!(
            equations = soe.equation_count(),
            unknowns,
            class = ?classification.solution_class,
            "built system visualization"
        );
        if !diagnostics.is_clean() {
            debug!(?diagnostics, "system has structural issues");
        }

        Ok(Self {
            region: *region,
            classification,
            diagnostics,
            solution,
            primitives,
        })
    }

    /// Number of unknowns: 2 for lines, 3 for planes.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        match self.primitives {
            Primitives::Lines(_) => 2,
            Primitives::Planes(_) => 3,
        }
    }

    /// The clipped lines, empty for a three-unknown system.
    #[must_use]
    pub fn lines(&self) -> &[EquationLine] {
        match &self.primitives {
            Primitives::Lines(lines) => lines,
            Primitives::Planes(_) => &[],
        }
    }

    /// The clipped planes, empty for a two-unknown system.
    #[must_use]
    pub fn planes(&self) -> &[EquationPlane] {
        match &self.primitives {
            Primitives::Planes(planes) => planes,
            Primitives::Lines(_) => &[],
        }
    }

    /// Whether the unique solution lies in the region, or `None` if the
    /// system has no unique solution.
    #[must_use]
    pub fn solution_in_region(&self) -> Option<bool> {
        self.solution
            .unique()
            .map(|values| self.region.contains_solution(values))
    }

    /// Re-clips every primitive against a new region.
    pub fn set_region(&mut self, region: &BoundingRegion, config: &ParallelConfig) {
        self.region = *region;
        match &mut self.primitives {
            Primitives::Lines(lines) => recompute_lines(lines, region, config),
            Primitives::Planes(planes) => recompute_planes(planes, region, config),
        }
    }
}
