//! Property-based tests for reduction and solving.

#[cfg(test)]
mod tests {
    use lineq_numbers::Rational;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{solve, solve_classify, Matrix, SolutionSet};

    // Small coefficients, with zero and ±1 over-represented so that
    // dependent rows and unit pivots show up often.
    fn coefficient() -> impl Strategy<Value = i64> {
        prop_oneof![
            3 => Just(0i64),
            2 => Just(1i64),
            2 => Just(-1i64),
            3 => -6i64..=6i64,
        ]
    }

    fn matrix(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(coefficient(), cols), rows)
        })
    }

    fn build(rows: &[Vec<i64>], augmented: bool) -> Matrix {
        let rows: Vec<&[i64]> = rows.iter().map(Vec::as_slice).collect();
        Matrix::from_i64_rows(&rows, augmented).unwrap()
    }

    fn assert_rref(m: &Matrix) -> Result<(), TestCaseError> {
        let mut last_pivot: Option<usize> = None;
        let mut seen_zero_row = false;
        for row in 0..m.num_rows() {
            let lead = m.row_leading_zero_count(row);
            if lead == m.num_cols() {
                seen_zero_row = true;
                continue;
            }
            prop_assert!(!seen_zero_row, "non-zero row below a zero row");
            prop_assert!(last_pivot.map_or(true, |p| lead > p), "pivots must move right");
            prop_assert!(m[(row, lead)].is_one(), "pivot must be 1");
            for other in 0..m.num_rows() {
                if other != row {
                    prop_assert!(m[(other, lead)].is_zero(), "pivot column must be clear");
                }
            }
            last_pivot = Some(lead);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn reduction_yields_rref(rows in matrix(4, 5)) {
            let mut m = build(&rows, false);
            m.reduce_to_rref();
            assert_rref(&m)?;
        }

        #[test]
        fn reduction_is_idempotent(rows in matrix(4, 5)) {
            let mut m = build(&rows, true);
            m.reduce_to_rref();
            let once = m.clone();
            m.reduce_to_rref();
            prop_assert_eq!(m, once);
        }

        #[test]
        fn rank_is_bounded(rows in matrix(4, 5)) {
            let mut m = build(&rows, false);
            m.reduce_to_rref();
            prop_assert!(m.rank() <= m.num_rows().min(m.num_cols()));
        }

        #[test]
        fn scaling_a_row_keeps_the_rank(rows in matrix(4, 4), k in 1i64..5, row in 0usize..4) {
            let mut a = build(&rows, false);
            let mut b = a.clone();
            let row = row % b.num_rows();
            for col in 0..b.num_cols() {
                b[(row, col)] = &b[(row, col)] * &Rational::from_integer(-k);
            }
            a.reduce_to_rref();
            b.reduce_to_rref();
            prop_assert_eq!(a.rank(), b.rank());
        }

        #[test]
        fn copy_is_independent(rows in matrix(3, 4)) {
            let original = build(&rows, true);
            let snapshot = rows.clone();
            let mut copy = original.clone();
            copy.reduce_to_rref();
            prop_assert_eq!(original, build(&snapshot, true));
        }

        #[test]
        fn solutions_satisfy_the_system(rows in matrix(3, 4)) {
            prop_assume!(rows[0].len() >= 2);
            let m = build(&rows, true);
            let unknowns = m.num_cols() - 1;
            let class = solve_classify(&m, unknowns).unwrap().solution_class;
            let solution = solve(&m).unwrap();
            prop_assert_eq!(solution.class(), class);

            let point = match solution {
                SolutionSet::None => return Ok(()),
                SolutionSet::Unique(x) => x,
                SolutionSet::Infinite(family) => {
                    let params = vec![Rational::from_i64(1, 3); family.free_unknowns.len()];
                    family.evaluate(&params)
                }
            };
            for row in 0..m.num_rows() {
                let lhs = (0..unknowns).fold(Rational::zero(), |acc, col| {
                    acc + &m[(row, col)] * &point[col]
                });
                prop_assert_eq!(&lhs, &m[(row, unknowns)]);
            }
        }
    }
}
