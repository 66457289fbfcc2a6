//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{NumberError, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Normalization

        #[test]
        fn scaled_pair_is_identical(p in small_int(), q in non_zero_int(), k in non_zero_int()) {
            let a = Rational::from_i64(p, q);
            let b = Rational::from_i64(p * k, q * k);
            prop_assert_eq!(a.numerator(), b.numerator());
            prop_assert_eq!(a.denominator(), b.denominator());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn stored_in_lowest_terms(p in small_int(), q in non_zero_int()) {
            let r = Rational::from_i64(p, q);
            let num = r.to_string();
            // The displayed parts must already be coprime.
            let (n, d) = match num.split_once('/') {
                Some((n, d)) => (n.parse::<i64>().unwrap(), d.parse::<i64>().unwrap()),
                None => (num.parse::<i64>().unwrap(), 1),
            };
            prop_assert!(d > 0);
            prop_assert_eq!(gcd(n.abs(), d), 1);
        }

        // Field axioms

        #[test]
        fn add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn sub_then_add_is_identity(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn checked_div_matches_operator(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            if b.is_zero() {
                prop_assert_eq!(a.checked_div(&b), Err(NumberError::DivisionByZero));
            } else {
                prop_assert_eq!(a.checked_div(&b).unwrap(), &a / &b);
            }
        }

        // Ordering agrees with the integer comparison helpers.

        #[test]
        fn ordering_against_integers(num in small_int(), den in non_zero_int(), k in -3i64..=3i64) {
            let r = Rational::from_i64(num, den);
            let as_rational = Rational::from_integer(k);
            prop_assert_eq!(r.partial_cmp(&k), r.partial_cmp(&as_rational));
            prop_assert_eq!(r == k, r == as_rational);
        }
    }

    fn gcd(mut a: i64, mut b: i64) -> i64 {
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        a
    }
}
