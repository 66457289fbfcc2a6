//! Exact rational numbers.
//!
//! A [`Rational`] is always kept in lowest terms with a positive
//! denominator, and zero is represented as `0/1`. All arithmetic returns a
//! new normalized value; the only in-place mutator is [`Rational::set`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, DivAssign, Mul, Neg, Sub, SubAssign};

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

use crate::NumberError;

/// An exact rational number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: IBig, denominator: IBig) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = DashuSigned::is_negative(&denominator);
        let value = RBig::from_parts(numerator, denominator.unsigned_abs());
        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if the denominator is zero.
    pub fn try_from_i64(numerator: i64, denominator: i64) -> Result<Self, NumberError> {
        if denominator == 0 {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self::from_i64(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an i64 if the value is an integer that fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.0.numerator().clone().try_into().ok()
        } else {
            None
        }
    }

    /// Returns the nearest `f64`.
    ///
    /// This is the single point where exact values leave the rational
    /// domain, when coefficients are handed to the geometry layer.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if the value is zero.
    pub fn checked_recip(&self) -> Result<Self, NumberError> {
        if self.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumberError> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Overwrites the value in place with an integer.
    ///
    /// Used after pivot normalization to pin the pivot to exactly 1.
    pub fn set(&mut self, value: i64) {
        self.0 = RBig::from(IBig::from(value));
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding is applied to the whole "p/q" text so matrices line up.
        let text = if self.is_integer() {
            self.numerator().to_string()
        } else {
            format!("{}/{}", self.numerator(), self.denominator())
        };
        f.pad(&text)
    }
}

// Comparisons against small integers, used heavily by pivot selection.
impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && *self.0.numerator() == IBig::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.0.cmp(&RBig::from(IBig::from(*other))))
    }
}

fn assert_nonzero_divisor(rhs: &Rational) {
    assert!(!rhs.is_zero(), "{}", NumberError::DivisionByZero);
}

// Owned/owned, owned/borrowed and borrowed/borrowed forms of a binary
// operator, with an optional guard run on the right operand.
macro_rules! impl_binary_op {
    ($(#[$meta:meta])* $trait:ident, $method:ident, $op:tt $(, $guard:ident)?) => {
        $(#[$meta])*
        impl $trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $($guard(&rhs);)?
                Self(self.0 $op rhs.0)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $($guard(rhs);)?
                Self(self.0 $op &rhs.0)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Self::Output {
                $($guard(rhs);)?
                Rational(&self.0 $op &rhs.0)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);
impl_binary_op!(
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Rational::checked_div`] to recover.
    Div, div, /, assert_nonzero_divisor
);

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.0 = &self.0 - &rhs.0;
    }
}

impl DivAssign<&Rational> for Rational {
    fn div_assign(&mut self, rhs: &Rational) {
        assert_nonzero_divisor(rhs);
        self.0 = &self.0 / &rhs.0;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self(RBig::from(n))
    }
}
