//! Exact rational arithmetic
//!
//! Every share in a distribution is an exact fraction of the estate. Floating
//! point is only used at the edges ([`Fraction::to_f64`], [`Fraction::to_percentage`])
//! for display and threshold checks.
//!
//! All constructors and operations reduce to lowest terms, so two fractions
//! are equal exactly when their numerators and denominators are equal.
//! Intermediate products are computed in `i128` and narrowed back to `i64`;
//! a result that does not fit is reported as [`EngineError::Overflow`].

use crate::error::{EngineError, Result};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::constant(0, 1);
    pub const ONE: Fraction = Fraction::constant(1, 1);
    pub const HALF: Fraction = Fraction::constant(1, 2);
    pub const THIRD: Fraction = Fraction::constant(1, 3);
    pub const TWO_THIRDS: Fraction = Fraction::constant(2, 3);
    pub const QUARTER: Fraction = Fraction::constant(1, 4);
    pub const SIXTH: Fraction = Fraction::constant(1, 6);
    pub const EIGHTH: Fraction = Fraction::constant(1, 8);

    /// Only for literals already in lowest terms.
    const fn constant(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a fraction, reducing it to lowest terms.
    ///
    /// # Errors
    /// Returns [`EngineError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::reduce(i128::from(numerator), i128::from(denominator))
    }

    /// Create a whole-number fraction `n/1`.
    pub fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn checked_add(self, other: Fraction) -> Result<Fraction> {
        let (a, b) = (self.wide(), other.wide());
        Self::reduce(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_sub(self, other: Fraction) -> Result<Fraction> {
        let (a, b) = (self.wide(), other.wide());
        Self::reduce(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_mul(self, other: Fraction) -> Result<Fraction> {
        let (a, b) = (self.wide(), other.wide());
        Self::reduce(a.0 * b.0, a.1 * b.1)
    }

    /// # Errors
    /// Returns [`EngineError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(self, other: Fraction) -> Result<Fraction> {
        if other.is_zero() {
            return Err(EngineError::DivisionByZero);
        }
        let (a, b) = (self.wide(), other.wide());
        Self::reduce(a.0 * b.1, a.1 * b.0)
    }

    pub fn mul_int(self, n: i64) -> Result<Fraction> {
        self.checked_mul(n.into())
    }

    /// # Errors
    /// Returns [`EngineError::DivisionByZero`] if `n` is zero.
    pub fn div_int(self, n: i64) -> Result<Fraction> {
        self.checked_div(n.into())
    }

    /// Sum a sequence of fractions exactly.
    pub fn sum<'a, I>(fractions: I) -> Result<Fraction>
    where
        I: IntoIterator<Item = &'a Fraction>,
    {
        fractions
            .into_iter()
            .try_fold(Fraction::ZERO, |acc, f| acc.checked_add(*f))
    }

    /// Approximate value, for display and comparisons against float thresholds.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Approximate percentage of the whole (`1/4` -> `25.0`).
    pub fn to_percentage(&self) -> f64 {
        self.to_f64() * 100.0
    }

    fn wide(&self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }

    fn reduce(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(EngineError::ZeroDenominator);
        }

        let common = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        // common >= 1 because the denominator is nonzero
        let mut n = numerator / common as i128;
        let mut d = denominator / common as i128;
        if d < 0 {
            n = -n;
            d = -d;
        }

        let narrow = |v: i128| {
            i64::try_from(v).map_err(|_| {
                EngineError::Overflow(format!("{numerator}/{denominator} exceeds 64-bit range"))
            })
        };

        Ok(Self {
            numerator: narrow(n)?,
            denominator: narrow(d)?,
        })
    }
}

/// Greatest common divisor, iterative Euclid.
///
/// `gcd(0, 0)` is 0; callers guarantee at least one operand is nonzero.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(n)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        let (a, b) = (self.wide(), other.wide());
        (a.0 * b.1).cmp(&(b.0 * a.1))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}/{}", self.numerator, self.denominator))
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
