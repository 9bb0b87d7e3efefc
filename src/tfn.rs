//! Triangular fuzzy numbers and their alpha-cuts
//!
//! A triangular fuzzy number (TFN) models an imprecise real number as a
//! triple `(left, peak, right)` with a piecewise-linear membership function
//! rising from 0 at `left` to 1 at `peak` and falling back to 0 at `right`.
//!
//! Arithmetic is defined through the alpha-cut representation: the interval
//! of values with membership degree at least alpha is linear in alpha, so
//! every operation combines the interval bounds at `alpha = 0` (the support)
//! and `alpha = 1` (the peak) and rebuilds a triple from the extremes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::Serialize;

use crate::error::{validate_alpha, FuzzyError, FuzzyResult};

/// Offset applied to the peak when `left`/`right` are omitted
const PEAK_OFFSET: f64 = 1.0;

/// An affine function of alpha: `intercept + alpha * slope`
#[derive(Clone, Copy, PartialEq, Serialize)]
struct Affine {
    intercept: f64,
    slope: f64,
}

impl Affine {
    fn eval(&self, alpha: f64) -> f64 {
        self.intercept + alpha * self.slope
    }
}

impl fmt::Debug for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + alpha * {:?}", self.intercept, self.slope)
    }
}

/// The alpha-cut of a TFN: the interval of values with membership degree
/// at least alpha, as a pair of affine functions of alpha
///
/// For a TFN `(l, n, r)` the bounds are `l + alpha * (n - l)` and
/// `r + alpha * (n - r)`. At `alpha = 0` the cut is the support `[l, r]`,
/// at `alpha = 1` it collapses to the peak.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct AlphaCut {
    lower: Affine,
    upper: Affine,
}

impl AlphaCut {
    /// Derive the alpha-cut of a TFN
    pub fn for_tfn(tfn: &TriangularFuzzyNumber) -> Self {
        Self {
            lower: Affine {
                intercept: tfn.left(),
                slope: tfn.peak() - tfn.left(),
            },
            upper: Affine {
                intercept: tfn.right(),
                slope: tfn.peak() - tfn.right(),
            },
        }
    }

    /// Evaluate the cut at an alpha level, returning `(lower, upper)`
    ///
    /// Returns an `AlphaOutOfRange` error unless `0 <= alpha <= 1`.
    pub fn for_alpha(&self, alpha: f64) -> FuzzyResult<(f64, f64)> {
        validate_alpha(alpha)?;
        Ok(self.at(alpha))
    }

    /// Unchecked evaluation, for callers that guarantee the alpha level
    fn at(&self, alpha: f64) -> (f64, f64) {
        (self.lower.eval(alpha), self.upper.eval(alpha))
    }
}

impl fmt::Display for AlphaCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.lower, self.upper)
    }
}

impl fmt::Debug for AlphaCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlphaCut({:?}, {:?})", self.lower, self.upper)
    }
}

/// A triangular fuzzy number: an immutable `(left, peak, right)` triple
/// with `left <= peak <= right`
///
/// The membership function is 0 outside `[left, right]`, 1 at `peak` and
/// linear in between. Equality, hashing and ordering are all derived from
/// the exact triple, so TFNs can be used as map keys and set elements.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct TriangularFuzzyNumber {
    l: f64,
    n: f64,
    r: f64,
}

impl TriangularFuzzyNumber {
    /// Create a TFN from its peak and optional bounds
    ///
    /// An omitted bound defaults to the peak offset by 1, so
    /// `new(2.0, None, None)` models "about 2" as `(1, 2, 3)`.
    ///
    /// Returns an `InvalidBounds` error unless `left <= peak <= right`.
    pub fn new(
        peak: f64,
        left: impl Into<Option<f64>>,
        right: impl Into<Option<f64>>,
    ) -> FuzzyResult<Self> {
        let l = left.into().unwrap_or(peak - PEAK_OFFSET);
        let r = right.into().unwrap_or(peak + PEAK_OFFSET);

        if l <= peak && peak <= r {
            Ok(Self { l, n: peak, r })
        } else {
            Err(FuzzyError::invalid_bounds(l, peak, r))
        }
    }

    /// Create a TFN from a `(left, peak, right)` triple
    pub fn from_tuple((l, n, r): (f64, f64, f64)) -> FuzzyResult<Self> {
        Self::new(n, l, r)
    }

    /// Rebuild a TFN from the support interval and peak of a combined
    /// alpha-cut. Callers guarantee the ordering invariant.
    fn from_support_and_peak(support: (f64, f64), peak: f64) -> Self {
        Self {
            l: support.0,
            n: peak,
            r: support.1,
        }
    }

    /// The left bound of the support
    pub fn left(&self) -> f64 {
        self.l
    }

    /// The peak, whose membership degree is 1
    pub fn peak(&self) -> f64 {
        self.n
    }

    /// The right bound of the support
    pub fn right(&self) -> f64 {
        self.r
    }

    /// The `(left, peak, right)` triple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.l, self.n, self.r)
    }

    /// The alpha-cut of this TFN
    pub fn alpha_cut(&self) -> AlphaCut {
        AlphaCut::for_tfn(self)
    }

    /// Membership degree of a real number
    ///
    /// Degenerate sides (`left == peak` or `peak == right`) are vertical:
    /// the limiting degree 1 is returned at the peak rather than dividing
    /// by zero.
    pub fn mu(&self, x: f64) -> f64 {
        if x < self.l || x > self.r {
            0.0
        } else if x <= self.n {
            if self.n == self.l {
                1.0
            } else {
                (x - self.l) / (self.n - self.l)
            }
        } else if self.r == self.n {
            1.0
        } else {
            (self.r - x) / (self.r - self.n)
        }
    }

    /// Whether this TFN's support is nested inside `other`'s, with equal
    /// peaks and at least one strictly narrower side
    fn narrower_than(&self, other: &Self) -> bool {
        self.n == other.n
            && ((self.l > other.l && self.r <= other.r)
                || (self.l >= other.l && self.r < other.r))
    }
}

impl Default for TriangularFuzzyNumber {
    /// The real number 0 with unit-width support: `(-1, 0, 1)`
    fn default() -> Self {
        Self {
            l: -PEAK_OFFSET,
            n: 0.0,
            r: PEAK_OFFSET,
        }
    }
}

// Construction rejects NaN (it fails the bounds check), so equality is total.
impl Eq for TriangularFuzzyNumber {}

impl Hash for TriangularFuzzyNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 folds -0.0 into +0.0 so hash agrees with ==
        (self.l + 0.0).to_bits().hash(state);
        (self.n + 0.0).to_bits().hash(state);
        (self.r + 0.0).to_bits().hash(state);
    }
}

impl PartialOrd for TriangularFuzzyNumber {
    /// The containment partial order: a TFN is smaller than another with
    /// the same peak whose support strictly encloses its own. Numbers with
    /// different peaks or overlapping supports are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.narrower_than(other) {
            Some(Ordering::Less)
        } else if other.narrower_than(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Add for TriangularFuzzyNumber {
    type Output = TriangularFuzzyNumber;

    /// Interval addition of the alpha-cut bounds
    fn add(self, rhs: Self) -> Self {
        let (al, ar) = self.alpha_cut().at(0.0);
        let (bl, br) = rhs.alpha_cut().at(0.0);
        let peak = self.alpha_cut().at(1.0).0 + rhs.alpha_cut().at(1.0).0;

        Self::from_support_and_peak((al + bl, ar + br), peak)
    }
}

impl Sub for TriangularFuzzyNumber {
    type Output = TriangularFuzzyNumber;

    /// Interval subtraction: the lower bound subtracts the other's upper
    /// bound and vice versa
    fn sub(self, rhs: Self) -> Self {
        let (al, ar) = self.alpha_cut().at(0.0);
        let (bl, br) = rhs.alpha_cut().at(0.0);
        let peak = self.alpha_cut().at(1.0).0 - rhs.alpha_cut().at(1.0).0;

        Self::from_support_and_peak((al - br, ar - bl), peak)
    }
}

impl Mul for TriangularFuzzyNumber {
    type Output = TriangularFuzzyNumber;

    /// Interval multiplication of the alpha-cut bounds, valid for operands
    /// with positive supports. Mixed-sign supports are unspecified.
    fn mul(self, rhs: Self) -> Self {
        let (al, ar) = self.alpha_cut().at(0.0);
        let (bl, br) = rhs.alpha_cut().at(0.0);
        let peak = self.alpha_cut().at(1.0).0 * rhs.alpha_cut().at(1.0).0;

        Self::from_support_and_peak((al * bl, ar * br), peak)
    }
}

impl Div for TriangularFuzzyNumber {
    type Output = TriangularFuzzyNumber;

    /// Interval division: the reciprocal analog of multiplication, valid
    /// for operands with positive supports
    fn div(self, rhs: Self) -> Self {
        let (al, ar) = self.alpha_cut().at(0.0);
        let (bl, br) = rhs.alpha_cut().at(0.0);
        let peak = self.alpha_cut().at(1.0).0 / rhs.alpha_cut().at(1.0).0;

        Self::from_support_and_peak((al / br, ar / bl), peak)
    }
}

impl Neg for TriangularFuzzyNumber {
    type Output = TriangularFuzzyNumber;

    fn neg(self) -> Self {
        Self {
            l: -self.r,
            n: -self.n,
            r: -self.l,
        }
    }
}

impl IntoIterator for TriangularFuzzyNumber {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    /// Yields `left`, `peak`, `right` in that order
    fn into_iter(self) -> Self::IntoIter {
        [self.l, self.n, self.r].into_iter()
    }
}

impl<'a> IntoIterator for &'a TriangularFuzzyNumber {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [self.l, self.n, self.r].into_iter()
    }
}

impl fmt::Debug for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriangularFuzzyNumber(l={:?}, n={:?}, r={:?})",
            self.l, self.n, self.r
        )
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

// ============================================================================
// Tests
// ============================================================================
