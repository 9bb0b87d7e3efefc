//! Fuzzy sets over finite and continuous domains
//!
//! The module is organized around two trait abstractions:
//!
//! - [`Domain`] - the universe a fuzzy set is evaluated over and how to
//!   enumerate it
//! - [`FuzzySet`] - the shared surface of both set variants: membership
//!   evaluation, derived properties (core, support, height, cross-over
//!   points, alpha-cuts), pointwise operators and checked comparisons
//!
//! Concrete variants live in [`finite`] and [`continuous`]. Both are
//! immutable once built: every operation allocates a fresh result, and
//! every iterator is created anew per call, so re-iterating a set or a
//! domain always yields the same sequence.

pub mod continuous;
pub mod finite;

use crate::error::{validate_alpha, FuzzyResult};

/// The universe of discourse of a fuzzy set
///
/// A domain enumerates a finite sequence of elements in a fixed order.
/// Iterators are restartable: each `iter` call starts a fresh pass over
/// the same sequence.
pub trait Domain: PartialEq {
    type Element: Clone;

    /// Membership test for the universe
    fn contains(&self, item: &Self::Element) -> bool;

    /// Enumerate the domain's elements in its fixed iteration order
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Element> + '_>;
}

/// The shared surface of finite and continuous fuzzy sets
///
/// Implementors provide membership evaluation, the domain-compatibility
/// rule and the two pointwise construction primitives (`combine`,
/// `map_degrees`); everything else is derived. Binary operations and
/// comparisons across unequal domains fail with a `DomainMismatch` error
/// rather than silently reinterpreting one operand.
pub trait FuzzySet: Sized {
    type Element: Clone;
    type Dom: Domain<Element = Self::Element> + Clone;

    /// The owning domain
    fn domain(&self) -> &Self::Dom;

    /// Total membership function: off-domain elements have degree 0
    fn mu(&self, x: &Self::Element) -> f64;

    /// Check operand compatibility and select the domain a combined
    /// result is evaluated over
    fn merged_domain(&self, other: &Self) -> FuzzyResult<Self::Dom>;

    /// Build a new set by applying a pointwise binary operator
    fn combine<F>(&self, other: &Self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static;

    /// Build a new set by applying a pointwise unary operator
    fn map_degrees<F>(&self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static;

    /// Degree comparison rule for this variant. Exact by default;
    /// continuous sets widen this to a small tolerance.
    fn degrees_equal(&self, a: f64, b: f64) -> bool {
        a == b
    }

    /// Membership degrees in domain iteration order
    fn range(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.domain().iter().map(move |x| self.mu(&x)))
    }

    /// `(element, degree)` pairs in domain iteration order
    fn pairs(&self) -> Box<dyn Iterator<Item = (Self::Element, f64)> + '_> {
        Box::new(self.domain().iter().map(move |x| {
            let degree = self.mu(&x);
            (x, degree)
        }))
    }

    /// Elements whose degree satisfies a predicate, in domain order
    fn elements_where(&self, pred: impl Fn(f64) -> bool) -> Vec<Self::Element> {
        self.pairs()
            .filter(|(_, degree)| pred(*degree))
            .map(|(x, _)| x)
            .collect()
    }

    /// Elements with degree exactly 1
    fn core(&self) -> Vec<Self::Element> {
        self.elements_where(|degree| degree == 1.0)
    }

    /// Elements with positive degree
    fn support(&self) -> Vec<Self::Element> {
        self.elements_where(|degree| degree > 0.0)
    }

    /// Elements with degree exactly 0.5
    fn cross_over_points(&self) -> Vec<Self::Element> {
        self.elements_where(|degree| degree == 0.5)
    }

    /// The maximum degree over the domain, 0 when the domain is empty
    fn height(&self) -> f64 {
        self.range().fold(0.0, f64::max)
    }

    /// Elements with degree at least `alpha`
    ///
    /// Returns an `AlphaOutOfRange` error unless `0 <= alpha <= 1`.
    fn alpha_cut(&self, alpha: f64) -> FuzzyResult<Vec<Self::Element>> {
        validate_alpha(alpha)?;
        Ok(self.elements_where(|degree| degree >= alpha))
    }

    /// Pointwise intersection with the default min t-norm
    fn t_norm(&self, other: &Self) -> FuzzyResult<Self> {
        self.combine(other, f64::min)
    }

    /// Pointwise intersection with a custom t-norm
    fn t_norm_with<F>(&self, other: &Self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.combine(other, op)
    }

    /// Pointwise union with the default max s-norm
    fn s_norm(&self, other: &Self) -> FuzzyResult<Self> {
        self.combine(other, f64::max)
    }

    /// Pointwise union with a custom s-norm
    fn s_norm_with<F>(&self, other: &Self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.combine(other, op)
    }

    /// Pointwise complement with the default `1 - x` operator
    fn complement(&self) -> FuzzyResult<Self> {
        self.map_degrees(|degree| 1.0 - degree)
    }

    /// Pointwise complement with a custom operator
    fn complement_with<F>(&self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.map_degrees(op)
    }

    /// Pointwise equality over the shared domain
    ///
    /// Returns a `DomainMismatch` error when the domains are unequal.
    fn equals(&self, other: &Self) -> FuzzyResult<bool> {
        let domain = self.merged_domain(other)?;
        let result = domain
            .iter()
            .all(|x| self.degrees_equal(self.mu(&x), other.mu(&x)));
        Ok(result)
    }

    /// Whether every degree of `self` is at most the corresponding degree
    /// of `other` (fuzzy subset)
    fn subset_of(&self, other: &Self) -> FuzzyResult<bool> {
        let domain = self.merged_domain(other)?;
        let result = domain.iter().all(|x| self.mu(&x) <= other.mu(&x));
        Ok(result)
    }

    /// Subset with at least one strictly smaller degree
    fn proper_subset_of(&self, other: &Self) -> FuzzyResult<bool> {
        Ok(self.subset_of(other)? && !self.equals(other)?)
    }

    /// Whether `self` contains `other` pointwise
    fn superset_of(&self, other: &Self) -> FuzzyResult<bool> {
        other.subset_of(self)
    }

    /// Superset with at least one strictly greater degree
    fn proper_superset_of(&self, other: &Self) -> FuzzyResult<bool> {
        other.proper_subset_of(self)
    }
}
