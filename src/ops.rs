//! Pointwise operator framework
//!
//! Free functions mirroring the [`FuzzySet`] methods, so callers can treat
//! set operations as plain functions: `t_norm(&a, &b)` and `a.t_norm(&b)`
//! are interchangeable, as are the `_with` forms taking a custom pointwise
//! operator. The [`TNorm`] and [`SNorm`] catalogs provide the standard
//! operator families beyond the min/max defaults.

use crate::error::FuzzyResult;
use crate::sets::FuzzySet;

/// Pointwise intersection with the default min t-norm
pub fn t_norm<S: FuzzySet>(a: &S, b: &S) -> FuzzyResult<S> {
    a.t_norm(b)
}

/// Pointwise intersection with a custom t-norm
pub fn t_norm_with<S, F>(a: &S, b: &S, op: F) -> FuzzyResult<S>
where
    S: FuzzySet,
    F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
{
    a.t_norm_with(b, op)
}

/// Pointwise union with the default max s-norm
pub fn s_norm<S: FuzzySet>(a: &S, b: &S) -> FuzzyResult<S> {
    a.s_norm(b)
}

/// Pointwise union with a custom s-norm
pub fn s_norm_with<S, F>(a: &S, b: &S, op: F) -> FuzzyResult<S>
where
    S: FuzzySet,
    F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
{
    a.s_norm_with(b, op)
}

/// Pointwise complement with the default `1 - x` operator
pub fn complement<S: FuzzySet>(a: &S) -> FuzzyResult<S> {
    a.complement()
}

/// Pointwise complement with a custom operator
pub fn complement_with<S, F>(a: &S, op: F) -> FuzzyResult<S>
where
    S: FuzzySet,
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    a.complement_with(op)
}

/// Elements of a set with degree at least `alpha`
pub fn alpha_cut<S: FuzzySet>(set: &S, alpha: f64) -> FuzzyResult<Vec<S::Element>> {
    set.alpha_cut(alpha)
}

/// Standard t-norm families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TNorm {
    Min,
    Product,
    Lukasiewicz,
    Drastic,
}

impl TNorm {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            TNorm::Min => a.min(b),
            TNorm::Product => a * b,
            TNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
            TNorm::Drastic => {
                if a == 1.0 {
                    b
                } else if b == 1.0 {
                    a
                } else {
                    0.0
                }
            }
        }
    }
}

/// Standard s-norm (t-conorm) families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SNorm {
    Max,
    ProbabilisticSum,
    BoundedSum,
    Drastic,
}

impl SNorm {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            SNorm::Max => a.max(b),
            SNorm::ProbabilisticSum => a + b - a * b,
            SNorm::BoundedSum => (a + b).min(1.0),
            SNorm::Drastic => {
                if a == 0.0 {
                    b
                } else if b == 0.0 {
                    a
                } else {
                    1.0
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
