//! Fuzzy sets over continuous domains
//!
//! A continuous fuzzy set pairs a sampled real interval with an opaque
//! membership function. The interval's step only governs enumeration, not
//! identity: two domains with the same bounds are equal regardless of how
//! finely they are sampled, and binary operations between sets with
//! different steps resolve to the finer one so no information is lost.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{FuzzyError, FuzzyResult};
use crate::sets::{Domain, FuzzySet};

/// Sampling step used when none is given
const DEFAULT_STEP: f64 = 0.1;

/// Slack for deciding whether the step divides the span exactly; keeps
/// accumulated representation error from dropping the final sample
const STEP_EPSILON: f64 = 1e-9;

/// Tolerance for comparing membership degrees of continuous sets
pub(crate) const DEGREE_EPSILON: f64 = 1e-9;

/// The domain of a continuous fuzzy set: a closed real interval
/// `[start, end]` sampled at a fixed step
///
/// Equality compares only the bounds; the step is an enumeration detail.
#[derive(Clone, Copy, Serialize)]
pub struct ContinuousDomain {
    start: f64,
    end: f64,
    step: f64,
}

impl ContinuousDomain {
    /// Create a domain sampled at the default step of 0.1
    pub fn new(start: f64, end: f64) -> FuzzyResult<Self> {
        Self::with_step(start, end, DEFAULT_STEP)
    }

    /// Create a domain with an explicit sampling step
    ///
    /// Returns an `InvalidRange` error unless `start <= end` and
    /// `step > 0`.
    pub fn with_step(start: f64, end: f64, step: f64) -> FuzzyResult<Self> {
        if start <= end && step > 0.0 {
            Ok(Self { start, end, step })
        } else {
            Err(FuzzyError::invalid_range(start, end, step))
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Enumerate the samples `start, start + step, ...` up to and
    /// including `end`
    pub fn samples(&self) -> Samples {
        Samples::new(self)
    }
}

impl PartialEq for ContinuousDomain {
    /// Bounds-only equality; the step is ignored
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Domain for ContinuousDomain {
    type Element = f64;

    fn contains(&self, item: &f64) -> bool {
        self.start <= *item && *item <= self.end
    }

    fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.samples())
    }
}

impl fmt::Debug for ContinuousDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContinuousDomain(start={:?}, end={:?}, step={:?})",
            self.start, self.end, self.step
        )
    }
}

impl fmt::Display for ContinuousDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Sample iterator over a continuous domain
///
/// Each sample is computed as `start + i * step` from its index rather
/// than by accumulation, so floating-point drift cannot compound across a
/// long range. A final sample that overshoots `end` by representation
/// error is clamped to exactly `end`.
pub struct Samples {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Samples {
    fn new(domain: &ContinuousDomain) -> Self {
        let span = domain.end - domain.start;
        let len = (span / domain.step + STEP_EPSILON).floor() as usize + 1;

        Self {
            start: domain.start,
            end: domain.end,
            step: domain.step,
            index: 0,
            len,
        }
    }
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }

        let i = self.index;
        self.index += 1;

        let x = self.start + self.step * i as f64;
        Some(if x > self.end { self.end } else { x })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Samples {}

/// A fuzzy set over a continuous domain
///
/// The membership function is stored as an opaque callable; the domain
/// restricts the enumerable samples used for property computations and
/// for construction-time validation. Off-domain inputs have degree 0.
#[derive(Clone)]
pub struct ContinuousFuzzySet {
    domain: ContinuousDomain,
    membership: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl ContinuousFuzzySet {
    /// Create a set from a domain and a membership function
    ///
    /// The function is evaluated at every sample of the domain; a result
    /// outside `[0, 1]` is an `InvalidDegree` error naming the sample.
    pub fn new(
        domain: ContinuousDomain,
        membership: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> FuzzyResult<Self> {
        let membership: Arc<dyn Fn(f64) -> f64 + Send + Sync> = Arc::new(membership);

        for x in domain.samples() {
            let degree = (membership)(x);
            if !(0.0..=1.0).contains(&degree) {
                return Err(FuzzyError::invalid_degree(x, degree));
            }
        }

        Ok(Self { domain, membership })
    }

    /// Membership degree of a real number; 0 outside `[start, end]`
    pub fn mu(&self, x: f64) -> f64 {
        if self.domain.contains(&x) {
            (self.membership)(x)
        } else {
            0.0
        }
    }
}

impl FuzzySet for ContinuousFuzzySet {
    type Element = f64;
    type Dom = ContinuousDomain;

    fn domain(&self) -> &ContinuousDomain {
        &self.domain
    }

    fn mu(&self, x: &f64) -> f64 {
        ContinuousFuzzySet::mu(self, *x)
    }

    fn merged_domain(&self, other: &Self) -> FuzzyResult<ContinuousDomain> {
        if self.domain != other.domain {
            return Err(FuzzyError::domain_mismatch(&self.domain, &other.domain));
        }

        // Prefer the finer sampling so no information is lost.
        Ok(if self.domain.step <= other.domain.step {
            self.domain
        } else {
            other.domain
        })
    }

    fn combine<F>(&self, other: &Self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        let domain = self.merged_domain(other)?;
        let lhs = self.clone();
        let rhs = other.clone();

        Self::new(domain, move |x| op(lhs.mu(x), rhs.mu(x)))
    }

    fn map_degrees<F>(&self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let inner = self.clone();

        Self::new(self.domain, move |x| op(inner.mu(x)))
    }

    fn degrees_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= DEGREE_EPSILON
    }
}

impl PartialEq for ContinuousFuzzySet {
    /// Pointwise equality at the finer of the two steps; sets over
    /// unequal bounds are simply unequal
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl<'a> IntoIterator for &'a ContinuousFuzzySet {
    type Item = (f64, f64);
    type IntoIter = Box<dyn Iterator<Item = (f64, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

impl fmt::Debug for ContinuousFuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContinuousFuzzySet({:?})", self.domain)
    }
}

impl fmt::Display for ContinuousFuzzySet {
    /// Zadeh-style listing of the sampled elements with two-decimal
    /// degrees
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .pairs()
            .map(|(x, degree)| format!("{x:?}/{degree:.2}"))
            .collect();
        write!(f, "{}", parts.join(" + "))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn domain(start: f64, end: f64, step: f64) -> ContinuousDomain {
        ContinuousDomain::with_step(start, end, step).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_with_step_rejects_inverted_bounds() {
        let err = ContinuousDomain::with_step(2.0, 1.5, 0.1).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert!(err.message.contains("start=2"));
    }

    #[test]
    fn test_with_step_rejects_non_positive_steps() {
        assert!(ContinuousDomain::with_step(1.0, 1.5, -0.5).is_err());
        assert!(ContinuousDomain::with_step(1.0, 1.5, 0.0).is_err());
    }

    #[test]
    fn test_new_uses_the_default_step() {
        let d = ContinuousDomain::new(0.0, 1.0).unwrap();

        assert_eq!(d.step(), 0.1);
    }

    #[test]
    fn test_samples_stop_before_overshooting_the_end() {
        let d = domain(1.0, 2.6, 0.5);

        assert_close(&d.iter().collect::<Vec<_>>(), &[1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_samples_include_the_end_when_the_step_divides_the_span() {
        let d = domain(0.0, 1.0, 0.2);
        let samples: Vec<f64> = d.iter().collect();

        assert_close(&samples, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        // The final sample is clamped to exactly the end bound.
        assert_eq!(*samples.last().unwrap(), 1.0);
    }

    #[test]
    fn test_samples_of_a_singleton_domain() {
        let d = domain(1.0, 1.0, 0.5);

        assert_eq!(d.iter().collect::<Vec<_>>(), vec![1.0]);
    }

    #[test]
    fn test_sampling_is_restartable() {
        let d = domain(0.0, 1.0, 0.3);

        assert_eq!(d.iter().collect::<Vec<_>>(), d.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_contains_checks_the_bounds_only() {
        let d = domain(1.0, 2.6, 0.5);

        assert!(d.contains(&1.5));
        assert!(d.contains(&2.6));
        assert!(!d.contains(&3.0));
    }

    #[test]
    fn test_equality_ignores_the_step() {
        assert_eq!(domain(1.0, 2.0, 0.0001), domain(1.0, 2.0, 0.1));
        assert_ne!(domain(1.0, 2.6, 0.5), domain(1.0, 2.7, 0.5));
    }

    #[test]
    fn test_domain_debug_shows_all_parameters() {
        assert_eq!(
            format!("{:?}", domain(1.0, 2.6, 0.5)),
            "ContinuousDomain(start=1.0, end=2.6, step=0.5)"
        );
    }

    #[test]
    fn test_set_construction_validates_sampled_degrees() {
        let err = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| -1.0).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidDegree);
        assert_eq!(err.context.get("element"), Some(&"1".to_string()));
    }

    #[test]
    fn test_mu_inside_and_outside_the_domain() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |x| 1.0 - 1.0 / (1.0 + x)).unwrap();

        assert_eq!(fs.mu(1.0), 0.5);
        assert_eq!(fs.mu(1.5), 0.6);
        assert_eq!(fs.mu(2.7), 0.0);
        assert_eq!(fs.mu(0.0), 0.0);
    }

    #[test]
    fn test_mu_over_a_singleton_domain() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 1.0, 0.5), |x| x).unwrap();

        assert_eq!(fs.mu(1.0), 1.0);
        assert_eq!(fs.mu(1.5), 0.0);
    }

    #[test]
    fn test_range_follows_the_sampling_order() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), spike(1.5)).unwrap();

        assert_eq!(fs.range().collect::<Vec<_>>(), vec![0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pairs_align_elements_and_degrees() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), spike(1.5)).unwrap();
        let pairs: Vec<_> = (&fs).into_iter().collect();

        assert_eq!(
            pairs,
            vec![(1.0, 0.0), (1.5, 1.0), (2.0, 0.0), (2.5, 0.0)]
        );
    }

    #[test]
    fn test_core_and_support_of_a_spike() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), spike(1.5)).unwrap();

        assert_eq!(fs.core(), vec![1.5]);
        assert_eq!(fs.support(), vec![1.5]);
    }

    #[test]
    fn test_cross_over_points_and_alpha_cut() {
        let fs =
            ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |x| if x == 1.5 { 0.5 } else { 0.0 })
                .unwrap();

        assert_eq!(fs.cross_over_points(), vec![1.5]);
        assert_eq!(fs.alpha_cut(0.4).unwrap(), vec![1.5]);
        assert_eq!(fs.alpha_cut(0.5).unwrap(), vec![1.5]);
        assert!(fs.alpha_cut(0.6).unwrap().is_empty());
    }

    #[test]
    fn test_height_is_the_maximum_sampled_degree() {
        let fs =
            ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |x| if x == 1.5 { 0.5 } else { 0.1 })
                .unwrap();

        assert_eq!(fs.height(), 0.5);
    }

    #[test]
    fn test_equality_compares_at_the_finer_step() {
        let lhs = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.5), |_| 0.2).unwrap();
        let rhs = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.6), |_| 0.2).unwrap();

        assert_eq!(lhs, rhs);
        assert!(lhs.equals(&rhs).unwrap());
    }

    #[test]
    fn test_equality_distinguishes_membership_functions() {
        let lhs = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.5), |_| 0.0).unwrap();
        let rhs = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.4), |_| 1.0).unwrap();

        assert_ne!(lhs, rhs);
    }

    #[test]
    fn test_comparisons_across_unequal_bounds_are_an_error() {
        let lhs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| 0.0).unwrap();
        let rhs = ContinuousFuzzySet::new(domain(1.0, 2.7, 0.5), |_| 0.0).unwrap();

        let err = lhs.equals(&rhs).unwrap_err();
        assert_eq!(err.code, ErrorCode::DomainMismatch);
    }

    #[test]
    fn test_subset_is_pointwise_at_the_finer_step() {
        let smaller = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.5), |_| 0.1).unwrap();
        let larger = ContinuousFuzzySet::new(domain(1.0, 3.0, 0.4), |_| 0.2).unwrap();

        assert!(smaller.subset_of(&larger).unwrap());
        assert!(smaller.proper_subset_of(&larger).unwrap());
        assert!(larger.superset_of(&smaller).unwrap());
        assert!(larger.proper_superset_of(&smaller).unwrap());
        assert!(!larger.subset_of(&smaller).unwrap());
    }

    #[test]
    fn test_t_norm_defaults_to_min() {
        let d = domain(1.0, 2.6, 0.5);
        let lhs = ContinuousFuzzySet::new(d, |_| 0.1).unwrap();
        let rhs = ContinuousFuzzySet::new(d, |_| 0.4).unwrap();

        let result = lhs.t_norm(&rhs).unwrap();
        assert_eq!(result, ContinuousFuzzySet::new(d, |_| 0.1).unwrap());
    }

    #[test]
    fn test_t_norm_with_product() {
        let d = domain(1.0, 2.6, 0.5);
        let lhs = ContinuousFuzzySet::new(d, |_| 0.5).unwrap();
        let rhs = ContinuousFuzzySet::new(d, |_| 0.4).unwrap();

        let result = lhs.t_norm_with(&rhs, |x, y| x * y).unwrap();
        assert_eq!(result, ContinuousFuzzySet::new(d, |_| 0.2).unwrap());
    }

    #[test]
    fn test_s_norm_defaults_to_max() {
        let d = domain(1.0, 2.6, 0.5);
        let lhs = ContinuousFuzzySet::new(d, |_| 0.2).unwrap();
        let rhs = ContinuousFuzzySet::new(d, |_| 0.4).unwrap();

        let result = lhs.s_norm(&rhs).unwrap();
        assert_eq!(result, ContinuousFuzzySet::new(d, |_| 0.4).unwrap());
    }

    #[test]
    fn test_binary_operations_resolve_to_the_finer_step() {
        let coarse = ContinuousFuzzySet::new(domain(0.0, 1.0, 0.5), |_| 0.3).unwrap();
        let fine = ContinuousFuzzySet::new(domain(0.0, 1.0, 0.1), |_| 0.6).unwrap();

        let result = coarse.t_norm(&fine).unwrap();
        assert_eq!(result.domain().step(), 0.1);
        assert_eq!(result.domain().iter().count(), 11);
        assert_eq!(result.height(), 0.3);
    }

    #[test]
    fn test_operations_across_unequal_bounds_are_an_error() {
        let lhs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| 0.0).unwrap();
        let rhs = ContinuousFuzzySet::new(domain(1.0, 2.7, 0.5), |_| 0.0).unwrap();

        let err = lhs.t_norm(&rhs).unwrap_err();
        assert_eq!(err.code, ErrorCode::DomainMismatch);
    }

    #[test]
    fn test_complement_defaults_to_one_minus_mu() {
        let d = domain(1.0, 2.6, 0.5);
        let fs = ContinuousFuzzySet::new(d, |_| 0.4).unwrap();

        let result = fs.complement().unwrap();
        assert_eq!(result, ContinuousFuzzySet::new(d, |_| 0.6).unwrap());
    }

    #[test]
    fn test_complement_is_involutive_within_tolerance() {
        let d = domain(0.0, 1.0, 0.1);
        let fs = ContinuousFuzzySet::new(d, |x| x / 2.0).unwrap();

        let twice = fs.complement().unwrap().complement().unwrap();
        assert!(twice.equals(&fs).unwrap());
    }

    #[test]
    fn test_complement_with_operator_producing_invalid_degrees_is_an_error() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| 0.4).unwrap();

        let err = fs.complement_with(|x| x + 1.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDegree);
    }

    #[test]
    fn test_display_lists_samples_with_two_decimal_degrees() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| 0.4).unwrap();

        assert_eq!(fs.to_string(), "1.0/0.40 + 1.5/0.40 + 2.0/0.40 + 2.5/0.40");
    }

    #[test]
    fn test_debug_names_the_domain() {
        let fs = ContinuousFuzzySet::new(domain(1.0, 2.6, 0.5), |_| 0.4).unwrap();

        assert_eq!(
            format!("{fs:?}"),
            "ContinuousFuzzySet(ContinuousDomain(start=1.0, end=2.6, step=0.5))"
        );
    }

    /// Membership spiking to 1 at a single sample
    fn spike(at: f64) -> impl Fn(f64) -> f64 + Send + Sync + 'static {
        move |x| if x == at { 1.0 } else { 0.0 }
    }
}
