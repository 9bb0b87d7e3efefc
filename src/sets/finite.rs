//! Fuzzy sets over finite domains
//!
//! A finite fuzzy set maps each element of an enumerable universe to a
//! membership degree. The backing maps are `indexmap` types: iteration
//! follows insertion order and stays stable for the lifetime of the
//! instance, while equality is order-independent.

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{FuzzyError, FuzzyResult};
use crate::sets::{Domain, FuzzySet};

/// The domain of a finite fuzzy set: an unordered collection of elements
/// with a fixed iteration order
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct FiniteDomain<T>
where
    T: Clone + Eq + Hash,
{
    items: IndexSet<T>,
}

impl<T> FiniteDomain<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a domain from any collection of elements; duplicates are
    /// folded into the first occurrence
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Number of distinct elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Domain for FiniteDomain<T>
where
    T: Clone + Eq + Hash,
{
    type Element = T;

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.items.iter().cloned())
    }
}

impl<T> fmt::Debug for FiniteDomain<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FiniteDomain({:?})", self.items)
    }
}

impl<T> fmt::Display for FiniteDomain<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.items.iter().map(|item| item.to_string()).collect();
        write!(f, "{{{}}}", items.join(", "))
    }
}

/// A fuzzy set over a finite domain
///
/// Holds a total mapping from each domain element to a degree in `[0, 1]`.
/// The membership function is total over all possible inputs: elements
/// outside the key set have degree 0.
#[derive(Clone, PartialEq, Serialize)]
pub struct FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash,
{
    degrees: IndexMap<T, f64>,
    domain: FiniteDomain<T>,
}

impl<T> FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Create a set from `(element, degree)` pairs; the domain is derived
    /// from the elements in insertion order
    ///
    /// Returns an `InvalidDegree` error naming the offending element when
    /// a degree lies outside `[0, 1]`.
    pub fn new(degrees: impl IntoIterator<Item = (T, f64)>) -> FuzzyResult<Self> {
        let degrees: IndexMap<T, f64> = degrees.into_iter().collect();

        for (element, &degree) in &degrees {
            if !(0.0..=1.0).contains(&degree) {
                return Err(FuzzyError::invalid_degree(element, degree));
            }
        }

        let domain = FiniteDomain::new(degrees.keys().cloned());

        Ok(Self { degrees, domain })
    }
}

impl<T> FuzzySet for FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    type Element = T;
    type Dom = FiniteDomain<T>;

    fn domain(&self) -> &FiniteDomain<T> {
        &self.domain
    }

    fn mu(&self, x: &T) -> f64 {
        self.degrees.get(x).copied().unwrap_or(0.0)
    }

    fn merged_domain(&self, other: &Self) -> FuzzyResult<FiniteDomain<T>> {
        if self.domain == other.domain {
            Ok(self.domain.clone())
        } else {
            Err(FuzzyError::domain_mismatch(&self.domain, &other.domain))
        }
    }

    fn combine<F>(&self, other: &Self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        let domain = self.merged_domain(other)?;

        Self::new(domain.iter().map(|x| {
            let degree = op(self.mu(&x), other.mu(&x));
            (x, degree)
        }))
    }

    fn map_degrees<F>(&self, op: F) -> FuzzyResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(self.pairs().map(|(x, degree)| (x, op(degree))))
    }
}

impl<'a, T> IntoIterator for &'a FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    type Item = (T, f64);
    type IntoIter = Box<dyn Iterator<Item = (T, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

impl<T> fmt::Debug for FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FiniteFuzzySet({:?})", self.domain)
    }
}

impl<T> fmt::Display for FiniteFuzzySet<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Zadeh-style listing: `elem/degree + elem/degree + ...` with
    /// two-decimal degrees, in domain iteration order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .pairs()
            .map(|(x, degree)| format!("{x}/{degree:.2}"))
            .collect();
        write!(f, "{}", parts.join(" + "))
    }
}

// ============================================================================
// Tests
// ============================================================================
