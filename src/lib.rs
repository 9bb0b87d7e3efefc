//! fuzzysets - triangular fuzzy numbers and fuzzy sets
//!
//! A small algebra from fuzzy set theory over standard binary floats:
//!
//! - [`TriangularFuzzyNumber`] - a `(left, peak, right)` triple with
//!   alpha-cut based arithmetic, membership evaluation and a containment
//!   partial order
//! - [`FiniteDomain`] / [`FiniteFuzzySet`] - fuzzy sets over enumerable
//!   universes with explicit degree mappings
//! - [`ContinuousDomain`] / [`ContinuousFuzzySet`] - fuzzy sets over
//!   sampled real intervals with opaque membership functions
//! - [`ops`] - pointwise t-norm/s-norm/complement operators as free
//!   functions interchangeable with the set methods
//!
//! Everything is immutable once constructed: operations produce fresh
//! values, iterators restart on every call, and concurrent readers need no
//! synchronization.
//!
//! # Example
//!
//! ```rust
//! use fuzzysets::{FiniteFuzzySet, FuzzySet, TriangularFuzzyNumber};
//!
//! let n = TriangularFuzzyNumber::from_tuple((1.0, 2.0, 4.0))?;
//! let m = TriangularFuzzyNumber::from_tuple((2.0, 4.0, 6.0))?;
//! assert_eq!(n + m, TriangularFuzzyNumber::from_tuple((3.0, 6.0, 10.0))?);
//!
//! let warm = FiniteFuzzySet::new([("morning", 0.2), ("noon", 1.0)])?;
//! let bright = FiniteFuzzySet::new([("morning", 0.6), ("noon", 0.9)])?;
//! let both = warm.t_norm(&bright)?;
//! assert_eq!(both.mu(&"noon"), 0.9);
//! # Ok::<(), fuzzysets::FuzzyError>(())
//! ```

pub mod error;
pub mod ops;
pub mod sets;
pub mod tfn;

// Re-export the public surface
pub use crate::error::{ErrorCode, FuzzyError, FuzzyResult};
pub use crate::ops::{
    alpha_cut, complement, complement_with, s_norm, s_norm_with, t_norm, t_norm_with, SNorm, TNorm,
};
pub use crate::sets::continuous::{ContinuousDomain, ContinuousFuzzySet};
pub use crate::sets::finite::{FiniteDomain, FiniteFuzzySet};
pub use crate::sets::{Domain, FuzzySet};
pub use crate::tfn::{AlphaCut, TriangularFuzzyNumber};
