//! Structured Error Handling for fuzzysets
//!
//! Provides a unified error type with:
//! - Error codes for programmatic handling
//! - Structured error responses (JSON-friendly)
//! - The offending values preserved in an error context
//!
//! # Error Categories
//!
//! - Construction errors (1xxx) - invalid TFN bounds, invalid domain
//!   ranges, membership degrees outside `[0, 1]`
//! - Query errors (2xxx) - alpha levels outside `[0, 1]`
//! - Compatibility errors (3xxx) - binary operations across unequal domains
//!
//! Every error is raised eagerly at the point of violation. There is no
//! clamping and no best-effort fallback: an invalid degree is rejected, not
//! coerced into `[0, 1]`.
//!
//! # Example
//!
//! ```rust
//! use fuzzysets::{ErrorCode, FuzzyResult, TriangularFuzzyNumber};
//!
//! fn widen(tfn: &TriangularFuzzyNumber) -> FuzzyResult<TriangularFuzzyNumber> {
//!     TriangularFuzzyNumber::new(tfn.peak(), tfn.left() - 1.0, tfn.right() + 1.0)
//! }
//!
//! let err = TriangularFuzzyNumber::new(0.0, 2.0, 1.0).unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidBounds);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Error Codes
// ============================================================================

/// Unique error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Construction errors (1xxx)
    /// TFN bounds out of order (`l > n` or `n > r`)
    InvalidBounds = 1000,
    /// Continuous domain with `start > end` or `step <= 0`
    InvalidRange = 1001,
    /// Membership degree outside `[0, 1]`
    InvalidDegree = 1002,

    // Query errors (2xxx)
    /// Alpha level outside `[0, 1]`
    AlphaOutOfRange = 2000,

    // Compatibility errors (3xxx)
    /// Binary set operation or comparison across unequal domains
    DomainMismatch = 3000,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a short description of the error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBounds => "Invalid fuzzy number bounds",
            ErrorCode::InvalidRange => "Invalid domain range",
            ErrorCode::InvalidDegree => "Invalid membership degree",
            ErrorCode::AlphaOutOfRange => "Alpha level out of range",
            ErrorCode::DomainMismatch => "Domain mismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// The main error type for fuzzysets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyError {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// The offending values, keyed by parameter name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, String>,
}

impl FuzzyError {
    /// Create a new error with a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: HashMap::new(),
        }
    }

    // ========================================================================
    // Factory methods for common error types
    // ========================================================================

    /// Create an invalid-bounds error for a TFN triple
    pub fn invalid_bounds(left: f64, peak: f64, right: f64) -> Self {
        Self::new(
            ErrorCode::InvalidBounds,
            format!("TFN bounds must satisfy l <= n <= r, got l={left}, n={peak}, r={right}"),
        )
        .with_context("left", left.to_string())
        .with_context("peak", peak.to_string())
        .with_context("right", right.to_string())
    }

    /// Create an invalid-range error for a continuous domain
    pub fn invalid_range(start: f64, end: f64, step: f64) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!(
                "domain requires start <= end and step > 0, got start={start}, end={end}, step={step}"
            ),
        )
        .with_context("start", start.to_string())
        .with_context("end", end.to_string())
        .with_context("step", step.to_string())
    }

    /// Create an invalid-degree error naming the element it was computed for
    pub fn invalid_degree(element: impl fmt::Display, degree: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDegree,
            format!("membership degree must lie in [0, 1], got {degree} at element {element}"),
        )
        .with_context("element", element.to_string())
        .with_context("degree", degree.to_string())
    }

    /// Create an alpha-out-of-range error
    pub fn alpha_out_of_range(alpha: f64) -> Self {
        Self::new(
            ErrorCode::AlphaOutOfRange,
            format!("alpha must lie in [0, 1], got {alpha}"),
        )
        .with_context("alpha", alpha.to_string())
    }

    /// Create a domain-mismatch error
    pub fn domain_mismatch(lhs: impl fmt::Display, rhs: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::DomainMismatch,
            format!("operands must share an equal domain, got {lhs} and {rhs}"),
        )
        .with_context("lhs", lhs.to_string())
        .with_context("rhs", rhs.to_string())
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Add a context field to the error
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"message":"{}"}}"#, self.code.code(), self.message)
        })
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

impl fmt::Display for FuzzyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for FuzzyError {}

// ============================================================================
// Result type alias
// ============================================================================

/// A Result type using FuzzyError
pub type FuzzyResult<T> = Result<T, FuzzyError>;

// ============================================================================
// Validation helpers
// ============================================================================

/// Check that an alpha level lies in `[0, 1]`.
pub(crate) fn validate_alpha(alpha: f64) -> FuzzyResult<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(FuzzyError::alpha_out_of_range(alpha))
    }
}

// ============================================================================
// Tests
// ============================================================================
