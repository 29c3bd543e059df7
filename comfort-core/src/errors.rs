//! Error Types for Comfort Calculations
//!
//! ## Design Philosophy
//!
//! The calculator is a set of pure functions, so its errors are deterministic:
//! the same inputs always fail the same way and retrying never helps. Errors
//! are kept small and `Copy` so they can be returned from hot paths on edge
//! devices without allocation.
//!
//! ## Error Categories
//!
//! ### Domain Violations
//! - `Domain`: an input lies outside the region where a formula is defined
//!   (non-finite values, negative humidity, zero humidity for the dew point,
//!   temperatures at or below absolute zero), or the formula produced a
//!   non-finite value. Never silently returned as NaN.
//!
//! ### Missing Inputs
//! - `MissingInput`: temperature or humidity has not been observed yet. The
//!   integration layer raises this instead of calling the calculator with a
//!   placeholder value.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use comfort_core::{compute, ComfortError, MetricKind};
//!
//! match compute(MetricKind::DewPoint, 21.0, 0.0) {
//!     Ok(value) => {
//!         // publish(value);
//!         let _ = value;
//!     }
//!     Err(ComfortError::Domain { .. }) => {
//!         // No value for this cycle, keep running
//!     }
//!     Err(ComfortError::MissingInput { .. }) => {
//!         // Wait for the other feed
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for comfort calculations
pub type ComfortResult<T> = Result<T, ComfortError>;

/// Calculation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortError {
    /// Input outside the valid domain of a formula
    #[error("{metric}: {reason}")]
    Domain {
        /// Metric whose formula rejected the input
        metric: &'static str,
        /// What was wrong with the input or result
        reason: &'static str,
    },

    /// Temperature or humidity not yet known
    #[error("Missing input: {input} has not been observed yet")]
    MissingInput {
        /// Name of the input that is missing
        input: &'static str,
    },
}

impl ComfortError {
    /// True for errors caused by the input values themselves
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// True when computation was suppressed for lack of an input
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ComfortError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Domain { metric, reason } =>
                defmt::write!(fmt, "{}: {}", metric, reason),
            Self::MissingInput { input } =>
                defmt::write!(fmt, "Missing input: {}", input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classification() {
        let domain = ComfortError::Domain { metric: "dew_point", reason: "humidity must be positive" };
        assert!(domain.is_domain());
        assert!(!domain.is_missing_input());

        let missing = ComfortError::MissingInput { input: "humidity" };
        assert!(missing.is_missing_input());
        assert!(!missing.is_domain());
    }

    #[test]
    fn error_is_small() {
        // Two fat pointers at most
        assert!(core::mem::size_of::<ComfortError>() <= 40);
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_messages() {
        let err = ComfortError::Domain { metric: "dew_point", reason: "humidity must be positive" };
        assert_eq!(err.to_string(), "dew_point: humidity must be positive");

        let err = ComfortError::MissingInput { input: "temperature" };
        assert_eq!(err.to_string(), "Missing input: temperature has not been observed yet");
    }
}
