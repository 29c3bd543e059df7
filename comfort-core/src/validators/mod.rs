//! Input Domain Validators
//!
//! ## Overview
//!
//! The comfort formulas are empirical fits. They are defined for typical
//! atmospheric conditions and degrade silently outside them, so no plausibility
//! range is enforced here. What *is* enforced is the mathematical domain:
//! anything that would make a formula take the log of zero, divide by zero
//! absolute temperature, or propagate NaN is rejected with
//! [`ComfortError::Domain`](crate::ComfortError::Domain).
//!
//! ## Checks
//!
//! | Check                       | Used by                                |
//! |-----------------------------|----------------------------------------|
//! | finite temperature          | every metric                           |
//! | finite, non-negative RH     | every metric                           |
//! | strictly positive RH        | dew point, perception                  |
//! | above absolute zero         | dew point, perception, absolute humidity |
//! | finite result               | every numeric metric                   |
//!
//! Humidity above 100% passes: supersaturated readings happen in fog and
//! sensor drift can push past 100%.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfort_core::validators::{humidity, temperature};
//!
//! assert!(temperature::check_finite("heat_index", 31.0).is_ok());
//! assert!(humidity::check_positive("dew_point", 0.0).is_err());
//! ```

pub mod temperature;
pub mod humidity;

use crate::errors::{ComfortError, ComfortResult};
use crate::traits::Validatable;

/// Reject non-finite formula output
pub fn check_result(metric: &'static str, value: f64) -> ComfortResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(ComfortError::Domain {
            metric,
            reason: "result is not a finite number",
        })
    }
}
