//! Relative humidity input checks

use crate::{
    errors::{ComfortError, ComfortResult},
    traits::Validatable,
};

/// Humidity must be finite and not negative
pub fn check_non_negative(metric: &'static str, rh_percent: f64) -> ComfortResult<()> {
    if !rh_percent.is_valid() {
        return Err(ComfortError::Domain {
            metric,
            reason: "humidity is not a finite number",
        });
    }
    if rh_percent < 0.0 {
        return Err(ComfortError::Domain {
            metric,
            reason: "humidity is negative",
        });
    }
    Ok(())
}

/// Humidity must be finite and strictly positive
///
/// The dew point takes the log of vapor pressure, which is zero for dry air.
pub fn check_positive(metric: &'static str, rh_percent: f64) -> ComfortResult<()> {
    check_non_negative(metric, rh_percent)?;
    if rh_percent == 0.0 {
        return Err(ComfortError::Domain {
            metric,
            reason: "humidity must be positive",
        });
    }
    Ok(())
}
