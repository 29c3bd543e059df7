//! Temperature input checks

use crate::{
    constants::physics::ABSOLUTE_ZERO_CELSIUS,
    errors::{ComfortError, ComfortResult},
    traits::Validatable,
};

/// Temperature must be a finite number
pub fn check_finite(metric: &'static str, temp_c: f64) -> ComfortResult<()> {
    if temp_c.is_valid() {
        Ok(())
    } else {
        Err(ComfortError::Domain {
            metric,
            reason: "temperature is not a finite number",
        })
    }
}

/// Temperature must be finite and strictly above absolute zero
///
/// Needed wherever a formula divides by absolute temperature.
pub fn check_above_absolute_zero(metric: &'static str, temp_c: f64) -> ComfortResult<()> {
    check_finite(metric, temp_c)?;
    if temp_c <= ABSOLUTE_ZERO_CELSIUS {
        return Err(ComfortError::Domain {
            metric,
            reason: "temperature at or below absolute zero",
        });
    }
    Ok(())
}
