//! Thermal Comfort Formulas
//!
//! ## Physics Background
//!
//! ### Dew Point
//!
//! The dew point is the temperature at which air becomes saturated with the
//! water vapor it already holds. Saturation vapor pressure is computed with
//! the Goff-Gratch equation referenced to the steam point (1013.246 hPa at
//! 373.15 K), scaled by relative humidity, then inverted with the Magnus form:
//!
//! ```text
//! a0  = 373.15 / T(K)
//! es  = 10^(Goff-Gratch sum)                      hPa
//! vp  = es / 1000 * RH                            kPa·100
//! Td  = 241.88 ln(vp / 0.61078) / (17.558 - ln(vp / 0.61078))
//! ```
//!
//! Physical constraint: dew point ≤ air temperature. The two fits disagree
//! by a few hundredths of a degree at saturation, so at RH = 100% the result
//! may sit marginally above the air temperature.
//!
//! ### Heat Index
//!
//! NOAA's heat index is a regression over Steadman's apparent temperature
//! tables. A simple average is tried first; only when it exceeds 79°F is the
//! full Rothfusz regression used, then two band corrections are applied:
//!
//! ```text
//! RH < 13%  and 80°F ≤ T ≤ 112°F:  HI -= ((13 - RH) / 4) √((17 - |T - 95|) / 17)
//! RH > 85%  and 80°F ≤ T ≤ 87°F:   HI += ((RH - 85) / 10) ((87 - T) / 5)
//! ```
//!
//! The thresholds are part of the published approximation and are reproduced
//! exactly: `> 79` is strict, both correction bands are inclusive.
//!
//! ### Absolute Humidity
//!
//! Mass of water vapor per cubic meter of air:
//!
//! ```text
//! AH = 6.112 e^(17.67 T / (T + 243.5)) × RH × 2.1674 / (273.15 + T)   g/m³
//! ```
//!
//! ### Simmer Index
//!
//! Pepi's summer simmer index targets hot, dry climates. Below 70°F it is the
//! air temperature itself; that floor is part of the definition, not an error.
//!
//! ## Rounding
//!
//! Every numeric metric is rounded to two decimals before it is returned, and
//! the categorical metrics classify the *rounded* value, so a perception label
//! always agrees with the published dew point.
//!
//! ## Usage Examples
//!
//! ```rust
//! use comfort_core::formulas;
//!
//! let dew_point = formulas::dew_point(25.0, 60.0)?;
//! assert!((dew_point - 16.7).abs() < 0.05);
//!
//! // Below 70°F the simmer index is the air temperature
//! assert_eq!(formulas::simmer_index(15.0, 50.0)?, 15.0);
//! # Ok::<(), comfort_core::ComfortError>(())
//! ```

use crate::{
    categories::{Perception, SimmerZone},
    constants::{
        formulas::*,
        physics::KELVIN_OFFSET,
    },
    errors::ComfortResult,
    units::{celsius_to_fahrenheit, fahrenheit_to_celsius, round2},
    validators::{check_result, humidity, temperature},
};

/// Dew point in °C, rounded to 2 decimals
///
/// Fails with a domain error when humidity is not strictly positive or the
/// temperature is not above absolute zero.
pub fn dew_point(temp_c: f64, rh_percent: f64) -> ComfortResult<f64> {
    const METRIC: &str = "dew_point";
    temperature::check_above_absolute_zero(METRIC, temp_c)?;
    humidity::check_positive(METRIC, rh_percent)?;

    let a0 = DEW_POINT_STEAM_POINT_K / (KELVIN_OFFSET + temp_c);
    let mut sum = DEW_POINT_C1 * (a0 - 1.0);
    sum += DEW_POINT_C2 * libm::log10(a0);
    sum += DEW_POINT_C3 * (libm::pow(10.0, DEW_POINT_C4 * (1.0 - 1.0 / a0)) - 1.0);
    sum += DEW_POINT_C5 * (libm::pow(10.0, DEW_POINT_C6 * (a0 - 1.0)) - 1.0);
    sum += libm::log10(DEW_POINT_REFERENCE_PRESSURE_HPA);

    let vapor_pressure = libm::pow(10.0, sum - 3.0) * rh_percent;
    let x = libm::log(vapor_pressure / MAGNUS_BASE_PRESSURE_KPA);
    let td = (MAGNUS_B_C * x) / (MAGNUS_A - x);

    check_result(METRIC, round2(td))
}

/// Heat index in °C, rounded to 2 decimals
pub fn heat_index(temp_c: f64, rh_percent: f64) -> ComfortResult<f64> {
    const METRIC: &str = "heat_index";
    temperature::check_finite(METRIC, temp_c)?;
    humidity::check_non_negative(METRIC, rh_percent)?;

    let f = celsius_to_fahrenheit(temp_c);
    let rh = rh_percent;

    let mut hi = 0.5 * (f + 61.0 + (f - 68.0) * 1.2 + rh * 0.094);

    if hi > HEAT_INDEX_REGRESSION_THRESHOLD_F {
        let [c0, c1, c2, c3, c4, c5, c6, c7, c8] = ROTHFUSZ;
        hi = c0
            + c1 * f
            + c2 * rh
            + c3 * f * rh
            + c4 * f * f
            + c5 * rh * rh
            + c6 * f * f * rh
            + c7 * f * rh * rh
            + c8 * f * f * rh * rh;
    }

    let in_band = |(low, high): (f64, f64)| f >= low && f <= high;

    if rh < HEAT_INDEX_DRY_RH_MAX && in_band(HEAT_INDEX_DRY_BAND_F) {
        hi -= ((HEAT_INDEX_DRY_RH_MAX - rh) * 0.25)
            * libm::sqrt((17.0 - libm::fabs(f - 95.0)) * 0.05882);
    } else if rh > HEAT_INDEX_HUMID_RH_MIN && in_band(HEAT_INDEX_HUMID_BAND_F) {
        hi += ((rh - HEAT_INDEX_HUMID_RH_MIN) * 0.1) * ((87.0 - f) * 0.2);
    }

    check_result(METRIC, round2(fahrenheit_to_celsius(hi)))
}

/// Thermal perception of the rounded dew point
pub fn perception(temp_c: f64, rh_percent: f64) -> ComfortResult<Perception> {
    dew_point(temp_c, rh_percent).map(Perception::from_dew_point)
}

/// Absolute humidity in g/m³, rounded to 2 decimals
pub fn absolute_humidity(temp_c: f64, rh_percent: f64) -> ComfortResult<f64> {
    const METRIC: &str = "absolute_humidity";
    temperature::check_above_absolute_zero(METRIC, temp_c)?;
    humidity::check_non_negative(METRIC, rh_percent)?;

    let abs_temperature = temp_c + KELVIN_OFFSET;
    let mut ah = ABS_HUMIDITY_BASE_PRESSURE_HPA;
    ah *= libm::exp((ABS_HUMIDITY_MAGNUS_A * temp_c) / (ABS_HUMIDITY_MAGNUS_B_C + temp_c));
    ah *= rh_percent;
    ah *= ABS_HUMIDITY_SCALE;
    ah /= abs_temperature;

    check_result(METRIC, round2(ah))
}

/// Summer simmer index in °C, rounded to 2 decimals
pub fn simmer_index(temp_c: f64, rh_percent: f64) -> ComfortResult<f64> {
    const METRIC: &str = "simmer_index";
    temperature::check_finite(METRIC, temp_c)?;
    humidity::check_non_negative(METRIC, rh_percent)?;

    let f = celsius_to_fahrenheit(temp_c);
    let si = if f < SIMMER_INDEX_MIN_F {
        f
    } else {
        SIMMER_SLOPE
            * (f - (SIMMER_RH_INTERCEPT - SIMMER_RH_SLOPE * rh_percent) * (f - SIMMER_REFERENCE_F))
            - SIMMER_OFFSET_F
    };

    check_result(METRIC, round2(fahrenheit_to_celsius(si)))
}

/// Simmer zone of the rounded simmer index
pub fn simmer_zone(temp_c: f64, rh_percent: f64) -> ComfortResult<SimmerZone> {
    simmer_index(temp_c, rh_percent).map(SimmerZone::from_simmer_index)
}
