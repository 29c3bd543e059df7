//! Physical Constants
//!
//! Fundamental constants and unit conversion factors shared by all formulas.

/// Absolute zero in Celsius (°C).
///
/// Formulas that divide by absolute temperature are undefined at or below
/// this value.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Offset between the Celsius and Kelvin scales (K).
pub const KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water on the Fahrenheit scale (°F).
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Decimal places kept on every numeric metric.
pub const METRIC_DECIMALS: i32 = 2;

/// Scale factor matching [`METRIC_DECIMALS`].
pub const METRIC_ROUNDING_SCALE: f64 = 100.0;
