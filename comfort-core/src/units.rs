//! Temperature units and rounding
//!
//! All formulas take Celsius. Heat index and simmer index are defined on the
//! Fahrenheit scale and convert internally; everything else that reaches the
//! calculator must already be normalized with [`TemperatureUnit::to_celsius`].

use core::fmt;
use core::str::FromStr;

use crate::constants::physics::{FAHRENHEIT_OFFSET, METRIC_ROUNDING_SCALE};

/// Convert °C to °F: `C * 9/5 + 32`
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

/// Convert °F to °C: `(F - 32) * 5/9`
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

/// Round to the two decimals every numeric metric reports, half away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    libm::round(value * METRIC_ROUNDING_SCALE) / METRIC_ROUNDING_SCALE
}

/// Unit tag carried by a temperature feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "°C"))]
    Celsius,
    /// Degrees Fahrenheit
    #[cfg_attr(feature = "serde", serde(rename = "°F"))]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit symbol as published by hosts
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Normalize a value in this unit to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unrecognized unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownUnit;

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown temperature unit")
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "°C" | "C" | "℃" => Ok(Self::Celsius),
            "°F" | "F" | "℉" => Ok(Self::Fahrenheit),
            _ => Err(UnknownUnit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert!((fahrenheit_to_celsius(-40.0) + 40.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_two_decimals() {
        assert_eq!(round2(16.7149), 16.71);
        assert_eq!(round2(8.6449), 8.64);
        assert_eq!(round2(-2.6449), -2.64);
        assert_eq!(round2(15.0), 15.0);
    }

    #[test]
    fn unit_tags() {
        assert_eq!("°C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("°F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!(" F ".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("K".parse::<TemperatureUnit>(), Err(UnknownUnit));
    }

    #[test]
    fn fahrenheit_feed_normalized() {
        let celsius = TemperatureUnit::Fahrenheit.to_celsius(77.0);
        assert!((celsius - 25.0).abs() < 1e-12);
        assert_eq!(TemperatureUnit::Celsius.to_celsius(25.0), 25.0);
    }
}
