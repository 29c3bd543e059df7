//! Input feed states
//!
//! Hosts publish sensor states as strings with an optional unit tag. Two
//! sentinel states mean "no value right now" and never overwrite the last
//! known reading:
//!
//! - `unknown`: the source has not reported yet
//! - `unavailable`: the source is offline
//!
//! Temperatures tagged `°F` are normalized to Celsius before they reach the
//! calculator. Humidity is always a percentage.

use std::str::FromStr;

use comfort_core::{TemperatureUnit, Validatable};

use crate::error::FeedError;

/// Host state string for a source that has not reported yet
pub const STATE_UNKNOWN: &str = "unknown";

/// Host state string for an offline source
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// One update from a temperature or humidity feed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedState {
    Unknown,
    Unavailable,
    /// Numeric state with its unit tag
    Reading {
        value: f64,
        unit: Option<TemperatureUnit>,
    },
}

impl FeedState {
    /// Untagged numeric reading
    pub const fn value(value: f64) -> Self {
        Self::Reading { value, unit: None }
    }

    /// Temperature reading in Celsius
    pub const fn celsius(value: f64) -> Self {
        Self::Reading { value, unit: Some(TemperatureUnit::Celsius) }
    }

    /// Temperature reading in Fahrenheit
    pub const fn fahrenheit(value: f64) -> Self {
        Self::Reading { value, unit: Some(TemperatureUnit::Fahrenheit) }
    }

    /// Parse a host state and its optional unit tag
    ///
    /// Unit tags other than `°C`/`°F` (such as `%` on humidity feeds) are
    /// accepted only when the caller does not need them; see
    /// [`FeedState::parse_temperature`].
    pub fn parse(state: &str, unit: Option<&str>) -> Result<Self, FeedError> {
        let state = state.trim();
        match state {
            STATE_UNKNOWN => return Ok(Self::Unknown),
            STATE_UNAVAILABLE => return Ok(Self::Unavailable),
            _ => {}
        }

        let value = f64::from_str(state)
            .ok()
            .filter(|v| v.is_valid())
            .ok_or_else(|| FeedError::NotANumber(state.to_string()))?;
        let unit = unit.and_then(|u| u.parse::<TemperatureUnit>().ok());
        Ok(Self::Reading { value, unit })
    }

    /// Parse a temperature state, rejecting unit tags that are not °C/°F
    pub fn parse_temperature(state: &str, unit: Option<&str>) -> Result<Self, FeedError> {
        if let Some(tag) = unit {
            tag.parse::<TemperatureUnit>()
                .map_err(|_| FeedError::UnknownUnit(tag.to_string()))?;
        }
        Self::parse(state, unit)
    }

    /// True for `unknown` and `unavailable`
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Unknown | Self::Unavailable)
    }

    /// Temperature in Celsius; untagged readings are taken as Celsius
    pub fn as_celsius(&self) -> Option<f64> {
        match self {
            Self::Reading { value, unit } => Some(unit.unwrap_or_default().to_celsius(*value)),
            _ => None,
        }
    }

    /// Raw numeric value, ignoring any unit tag
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Reading { value, .. } => Some(*value),
            _ => None,
        }
    }
}
