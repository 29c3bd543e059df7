//! Metric kinds and dispatch
//!
//! [`MetricKind`] is the closed set of derived metrics. Each kind is bound to
//! exactly one formula in [`compute`], so adding a metric without wiring its
//! formula fails to compile.

use core::fmt;
use core::str::FromStr;

use crate::{
    categories::{Perception, SimmerZone},
    errors::ComfortResult,
    formulas,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Derived thermal comfort metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MetricKind {
    /// Water vapour density in g/m³
    AbsoluteHumidity,
    /// Apparent temperature in °C
    HeatIndex,
    /// Condensation temperature in °C
    DewPoint,
    /// Comfort label of the dew point
    Perception,
    /// Summer simmer index in °C
    SimmerIndex,
    /// Comfort label of the simmer index
    SimmerZone,
}

impl MetricKind {
    /// Every metric, in publication order
    pub const ALL: [MetricKind; 6] = [
        Self::AbsoluteHumidity,
        Self::HeatIndex,
        Self::DewPoint,
        Self::Perception,
        Self::SimmerIndex,
        Self::SimmerZone,
    ];

    /// Configuration key, also used as entity id suffix
    pub const fn key(&self) -> &'static str {
        match self {
            Self::AbsoluteHumidity => "absolutehumidity",
            Self::HeatIndex => "heatindex",
            Self::DewPoint => "dewpoint",
            Self::Perception => "perception",
            Self::SimmerIndex => "simmerindex",
            Self::SimmerZone => "simmerzone",
        }
    }

    /// Human-readable name appended to a device's friendly name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AbsoluteHumidity => "Absolute Humidity",
            Self::HeatIndex => "Heat Index",
            Self::DewPoint => "Dew Point",
            Self::Perception => "Thermal Perception",
            Self::SimmerIndex => "Simmer Index",
            Self::SimmerZone => "Simmer Zone",
        }
    }

    /// Unit of measurement, `None` for categorical metrics
    pub const fn unit(&self) -> Option<&'static str> {
        match self {
            Self::AbsoluteHumidity => Some("g/m³"),
            Self::HeatIndex | Self::DewPoint | Self::SimmerIndex => Some("°C"),
            Self::Perception | Self::SimmerZone => None,
        }
    }

    /// Device class hint for hosts
    pub const fn device_class(&self) -> Option<&'static str> {
        match self {
            Self::AbsoluteHumidity => Some("humidity"),
            Self::HeatIndex | Self::DewPoint | Self::SimmerIndex => Some("temperature"),
            Self::Perception | Self::SimmerZone => None,
        }
    }

    /// True for metrics that publish a label instead of a number
    pub const fn is_categorical(&self) -> bool {
        matches!(self, Self::Perception | Self::SimmerZone)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unrecognized metric key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMetric;

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown metric kind")
    }
}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or(UnknownMetric)
    }
}

/// Computed value of one metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricValue {
    /// Numeric metric rounded to 2 decimals, in °C or g/m³
    Numeric(f64),
    /// Dew point category
    Perception(Perception),
    /// Simmer index category
    SimmerZone(SimmerZone),
}

impl MetricValue {
    /// Numeric value, if this is a numeric metric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Perception(p) => p.fmt(f),
            Self::SimmerZone(z) => z.fmt(f),
        }
    }
}

/// Temperature and relative humidity observed together
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Air temperature in °C
    pub temperature_c: f64,
    /// Relative humidity in %
    pub relative_humidity: f64,
}

impl Reading {
    /// Pair a temperature in °C with a relative humidity in %
    pub const fn new(temperature_c: f64, relative_humidity: f64) -> Self {
        Self { temperature_c, relative_humidity }
    }

    /// Compute one metric from this reading
    pub fn compute(self, kind: MetricKind) -> ComfortResult<MetricValue> {
        compute(kind, self.temperature_c, self.relative_humidity)
    }
}

/// Compute `kind` from a temperature in °C and relative humidity in %
pub fn compute(kind: MetricKind, temp_c: f64, rh_percent: f64) -> ComfortResult<MetricValue> {
    let value = match kind {
        MetricKind::AbsoluteHumidity => {
            formulas::absolute_humidity(temp_c, rh_percent).map(MetricValue::Numeric)
        }
        MetricKind::HeatIndex => formulas::heat_index(temp_c, rh_percent).map(MetricValue::Numeric),
        MetricKind::DewPoint => formulas::dew_point(temp_c, rh_percent).map(MetricValue::Numeric),
        MetricKind::Perception => {
            formulas::perception(temp_c, rh_percent).map(MetricValue::Perception)
        }
        MetricKind::SimmerIndex => {
            formulas::simmer_index(temp_c, rh_percent).map(MetricValue::Numeric)
        }
        MetricKind::SimmerZone => {
            formulas::simmer_zone(temp_c, rh_percent).map(MetricValue::SimmerZone)
        }
    };

    if let Err(_err) = &value {
        log_debug!("{} undefined for T={} RH={}: {}", kind, temp_c, rh_percent, _err);
    }

    value
}
