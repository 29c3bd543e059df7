//! Last known reading
//!
//! Each input is absent until its first valid reading, overwritten by every
//! later valid reading, and never cleared. Presence is tracked with `Option`,
//! so a genuine 0°C or 0% reading is a value like any other.

use comfort_core::{ComfortError, ComfortResult, Reading};

/// Most recent temperature and humidity seen for one device
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LastKnown {
    temperature_c: Option<f64>,
    humidity: Option<f64>,
}

impl LastKnown {
    pub const fn new() -> Self {
        Self { temperature_c: None, humidity: None }
    }

    /// Record a temperature in °C
    pub fn set_temperature(&mut self, temperature_c: f64) {
        self.temperature_c = Some(temperature_c);
    }

    /// Record a relative humidity in %
    pub fn set_humidity(&mut self, humidity: f64) {
        self.humidity = Some(humidity);
    }

    pub const fn temperature(&self) -> Option<f64> {
        self.temperature_c
    }

    pub const fn humidity(&self) -> Option<f64> {
        self.humidity
    }

    /// Both inputs as a reading, or which one is still missing
    pub fn reading(&self) -> ComfortResult<Reading> {
        match (self.temperature_c, self.humidity) {
            (Some(t), Some(rh)) => Ok(Reading::new(t, rh)),
            (None, _) => Err(ComfortError::MissingInput { input: "temperature" }),
            (Some(_), None) => Err(ComfortError::MissingInput { input: "humidity" }),
        }
    }
}
