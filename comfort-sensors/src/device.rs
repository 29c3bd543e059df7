//! Comfort device: two feeds, one reading, many metrics
//!
//! A device reacts to two independent update streams. Every usable update
//! overwrites its side of the last known reading and recomputes every sensor
//! with whatever was last seen on the other side. There is no windowing or
//! pairing between streams, and no staleness detection: a feed that goes
//! quiet leaves the previous values in place indefinitely.
//!
//! ```text
//! temperature feed ──┐
//!                    ├──► LastKnown ──► ComfortSensor × N ──► snapshots
//! humidity feed ─────┘
//! ```

use comfort_core::MetricKind;

use crate::feed::FeedState;
use crate::sensor::{ComfortSensor, SensorSnapshot};
use crate::state::LastKnown;
use crate::template::TemplateRenderer;

/// Result of handing one feed update to a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Placeholder or unusable state; nothing changed
    Ignored,
    /// Sensors were recomputed
    Recomputed {
        /// Sensors that now hold a value
        computed: usize,
        /// Sensors without a value this cycle (missing input or domain error)
        skipped: usize,
    },
}

/// Which feed an update came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Temperature,
    Humidity,
}

/// Template renderer shared across a device's sensors
pub type SharedRenderer = Box<dyn TemplateRenderer + Send + Sync>;

/// All sensors configured for one temperature/humidity pair
pub struct ComfortDevice {
    slug: String,
    temperature_source: String,
    humidity_source: String,
    last: LastKnown,
    sensors: Vec<ComfortSensor>,
    renderer: Option<SharedRenderer>,
}

impl ComfortDevice {
    pub fn new(
        slug: impl Into<String>,
        temperature_source: impl Into<String>,
        humidity_source: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            temperature_source: temperature_source.into(),
            humidity_source: humidity_source.into(),
            last: LastKnown::new(),
            sensors: Vec::new(),
            renderer: None,
        }
    }

    /// Add a sensor
    pub fn push_sensor(&mut self, sensor: ComfortSensor) {
        self.sensors.push(sensor);
    }

    /// Install the host's template renderer
    pub fn set_renderer(&mut self, renderer: SharedRenderer) {
        self.renderer = Some(renderer);
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Entity id of the temperature feed
    pub fn temperature_source(&self) -> &str {
        &self.temperature_source
    }

    /// Entity id of the humidity feed
    pub fn humidity_source(&self) -> &str {
        &self.humidity_source
    }

    pub fn last_known(&self) -> LastKnown {
        self.last
    }

    pub fn sensors(&self) -> &[ComfortSensor] {
        &self.sensors
    }

    /// Sensor publishing `kind`, if configured
    pub fn sensor(&self, kind: MetricKind) -> Option<&ComfortSensor> {
        self.sensors.iter().find(|s| s.kind() == kind)
    }

    /// Snapshots of every sensor
    pub fn snapshots(&self) -> Vec<SensorSnapshot> {
        self.sensors.iter().map(ComfortSensor::snapshot).collect()
    }

    /// Handle a temperature update; Fahrenheit is normalized to Celsius
    pub fn on_temperature(&mut self, state: FeedState) -> UpdateOutcome {
        match state.as_celsius() {
            Some(celsius) => {
                self.last.set_temperature(celsius);
                self.recompute()
            }
            None => {
                log::debug!("{}: ignoring {:?} temperature", self.slug, state);
                UpdateOutcome::Ignored
            }
        }
    }

    /// Handle a humidity update
    pub fn on_humidity(&mut self, state: FeedState) -> UpdateOutcome {
        match state.as_value() {
            Some(humidity) => {
                self.last.set_humidity(humidity);
                self.recompute()
            }
            None => {
                log::debug!("{}: ignoring {:?} humidity", self.slug, state);
                UpdateOutcome::Ignored
            }
        }
    }

    /// Handle a raw host state string for either feed
    ///
    /// Unparseable states are logged and ignored like `unknown`.
    pub fn on_state(&mut self, feed: Feed, state: &str, unit: Option<&str>) -> UpdateOutcome {
        let parsed = match feed {
            Feed::Temperature => FeedState::parse_temperature(state, unit),
            Feed::Humidity => FeedState::parse(state, unit),
        };

        match (feed, parsed) {
            (Feed::Temperature, Ok(state)) => self.on_temperature(state),
            (Feed::Humidity, Ok(state)) => self.on_humidity(state),
            (_, Err(err)) => {
                log::warn!("{}: ignoring {:?} update: {}", self.slug, feed, err);
                UpdateOutcome::Ignored
            }
        }
    }

    /// Recompute every sensor from the last known reading
    pub fn recompute(&mut self) -> UpdateOutcome {
        let renderer = self
            .renderer
            .as_deref()
            .map(|r| r as &dyn TemplateRenderer);
        let mut computed = 0;
        let mut skipped = 0;

        for sensor in &mut self.sensors {
            match sensor.update(self.last, renderer) {
                Ok(_) => computed += 1,
                Err(_) => skipped += 1,
            }
        }

        log::debug!(
            "{}: recomputed {} sensors ({} skipped)",
            self.slug,
            computed,
            skipped
        );
        UpdateOutcome::Recomputed { computed, skipped }
    }
}

impl std::fmt::Debug for ComfortDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComfortDevice")
            .field("slug", &self.slug)
            .field("temperature_source", &self.temperature_source)
            .field("humidity_source", &self.humidity_source)
            .field("last", &self.last)
            .field("sensors", &self.sensors)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
