//! Platform configuration
//!
//! One logical device pairs a temperature feed with a humidity feed and picks
//! the metrics to publish for it:
//!
//! ```json
//! {
//!   "sensors": {
//!     "living_room": {
//!       "temperature_sensor": "sensor.living_room_temperature",
//!       "humidity_sensor": "sensor.living_room_humidity",
//!       "friendly_name": "Living Room",
//!       "sensor_types": ["dewpoint", "heatindex"],
//!       "icon_template": "mdi:water"
//!     }
//!   }
//! }
//! ```
//!
//! `sensor_types` may be a list or a single string and defaults to every
//! metric. Unknown metric names are logged and skipped so an old config keeps
//! loading after a metric is renamed.

use std::collections::BTreeMap;

use comfort_core::MetricKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level platform configuration, keyed by device slug
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub sensors: BTreeMap<String, DeviceConfig>,
}

/// Configuration of one logical device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Entity id of the temperature feed
    pub temperature_sensor: String,

    /// Entity id of the humidity feed
    pub humidity_sensor: String,

    /// Metrics to publish; a single string is accepted as a one-item list
    #[serde(default = "default_sensor_types", deserialize_with = "one_or_many")]
    pub sensor_types: Vec<String>,

    /// Template rendered into the sensor icon after each update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_template: Option<String>,

    /// Template rendered into the sensor picture after each update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_picture_template: Option<String>,

    /// Display name; the device slug when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

fn default_sensor_types() -> Vec<String> {
    MetricKind::ALL.iter().map(|kind| kind.key().to_string()).collect()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

impl DeviceConfig {
    /// Device with both feeds and every metric selected
    pub fn new(temperature_sensor: impl Into<String>, humidity_sensor: impl Into<String>) -> Self {
        Self {
            temperature_sensor: temperature_sensor.into(),
            humidity_sensor: humidity_sensor.into(),
            sensor_types: default_sensor_types(),
            icon_template: None,
            entity_picture_template: None,
            friendly_name: None,
        }
    }

    /// Restrict the published metrics
    pub fn with_metrics(mut self, kinds: &[MetricKind]) -> Self {
        self.sensor_types = kinds.iter().map(|kind| kind.key().to_string()).collect();
        self
    }

    /// Set the display name
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Selected metrics in publication order, unknown names dropped
    pub fn metric_kinds(&self) -> Vec<MetricKind> {
        for name in &self.sensor_types {
            if name.parse::<MetricKind>().is_err() {
                log::warn!("Ignoring unknown sensor type '{}'", name);
            }
        }

        MetricKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.sensor_types.iter().any(|name| name == kind.key()))
            .collect()
    }

    /// Display name, falling back to the device slug
    pub fn display_name<'a>(&'a self, device: &'a str) -> &'a str {
        self.friendly_name.as_deref().unwrap_or(device)
    }
}

impl PlatformConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Add a device
    pub fn with_device(mut self, slug: impl Into<String>, device: DeviceConfig) -> Self {
        self.sensors.insert(slug.into(), device);
        self
    }

    /// Check device slugs and feed entity ids
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (slug, device) in &self.sensors {
            if !is_slug(slug) {
                return Err(ConfigError::InvalidSlug(slug.clone()));
            }
            check_entity_id("temperature_sensor", &device.temperature_sensor)?;
            check_entity_id("humidity_sensor", &device.humidity_sensor)?;
        }
        Ok(())
    }
}

/// Lowercase ASCII letters, digits and underscores, non-empty
pub(crate) fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

fn check_entity_id(field: &'static str, entity_id: &str) -> Result<(), ConfigError> {
    let valid = match entity_id.split_once('.') {
        Some((domain, object_id)) => is_slug(domain) && is_slug(object_id),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEntityId {
            field,
            entity_id: entity_id.to_string(),
        })
    }
}
