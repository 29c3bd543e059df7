//! Reactive Thermal Comfort Sensors
//!
//! ## Overview
//!
//! This crate wires the stateless calculators of `comfort-core` into sensors a
//! home-automation host can publish. A configured device pairs one temperature
//! feed with one humidity feed and exposes any subset of six metrics:
//!
//! | Key                | Name              | Unit  | Kind        |
//! |--------------------|-------------------|-------|-------------|
//! | `absolutehumidity` | Absolute Humidity | g/m³  | numeric     |
//! | `heatindex`        | Heat Index        | °C    | numeric     |
//! | `dewpoint`         | Dew Point         | °C    | numeric     |
//! | `perception`       | Thermal Perception| -     | categorical |
//! | `simmerindex`      | Simmer Index      | °C    | numeric     |
//! | `simmerzone`       | Simmer Zone       | -     | categorical |
//!
//! ## Update Model
//!
//! ```text
//! config ──► setup_platform ──► ComfortDevice
//!                                   │
//!       temperature / humidity ─────┤ on_temperature / on_humidity
//!                                   ▼
//!                               LastKnown ──► ComfortSensor::update ──► snapshot
//! ```
//!
//! - Each feed overwrites its side of the last known reading
//! - `unknown` and `unavailable` states change nothing
//! - Sensors stay empty until both feeds have reported once
//! - A reading outside a metric's domain empties that sensor for one cycle
//!
//! ## Example Usage
//!
//! ```rust
//! use comfort_sensors::{setup_platform, EntityIds, FeedState, PlatformConfig};
//!
//! let config = PlatformConfig::from_json(r#"{
//!     "sensors": {
//!         "den": {
//!             "temperature_sensor": "sensor.den_temperature",
//!             "humidity_sensor": "sensor.den_humidity",
//!             "sensor_types": ["dewpoint", "perception"]
//!         }
//!     }
//! }"#)?;
//!
//! let mut devices = setup_platform(&config, &mut EntityIds::new())?;
//! let den = &mut devices[0];
//! den.on_temperature(FeedState::celsius(25.0));
//! den.on_humidity(FeedState::value(60.0));
//!
//! for snapshot in den.snapshots() {
//!     println!("{}: {:?}", snapshot.name, snapshot.state);
//! }
//! # Ok::<(), comfort_sensors::SensorError>(())
//! ```
//!
//! ## Features
//!
//! - `tokio` (default): [`DeviceListener`] driving a device from async
//!   channels and publishing through [`AsyncPublisher`]

#![deny(unsafe_code)]

pub mod config;
pub mod device;
pub mod error;
pub mod feed;
pub mod platform;
pub mod sensor;
pub mod state;
pub mod template;

#[cfg(feature = "tokio")]
pub mod listener;

pub use config::{DeviceConfig, PlatformConfig};
pub use device::{ComfortDevice, Feed, SharedRenderer, UpdateOutcome};
pub use error::{ConfigError, FeedError, SensorError, SetupError};
pub use feed::{FeedState, STATE_UNAVAILABLE, STATE_UNKNOWN};
pub use platform::{setup_platform, EntityIds};
pub use sensor::{ComfortSensor, SensorAttributes, SensorSnapshot};
pub use state::LastKnown;
pub use template::{RenderError, TemplateRenderer, Verbatim};

#[cfg(feature = "tokio")]
pub use listener::{AsyncPublisher, DeviceListener, ListenerStats};
