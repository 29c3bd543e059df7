//! Platform setup
//!
//! Turns a [`PlatformConfig`] into devices and sensors. Sensors are created in
//! [`MetricKind`](comfort_core::MetricKind) order regardless of the order in
//! the config, and entity ids are made unique against every id already in use.

use std::collections::HashSet;

use crate::config::PlatformConfig;
use crate::device::ComfortDevice;
use crate::error::SetupError;
use crate::sensor::ComfortSensor;

/// Domain prefix of every generated entity id
pub const ENTITY_DOMAIN: &str = "sensor";

/// Entity ids already taken on the host
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    taken: HashSet<String>,
}

impl EntityIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an id as taken by something outside this platform
    pub fn reserve(&mut self, entity_id: impl Into<String>) {
        self.taken.insert(entity_id.into());
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.taken.contains(entity_id)
    }

    /// `sensor.<object_id>`, suffixed `_2`, `_3`, … until unused
    pub fn generate(&mut self, object_id: &str) -> String {
        let base = format!("{ENTITY_DOMAIN}.{object_id}");
        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}_{n}");
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Build every configured device
///
/// Devices that select no known metric are dropped. Fails when no sensor at
/// all was created.
pub fn setup_platform(
    config: &PlatformConfig,
    entity_ids: &mut EntityIds,
) -> Result<Vec<ComfortDevice>, SetupError> {
    let mut devices = Vec::new();

    for (slug, device_config) in &config.sensors {
        let friendly_name = device_config.display_name(slug);
        let mut device = ComfortDevice::new(
            slug.clone(),
            device_config.temperature_sensor.clone(),
            device_config.humidity_sensor.clone(),
        );

        for kind in device_config.metric_kinds() {
            let entity_id = entity_ids.generate(&format!("{}_{}", slug, kind.key()));
            let sensor = ComfortSensor::new(entity_id, friendly_name, kind).with_templates(
                device_config.icon_template.clone(),
                device_config.entity_picture_template.clone(),
            );
            device.push_sensor(sensor);
        }

        if device.sensors().is_empty() {
            log::warn!("Device {} selects no known sensor types", slug);
            continue;
        }

        log::info!(
            "Device {}: {} sensors from {} and {}",
            slug,
            device.sensors().len(),
            device.temperature_source(),
            device.humidity_source()
        );
        devices.push(device);
    }

    if devices.is_empty() {
        log::error!("No sensors added");
        return Err(SetupError::NoSensors);
    }

    Ok(devices)
}
