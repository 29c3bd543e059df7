//! Comfort sensor entity
//!
//! One sensor publishes one metric of one device. It never caches inputs of
//! its own: the owning [`ComfortDevice`](crate::device::ComfortDevice) passes
//! its last known reading by value on every update, and the sensor hands it to
//! the stateless calculator.

use comfort_core::{ComfortError, ComfortResult, MetricKind, MetricValue};
use serde::Serialize;

use crate::state::LastKnown;
use crate::template::{render_into, TemplateRenderer};

/// Raw inputs published next to the computed value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SensorAttributes {
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Relative humidity in %
    pub humidity: Option<f64>,
}

impl From<LastKnown> for SensorAttributes {
    fn from(last: LastKnown) -> Self {
        Self {
            temperature: last.temperature(),
            humidity: last.humidity(),
        }
    }
}

/// Everything a publisher needs to expose one sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSnapshot {
    pub entity_id: String,
    pub name: String,
    pub state: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<&'static str>,
    pub attributes: SensorAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_picture: Option<String>,
}

/// One published metric
#[derive(Debug, Clone)]
pub struct ComfortSensor {
    entity_id: String,
    name: String,
    kind: MetricKind,
    state: Option<MetricValue>,
    attributes: SensorAttributes,
    icon_template: Option<String>,
    entity_picture_template: Option<String>,
    icon: Option<String>,
    entity_picture: Option<String>,
}

impl ComfortSensor {
    /// Sensor named `"<friendly_name> <metric display name>"`
    pub fn new(entity_id: impl Into<String>, friendly_name: &str, kind: MetricKind) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: format!("{} {}", friendly_name, kind.display_name()),
            kind,
            state: None,
            attributes: SensorAttributes::default(),
            icon_template: None,
            entity_picture_template: None,
            icon: None,
            entity_picture: None,
        }
    }

    /// Attach icon and picture templates
    pub fn with_templates(
        mut self,
        icon_template: Option<String>,
        entity_picture_template: Option<String>,
    ) -> Self {
        self.icon_template = icon_template;
        self.entity_picture_template = entity_picture_template;
        self
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn unit_of_measurement(&self) -> Option<&'static str> {
        self.kind.unit()
    }

    pub fn device_class(&self) -> Option<&'static str> {
        self.kind.device_class()
    }

    /// Current value, `None` until both inputs are known
    pub fn state(&self) -> Option<MetricValue> {
        self.state
    }

    pub fn attributes(&self) -> SensorAttributes {
        self.attributes
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn entity_picture(&self) -> Option<&str> {
        self.entity_picture.as_deref()
    }

    /// Recompute from the device's last known reading
    ///
    /// Missing inputs leave the state untouched. A domain error clears the
    /// state for this cycle. Templates are rendered afterwards either way.
    pub fn update(
        &mut self,
        last: LastKnown,
        renderer: Option<&dyn TemplateRenderer>,
    ) -> ComfortResult<MetricValue> {
        self.attributes = last.into();

        let result = last.reading().and_then(|reading| reading.compute(self.kind));
        match &result {
            Ok(value) => {
                log::debug!("{}: {}", self.entity_id, value);
                self.state = Some(*value);
            }
            Err(ComfortError::MissingInput { input }) => {
                log::debug!("{}: waiting for {}", self.entity_id, input);
            }
            Err(err) => {
                log::warn!("{}: no value for this update: {}", self.entity_id, err);
                self.state = None;
            }
        }

        if let Some(renderer) = renderer {
            render_into(
                renderer,
                self.icon_template.as_deref(),
                &mut self.icon,
                "icon",
                &self.name,
                &self.attributes,
            );
            render_into(
                renderer,
                self.entity_picture_template.as_deref(),
                &mut self.entity_picture,
                "entity picture",
                &self.name,
                &self.attributes,
            );
        }

        result
    }

    /// Publishable view of the sensor
    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            entity_id: self.entity_id.clone(),
            name: self.name.clone(),
            state: self.state,
            unit_of_measurement: self.unit_of_measurement(),
            device_class: self.device_class(),
            attributes: self.attributes,
            icon: self.icon.clone(),
            entity_picture: self.entity_picture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{RenderError, Verbatim};
    use comfort_core::Perception;

    fn known(t: f64, rh: f64) -> LastKnown {
        let mut last = LastKnown::new();
        last.set_temperature(t);
        last.set_humidity(rh);
        last
    }

    #[test]
    fn naming_and_units() {
        let sensor = ComfortSensor::new("sensor.den_dewpoint", "Den", MetricKind::DewPoint);
        assert_eq!(sensor.name(), "Den Dew Point");
        assert_eq!(sensor.unit_of_measurement(), Some("°C"));
        assert_eq!(sensor.device_class(), Some("temperature"));
        assert_eq!(sensor.state(), None);
    }

    #[test]
    fn update_publishes_value_and_inputs() {
        let mut sensor = ComfortSensor::new("sensor.den_perception", "Den", MetricKind::Perception);
        let value = sensor.update(known(25.0, 60.0), None).unwrap();
        assert_eq!(value, MetricValue::Perception(Perception::OkForMost));
        assert_eq!(sensor.state(), Some(value));
        assert_eq!(
            sensor.attributes(),
            SensorAttributes { temperature: Some(25.0), humidity: Some(60.0) }
        );
    }

    #[test]
    fn missing_input_suppresses_computation() {
        let mut sensor = ComfortSensor::new("sensor.den_heatindex", "Den", MetricKind::HeatIndex);
        let mut last = LastKnown::new();
        last.set_temperature(30.0);

        let err = sensor.update(last, None).unwrap_err();
        assert!(err.is_missing_input());
        assert_eq!(sensor.state(), None);
        assert_eq!(sensor.attributes().temperature, Some(30.0));
        assert_eq!(sensor.attributes().humidity, None);
    }

    #[test]
    fn domain_error_clears_state_for_the_cycle() {
        let mut sensor = ComfortSensor::new("sensor.den_dewpoint", "Den", MetricKind::DewPoint);
        sensor.update(known(20.0, 50.0), None).unwrap();
        assert!(sensor.state().is_some());

        assert!(sensor.update(known(20.0, 0.0), None).unwrap_err().is_domain());
        assert_eq!(sensor.state(), None);
    }

    #[test]
    fn templates_render_after_update() {
        let mut sensor = ComfortSensor::new("sensor.den_dewpoint", "Den", MetricKind::DewPoint)
            .with_templates(Some("mdi:thermometer".into()), None);
        sensor.update(known(20.0, 50.0), Some(&Verbatim)).unwrap();
        assert_eq!(sensor.icon(), Some("mdi:thermometer"));
        assert_eq!(sensor.entity_picture(), None);
    }

    #[test]
    fn render_failure_does_not_touch_metric() {
        let failing = |_: &str, _: &SensorAttributes| -> Result<String, RenderError> {
            Err(RenderError::Failed("syntax error".into()))
        };
        let mut sensor = ComfortSensor::new("sensor.den_dewpoint", "Den", MetricKind::DewPoint)
            .with_templates(Some("{{ broken".into()), Some("{{ broken".into()));
        let value = sensor.update(known(20.0, 50.0), Some(&failing)).unwrap();
        assert_eq!(sensor.state(), Some(value));
        assert_eq!(sensor.icon(), None);
    }

    #[test]
    fn snapshot_serializes_labels_verbatim() {
        let mut sensor = ComfortSensor::new("sensor.den_simmerzone", "Den", MetricKind::SimmerZone);
        sensor.update(known(20.0, 50.0), None).unwrap();
        let json = serde_json::to_value(sensor.snapshot()).unwrap();
        assert_eq!(json["state"], "");
        assert_eq!(json["name"], "Den Simmer Zone");
        assert_eq!(json["attributes"]["humidity"], 50.0);
        assert!(json.get("unit_of_measurement").is_none());
    }
}
