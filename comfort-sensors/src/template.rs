//! Icon and picture template hook
//!
//! Templating belongs to the host. A sensor only knows the template source
//! strings from its config and asks a [`TemplateRenderer`] to turn them into
//! an icon or picture after every update. Rendering failures never touch the
//! computed metric: the previous icon or picture is kept and the failure is
//! logged.

use thiserror::Error;

use crate::sensor::SensorAttributes;

/// Template rendering failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Template referenced a value that does not exist yet; common while the
    /// host is still starting
    #[error("Undefined value: {0}")]
    Undefined(String),

    #[error("Template failed: {0}")]
    Failed(String),
}

/// Host templating engine
pub trait TemplateRenderer {
    /// Render `template` against the sensor's current attributes
    fn render(&self, template: &str, attributes: &SensorAttributes) -> Result<String, RenderError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str, &SensorAttributes) -> Result<String, RenderError>,
{
    fn render(&self, template: &str, attributes: &SensorAttributes) -> Result<String, RenderError> {
        self(template, attributes)
    }
}

/// Renderer that publishes template sources unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl TemplateRenderer for Verbatim {
    fn render(&self, template: &str, _attributes: &SensorAttributes) -> Result<String, RenderError> {
        Ok(template.to_string())
    }
}

/// Render one optional template into `slot`, keeping the old value on failure
pub(crate) fn render_into(
    renderer: &dyn TemplateRenderer,
    template: Option<&str>,
    slot: &mut Option<String>,
    property: &str,
    sensor_name: &str,
    attributes: &SensorAttributes,
) {
    let Some(template) = template else {
        return;
    };

    match renderer.render(template, attributes) {
        Ok(rendered) => *slot = Some(rendered),
        Err(RenderError::Undefined(_)) => {
            log::warn!(
                "Could not render {} template {}, the state is unknown",
                property,
                sensor_name
            );
        }
        Err(err) => {
            log::error!("Could not render {} template {}: {}", property, sensor_name, err);
        }
    }
}
