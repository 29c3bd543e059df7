//! Integration layer errors

use comfort_core::ComfortError;
use thiserror::Error;

/// Configuration rejected while loading or validating
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid device key '{0}': expected lowercase letters, digits and underscores")]
    InvalidSlug(String),

    #[error("Invalid entity id '{entity_id}' for {field}")]
    InvalidEntityId {
        field: &'static str,
        entity_id: String,
    },
}

/// Host state that cannot be turned into a reading
#[derive(Debug, Error, PartialEq)]
pub enum FeedError {
    #[error("State '{0}' is not a number")]
    NotANumber(String),

    #[error("Unsupported temperature unit '{0}'")]
    UnknownUnit(String),
}

/// Platform setup failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("No sensors added")]
    NoSensors,
}

/// Any error surfaced by the integration layer
#[derive(Debug, Error)]
pub enum SensorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Comfort(#[from] ComfortError),
}
