//! Constants for Thermal Comfort Calculations
//!
//! This module provides centralized, documented constants used by the
//! comfort formulas. Every empirical coefficient lives here with its source,
//! so the formulas in [`crate::formulas`] read as equations rather than as
//! walls of magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: unit conversion and fundamental constants
//! - **Formulas**: published empirical coefficients per metric
//! - **Bands**: category thresholds and their label text
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the publication a coefficient comes from
//! 3. Keep coefficients in the exact form they were published in
//! 4. Use descriptive names that include units

/// Physical constants and unit conversion factors.
pub mod physics;

/// Empirical coefficients of the dew point, heat index, absolute humidity
/// and simmer index formulas.
pub mod formulas;

/// Category thresholds for thermal perception and simmer zones.
pub mod bands;

// Re-export commonly used constants for convenience
pub use physics::{ABSOLUTE_ZERO_CELSIUS, FAHRENHEIT_OFFSET, KELVIN_OFFSET};

pub use bands::{PERCEPTION_BANDS_C, SIMMER_ZONE_BANDS_C};
