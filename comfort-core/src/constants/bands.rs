//! Comfort Category Thresholds
//!
//! Both tables are ascending upper bounds. A value falls into the first band
//! whose bound it is strictly below; values at or above the last bound fall
//! into the trailing catch-all category.

/// Dew point upper bounds for thermal perception (°C).
///
/// Source: en.wikipedia.org/wiki/Dew_point, human reaction table
pub const PERCEPTION_BANDS_C: [f64; 7] = [10.0, 13.0, 16.0, 18.0, 21.0, 24.0, 26.0];

/// Simmer index upper bounds for simmer zones (°C).
///
/// Source: Pepi (1987), Summer Simmer Index zones converted from °F
pub const SIMMER_ZONE_BANDS_C: [f64; 8] = [21.1, 25.0, 28.3, 32.8, 37.8, 44.4, 51.7, 65.6];
