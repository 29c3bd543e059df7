//! Empirical Formula Coefficients
//!
//! Coefficients are kept exactly as published. Changing any of them changes
//! results at the second decimal, which is what gets reported.

// ===== DEW POINT =====

/// Steam point on the Kelvin scale (K), numerator of `a0 = 373.15 / T`.
///
/// Source: Goff-Gratch saturation vapor pressure over water,
/// as given at wahiduddin.net/calc/density_algorithms.htm
pub const DEW_POINT_STEAM_POINT_K: f64 = 373.15;

/// First Goff-Gratch term coefficient, multiplies `(a0 - 1)`.
pub const DEW_POINT_C1: f64 = -7.90298;

/// Second Goff-Gratch term coefficient, multiplies `log10(a0)`.
pub const DEW_POINT_C2: f64 = 5.02808;

/// Third Goff-Gratch term coefficient, multiplies `10^(C4 (1 - 1/a0)) - 1`.
pub const DEW_POINT_C3: f64 = -1.3816e-7;

/// Exponent scale of the third Goff-Gratch term.
pub const DEW_POINT_C4: f64 = 11.344;

/// Fourth Goff-Gratch term coefficient, multiplies `10^(C6 (a0 - 1)) - 1`.
pub const DEW_POINT_C5: f64 = 8.1328e-3;

/// Exponent scale of the fourth Goff-Gratch term.
pub const DEW_POINT_C6: f64 = -3.49149;

/// Saturation vapor pressure at the steam point (hPa).
pub const DEW_POINT_REFERENCE_PRESSURE_HPA: f64 = 1013.246;

/// Magnus inversion: vapor pressure at 0°C (kPa).
///
/// Source: Bolton (1980), Monthly Weather Review 108
pub const MAGNUS_BASE_PRESSURE_KPA: f64 = 0.61078;

/// Magnus inversion: temperature coefficient (°C).
pub const MAGNUS_B_C: f64 = 241.88;

/// Magnus inversion: dimensionless coefficient.
pub const MAGNUS_A: f64 = 17.558;

// ===== HEAT INDEX =====

/// Preliminary heat index above which the full regression applies (°F).
///
/// Source: NOAA Weather Prediction Center, heat index equation
pub const HEAT_INDEX_REGRESSION_THRESHOLD_F: f64 = 79.0;

/// Rothfusz regression coefficients, in published order:
/// `c0 + c1 F + c2 RH + c3 F RH + c4 F² + c5 RH² + c6 F² RH + c7 F RH² + c8 F² RH²`
///
/// Source: Rothfusz (1990), NWS Technical Attachment SR 90-23
pub const ROTHFUSZ: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];

/// Dry-air adjustment applies below this relative humidity (%).
pub const HEAT_INDEX_DRY_RH_MAX: f64 = 13.0;

/// Dry-air adjustment band, inclusive (°F).
pub const HEAT_INDEX_DRY_BAND_F: (f64, f64) = (80.0, 112.0);

/// Humid-air adjustment applies above this relative humidity (%).
pub const HEAT_INDEX_HUMID_RH_MIN: f64 = 85.0;

/// Humid-air adjustment band, inclusive (°F).
pub const HEAT_INDEX_HUMID_BAND_F: (f64, f64) = (80.0, 87.0);

// ===== ABSOLUTE HUMIDITY =====

/// Saturation vapor pressure at 0°C (hPa).
///
/// Source: Bolton (1980); conversion after carnotcycle.wordpress.com,
/// "How to convert relative humidity to absolute humidity"
pub const ABS_HUMIDITY_BASE_PRESSURE_HPA: f64 = 6.112;

/// Magnus exponent coefficient for absolute humidity.
pub const ABS_HUMIDITY_MAGNUS_A: f64 = 17.67;

/// Magnus temperature coefficient for absolute humidity (°C).
pub const ABS_HUMIDITY_MAGNUS_B_C: f64 = 243.5;

/// Combined `M_w / R` scale factor giving g/m³.
pub const ABS_HUMIDITY_SCALE: f64 = 2.1674;

// ===== SIMMER INDEX =====

/// Below this temperature the simmer index equals the air temperature (°F).
///
/// Source: Pepi (1987), Summer Simmer Index
pub const SIMMER_INDEX_MIN_F: f64 = 70.0;

/// Simmer index slope.
pub const SIMMER_SLOPE: f64 = 1.98;

/// Simmer index humidity intercept.
pub const SIMMER_RH_INTERCEPT: f64 = 0.55;

/// Simmer index humidity slope (per % RH).
pub const SIMMER_RH_SLOPE: f64 = 0.0055;

/// Simmer index reference temperature (°F).
pub const SIMMER_REFERENCE_F: f64 = 58.0;

/// Simmer index offset (°F).
pub const SIMMER_OFFSET_F: f64 = 56.83;
