//! Thermal comfort calculator
//!
//! Derives comfort metrics from one temperature and one relative humidity
//! reading: dew point, heat index, absolute humidity, simmer index, and the
//! perception and simmer zone categories.
//!
//! Every function is pure. There is no shared state, so the calculator is
//! safe to call from any task or interrupt context without synchronization.
//!
//! Key constraints:
//! - Runs without `std` (math through `libm`)
//! - No heap allocation
//! - Invalid inputs fail with [`ComfortError::Domain`], never with NaN
//!
//! ```no_run
//! use comfort_core::{compute, MetricKind, MetricValue};
//!
//! match compute(MetricKind::HeatIndex, 32.0, 70.0) {
//!     Ok(MetricValue::Numeric(heat_index)) => {}, // °C, 2 decimals
//!     Ok(_) => {},
//!     Err(e) => {}, // Input outside the formula's domain
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod categories;
pub mod constants;
pub mod errors;
pub mod formulas;
pub mod metric;
pub mod traits;
pub mod units;
pub mod validators;

// Public API
pub use categories::{Perception, SimmerZone};
pub use errors::{ComfortError, ComfortResult};
pub use formulas::{absolute_humidity, dew_point, heat_index, perception, simmer_index, simmer_zone};
pub use metric::{compute, MetricKind, MetricValue, Reading};
pub use traits::Validatable;
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
