//! Physical properties of the comfort formulas
//!
//! Domain: -40°C to 60°C, 1% to 100% RH, the range the fits were made for.

use comfort_core::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, formulas, units::round2, Perception, SimmerZone,
};
use proptest::prelude::*;

/// Dew point fit mismatch at saturation plus rounding
const DEW_POINT_TOLERANCE_C: f64 = 0.05;

fn temperature() -> impl Strategy<Value = f64> {
    -40.0f64..60.0
}

fn humidity() -> impl Strategy<Value = f64> {
    1.0f64..=100.0
}

proptest! {
    #[test]
    fn dew_point_never_exceeds_air_temperature(t in temperature(), rh in humidity()) {
        let dp = formulas::dew_point(t, rh).unwrap();
        prop_assert!(dp <= t + DEW_POINT_TOLERANCE_C, "T={} RH={} Td={}", t, rh, dp);
    }

    #[test]
    fn absolute_humidity_increases_with_humidity(
        t in temperature(),
        rh in 0.0f64..99.0,
        delta in 0.5f64..20.0,
    ) {
        let low = formulas::absolute_humidity(t, rh).unwrap();
        let high = formulas::absolute_humidity(t, rh + delta).unwrap();
        prop_assert!(high >= low);
    }

    #[test]
    fn absolute_humidity_increases_with_temperature(
        t in temperature(),
        rh in humidity(),
        delta in 0.5f64..20.0,
    ) {
        let low = formulas::absolute_humidity(t, rh).unwrap();
        let high = formulas::absolute_humidity(t + delta, rh).unwrap();
        prop_assert!(high >= low);
    }

    #[test]
    fn simmer_index_is_air_temperature_below_70f(t in -40.0f64..21.0, rh in humidity()) {
        prop_assume!(celsius_to_fahrenheit(t) < 70.0);
        let si = formulas::simmer_index(t, rh).unwrap();
        let round_trip = round2(fahrenheit_to_celsius(celsius_to_fahrenheit(t)));
        prop_assert_eq!(si, round_trip);
        prop_assert!((si - t).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn perception_bands_partition_the_line(dp in -100.0f64..100.0) {
        let category = Perception::from_dew_point(dp);
        let matching = Perception::ALL.iter().filter(|p| **p == category).count();
        prop_assert_eq!(matching, 1);
        // Monotone: a warmer dew point never maps to a lower band
        prop_assert!(Perception::from_dew_point(dp + 0.5) >= category);
    }

    #[test]
    fn simmer_zones_partition_the_line(si in -100.0f64..150.0) {
        let zone = SimmerZone::from_simmer_index(si);
        prop_assert!(SimmerZone::ALL.contains(&zone));
        prop_assert!(SimmerZone::from_simmer_index(si + 0.5) >= zone);
    }

    #[test]
    fn perception_follows_dew_point(t in temperature(), rh in humidity()) {
        let dp = formulas::dew_point(t, rh).unwrap();
        prop_assert_eq!(formulas::perception(t, rh).unwrap(), Perception::from_dew_point(dp));
    }
}
