//! Reference scenarios for every metric
//!
//! Each scenario is checked through the individual formulas and through the
//! `compute` dispatch, which must agree.

mod common;

use common::{assert_metric_eq, scenarios::SCENARIOS};
use comfort_core::{
    compute, formulas, ComfortError, MetricKind, MetricValue, Perception, Reading, SimmerZone,
};

#[test]
fn scenario_reference_values() {
    for s in SCENARIOS {
        let (t, rh) = (s.temperature_c, s.humidity);
        assert_metric_eq(formulas::dew_point(t, rh).unwrap(), s.dew_point, s.name);
        assert_metric_eq(formulas::heat_index(t, rh).unwrap(), s.heat_index, s.name);
        assert_metric_eq(formulas::absolute_humidity(t, rh).unwrap(), s.absolute_humidity, s.name);
        assert_metric_eq(formulas::simmer_index(t, rh).unwrap(), s.simmer_index, s.name);
    }
}

#[test]
fn dispatch_agrees_with_formulas() {
    for s in SCENARIOS {
        let reading = Reading::new(s.temperature_c, s.humidity);
        for kind in MetricKind::ALL {
            let value = reading.compute(kind).unwrap();
            match (kind, value) {
                (MetricKind::DewPoint, MetricValue::Numeric(v)) => {
                    assert_metric_eq(v, s.dew_point, s.name)
                }
                (MetricKind::HeatIndex, MetricValue::Numeric(v)) => {
                    assert_metric_eq(v, s.heat_index, s.name)
                }
                (MetricKind::AbsoluteHumidity, MetricValue::Numeric(v)) => {
                    assert_metric_eq(v, s.absolute_humidity, s.name)
                }
                (MetricKind::SimmerIndex, MetricValue::Numeric(v)) => {
                    assert_metric_eq(v, s.simmer_index, s.name)
                }
                (MetricKind::Perception, MetricValue::Perception(p)) => {
                    assert_eq!(p, Perception::from_dew_point(s.dew_point), "{}", s.name)
                }
                (MetricKind::SimmerZone, MetricValue::SimmerZone(z)) => {
                    assert_eq!(z, SimmerZone::from_simmer_index(s.simmer_index), "{}", s.name)
                }
                (kind, value) => panic!("{kind} produced mismatched value {value:?}"),
            }
        }
    }
}

#[test]
fn documented_examples() {
    let dp = formulas::dew_point(25.0, 60.0).unwrap();
    assert!((dp - 16.68).abs() < 0.05);

    // 89.6°F takes the regression branch
    let regression = formulas::heat_index(32.0, 70.0).unwrap();
    assert!(regression > 32.0);

    assert_metric_eq(formulas::absolute_humidity(20.0, 50.0).unwrap(), 8.64, "ah");
    assert_metric_eq(formulas::simmer_index(15.0, 50.0).unwrap(), 15.0, "si");
    assert_eq!(SimmerZone::from_simmer_index(20.0).as_str(), "");
    assert_eq!(Perception::from_dew_point(14.0).as_str(), "Comfortable");
}

#[test]
fn heat_wave_labels() {
    assert_eq!(
        compute(MetricKind::Perception, 45.0, 80.0),
        Ok(MetricValue::Perception(Perception::SeverelyHigh))
    );
    assert_eq!(
        compute(MetricKind::SimmerZone, 45.0, 80.0),
        Ok(MetricValue::SimmerZone(SimmerZone::CirculatoryCollapseImminent))
    );
}

#[test]
fn non_finite_inputs_are_domain_errors() {
    for kind in MetricKind::ALL {
        for (t, rh) in [(f64::NAN, 50.0), (20.0, f64::NAN), (f64::INFINITY, 50.0), (20.0, -1.0)] {
            match compute(kind, t, rh) {
                Err(ComfortError::Domain { .. }) => {}
                other => panic!("{kind} at T={t} RH={rh} returned {other:?}"),
            }
        }
    }
}

#[test]
fn humidity_above_saturation_is_accepted() {
    for kind in MetricKind::ALL {
        assert!(compute(kind, 12.0, 101.5).is_ok(), "{kind}");
    }
}
