//! Pre-built climate scenarios with reference values

/// One reading and every numeric metric it should produce
pub struct Scenario {
    pub name: &'static str,
    pub temperature_c: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub heat_index: f64,
    pub absolute_humidity: f64,
    pub simmer_index: f64,
}

/// Scenarios spanning frost, temperate rooms, tropics and deserts
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "living room",
        temperature_c: 25.0,
        humidity: 60.0,
        dew_point: 16.71,
        heat_index: 25.12,
        absolute_humidity: 13.82,
        simmer_index: 30.75,
    },
    Scenario {
        name: "office",
        temperature_c: 20.0,
        humidity: 50.0,
        dew_point: 9.28,
        heat_index: 19.36,
        absolute_humidity: 8.64,
        simmer_index: 20.0,
    },
    Scenario {
        name: "humid afternoon",
        temperature_c: 32.0,
        humidity: 70.0,
        dew_point: 25.85,
        heat_index: 40.41,
        absolute_humidity: 23.66,
        simmer_index: 43.47,
    },
    Scenario {
        name: "spring morning",
        temperature_c: 15.0,
        humidity: 50.0,
        dew_point: 4.68,
        heat_index: 13.86,
        absolute_humidity: 6.41,
        simmer_index: 15.0,
    },
    Scenario {
        name: "freezing",
        temperature_c: 0.0,
        humidity: 50.0,
        dew_point: -9.19,
        heat_index: -2.64,
        absolute_humidity: 2.42,
        simmer_index: 0.0,
    },
    Scenario {
        name: "desert",
        temperature_c: 35.0,
        humidity: 10.0,
        dew_point: -1.13,
        heat_index: 31.92,
        absolute_humidity: 3.96,
        simmer_index: 35.0,
    },
    Scenario {
        name: "tropical night",
        temperature_c: 28.0,
        humidity: 90.0,
        dew_point: 26.22,
        heat_index: 34.0,
        absolute_humidity: 24.49,
        simmer_index: 39.81,
    },
    Scenario {
        name: "winter outdoor",
        temperature_c: -10.0,
        humidity: 80.0,
        dew_point: -12.8,
        heat_index: -12.86,
        absolute_humidity: 1.89,
        simmer_index: -10.0,
    },
    Scenario {
        name: "heat wave",
        temperature_c: 45.0,
        humidity: 80.0,
        dew_point: 40.72,
        heat_index: 115.56,
        absolute_humidity: 52.43,
        simmer_index: 68.3,
    },
];
