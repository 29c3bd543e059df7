//! Common test fixtures for comfort-core integration tests
//!
//! Reference values were produced with double precision and rounded to two
//! decimals, exactly as the calculator reports them.

#![allow(dead_code)]

pub mod scenarios;

/// Tolerance for comparing published (already rounded) values
pub const ROUNDED_TOLERANCE: f64 = 1e-6;

/// Assert two rounded metric values are equal
pub fn assert_metric_eq(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < ROUNDED_TOLERANCE,
        "{label}: expected {expected}, got {actual}"
    );
}
