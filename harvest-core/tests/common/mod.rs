//! Common fixtures and strategies for integration tests
//!
//! This module provides:
//! - Named parameter scenarios taken from implant feasibility studies
//! - proptest strategies that only generate parameters inside each model's domain
//! - Tolerance helpers for comparing computed powers

#![allow(dead_code)]

use harvest_core::{PiezoelectricParameters, ThermoelectricParameters};
use proptest::prelude::*;

/// Relative tolerance for additivity and formula checks
pub const REL_TOL: f64 = 1e-12;

/// Relative closeness test for comparing computed powers
///
/// Two zeros compare equal; otherwise the difference is scaled by the larger
/// magnitude.
pub fn approx_eq_relative(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        return true;
    }
    (a - b).abs() / scale <= tolerance
}

/// Thermoelectric scenario: 5 K gradient, Bi2Te3, 100 junctions, matched 50 Ω load
pub fn thermo_reference() -> ThermoelectricParameters {
    ThermoelectricParameters {
        temperature_difference_kelvin: 5.0,
        seebeck_coefficient_volts_per_kelvin: 200e-6,
        junction_count: 100,
        internal_resistance_ohms: 50.0,
        load_resistance_ohms: 50.0,
    }
}

/// Piezoelectric scenario: 1 N at 2 Hz on a 100 nF, 20 pC/N film, 30% capture
pub fn piezo_reference() -> PiezoelectricParameters {
    PiezoelectricParameters {
        applied_force_newtons: 1.0,
        motion_frequency_hz: 2.0,
        charge_constant_coulombs_per_newton: 20e-12,
        capacitance_farads: 100e-9,
        load_resistance_ohms: 1e6,
        efficiency: 0.3,
    }
}

/// Thermoelectric circuit with both resistances zeroed
pub fn thermo_short_circuit() -> ThermoelectricParameters {
    ThermoelectricParameters {
        internal_resistance_ohms: 0.0,
        load_resistance_ohms: 0.0,
        ..thermo_reference()
    }
}

/// Valid thermoelectric parameter sets
pub fn thermo_params() -> impl Strategy<Value = ThermoelectricParameters> {
    (
        -50.0f64..50.0,
        1e-6f64..1e-3,
        1u32..1000,
        0.1f64..1e4,
        0.1f64..1e4,
    )
        .prop_map(|(delta, seebeck, junctions, internal, load)| ThermoelectricParameters {
            temperature_difference_kelvin: delta,
            seebeck_coefficient_volts_per_kelvin: seebeck,
            junction_count: junctions,
            internal_resistance_ohms: internal,
            load_resistance_ohms: load,
        })
}

/// Valid piezoelectric parameter sets
pub fn piezo_params() -> impl Strategy<Value = PiezoelectricParameters> {
    (
        0.0f64..100.0,
        0.0f64..50.0,
        1e-12f64..1e-9,
        1e-9f64..1e-5,
        1.0f64..1e7,
        0.0f64..=1.0,
    )
        .prop_map(|(force, frequency, charge, capacitance, load, efficiency)| {
            PiezoelectricParameters {
                applied_force_newtons: force,
                motion_frequency_hz: frequency,
                charge_constant_coulombs_per_newton: charge,
                capacitance_farads: capacitance,
                load_resistance_ohms: load,
                efficiency,
            }
        })
}
