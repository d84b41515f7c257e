//! Piezoelectric harvester model
//!
//! Estimates average power from a piezoelectric element compressed
//! repeatedly by body motion (muscle, artery wall, joint):
//! - Each compression produces charge Q = d × F
//! - That charge develops V = Q / C across the element's own capacitance
//! - Conditioning losses scale the usable voltage by an efficiency factor
//! - Stored energy E = ½ C V² is harvested once per motion cycle
//!
//! The element's load resistance is carried on the parameter record but does
//! not enter the energy formula: the model treats each cycle's charge as fully
//! captured. Charge leakage through the load is not modeled.

use core::fmt;

use crate::{
    constants::{
        implant::{IMPLANT_PEAK_FORCE_N, MUSCLE_MOTION_FREQUENCY_HZ, PIEZO_LOAD_RESISTANCE_OHMS},
        materials::{
            PIEZO_CAPTURE_EFFICIENCY, PIEZO_FILM_CAPACITANCE_F, PIEZO_FILM_CHARGE_CONSTANT_C_PER_N,
        },
    },
    errors::HarvestResult,
    power::{HarvestSource, PowerEstimate},
    traits::HarvestModel,
};

use super::utils;

/// Physical parameters of a piezoelectric harvester
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiezoelectricParameters {
    /// Peak force per compression (N)
    pub applied_force_newtons: f64,

    /// Compressions per second (Hz)
    pub motion_frequency_hz: f64,

    /// Effective charge constant (C/N)
    pub charge_constant_coulombs_per_newton: f64,

    /// Element capacitance (F)
    pub capacitance_farads: f64,

    /// Load the element discharges into (Ω); validated but unused by the energy formula
    pub load_resistance_ohms: f64,

    /// Fraction of peak voltage retained after losses, in [0, 1]
    pub efficiency: f64,
}

impl PiezoelectricParameters {
    /// 100 nF film under 1 N compressions at 2 Hz with 30% capture
    pub fn implant_baseline() -> Self {
        Self {
            applied_force_newtons: IMPLANT_PEAK_FORCE_N,
            motion_frequency_hz: MUSCLE_MOTION_FREQUENCY_HZ,
            charge_constant_coulombs_per_newton: PIEZO_FILM_CHARGE_CONSTANT_C_PER_N,
            capacitance_farads: PIEZO_FILM_CAPACITANCE_F,
            load_resistance_ohms: PIEZO_LOAD_RESISTANCE_OHMS,
            efficiency: PIEZO_CAPTURE_EFFICIENCY,
        }
    }

    /// Same element under a different force
    pub fn with_force(mut self, newtons: f64) -> Self {
        self.applied_force_newtons = newtons;
        self
    }

    /// Same element at a different motion frequency
    pub fn with_frequency(mut self, hz: f64) -> Self {
        self.motion_frequency_hz = hz;
        self
    }

    /// Same element with a different capture efficiency
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }
}

impl Default for PiezoelectricParameters {
    fn default() -> Self {
        Self::implant_baseline()
    }
}

/// Quantities produced by one compression cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiezoelectricCycle {
    /// Charge generated per compression (C)
    pub charge_per_cycle_coulombs: f64,
    /// Ideal voltage if all charge sits on the element capacitance (V)
    pub peak_voltage_volts: f64,
    /// Voltage after conditioning losses (V)
    pub effective_voltage_volts: f64,
    /// Energy captured per cycle (J)
    pub energy_per_cycle_joules: f64,
    /// Average power over many cycles (W)
    pub power_watts: f64,
}

impl fmt::Display for PiezoelectricCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raw peak voltage (ideal):            {:.3} V", self.peak_voltage_volts)?;
        writeln!(f, "Effective voltage after losses:      {:.3} V", self.effective_voltage_volts)?;
        writeln!(f, "Energy per cycle:                    {:.3} nJ", self.energy_per_cycle_joules * 1e9)?;
        write!(f, "Average harvested power:             {:.3} µW", self.power_watts * 1e6)
    }
}

/// Piezoelectric harvest model
#[derive(Debug, Clone, Copy, Default)]
pub struct PiezoelectricModel;

impl PiezoelectricModel {
    /// Create the model
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate one compression cycle and the resulting average power
    pub fn cycle(&self, params: &PiezoelectricParameters) -> HarvestResult<PiezoelectricCycle> {
        self.check(params)?;

        let charge = params.charge_constant_coulombs_per_newton * params.applied_force_newtons;
        let peak_voltage = charge / params.capacitance_farads;
        let effective_voltage = peak_voltage * params.efficiency;
        let energy = 0.5 * params.capacitance_farads * utils::square(effective_voltage);
        let power = energy * params.motion_frequency_hz;

        // Extreme in-domain inputs can still overflow
        utils::check_finite("charge_per_cycle_coulombs", charge)?;
        utils::check_finite("peak_voltage_volts", peak_voltage)?;
        utils::check_finite("energy_per_cycle_joules", energy)?;
        utils::check_finite("power_watts", power)?;

        log_trace!(
            "piezoelectric: q={} C, v_peak={} V, v_eff={} V, e={} J, p={} W",
            charge,
            peak_voltage,
            effective_voltage,
            energy,
            power
        );

        Ok(PiezoelectricCycle {
            charge_per_cycle_coulombs: charge,
            peak_voltage_volts: peak_voltage,
            effective_voltage_volts: effective_voltage,
            energy_per_cycle_joules: energy,
            power_watts: power,
        })
    }
}

impl HarvestModel for PiezoelectricModel {
    type Parameters = PiezoelectricParameters;

    fn source(&self) -> HarvestSource {
        HarvestSource::Piezoelectric
    }

    fn check(&self, params: &Self::Parameters) -> HarvestResult<()> {
        utils::check_non_negative("applied_force_newtons", params.applied_force_newtons)?;
        utils::check_non_negative("motion_frequency_hz", params.motion_frequency_hz)?;
        utils::check_positive(
            "charge_constant_coulombs_per_newton",
            params.charge_constant_coulombs_per_newton,
        )?;
        utils::check_positive("capacitance_farads", params.capacitance_farads)?;
        utils::check_positive("load_resistance_ohms", params.load_resistance_ohms)?;
        utils::check_unit_interval("efficiency", params.efficiency)?;
        Ok(())
    }

    fn estimate(&self, params: &Self::Parameters) -> HarvestResult<PowerEstimate> {
        let cycle = self.cycle(params)?;
        Ok(PowerEstimate::new(cycle.power_watts, self.source()))
    }
}
