//! Thermoelectric generator model
//!
//! Estimates power delivered by a thermoelectric generator (TEG) driven by the
//! body-heat gradient across an implant:
//! - Seebeck effect gives the open-circuit voltage
//! - The module's internal resistance and the load form a voltage divider
//! - Power is dissipated in the load only
//!
//! ## Temperature Units
//!
//! The model takes a temperature *difference*. A difference of 5 K is the same
//! number as a difference of 5 °C, so ΔT measured in Celsius can be passed
//! directly. This does not hold for absolute temperatures: passing 310 K
//! (body core) where a gradient is expected inflates the estimate by nearly
//! two orders of magnitude. Use [`ThermoelectricParameters::from_celsius_difference`]
//! to make the intent explicit at the call site.

use core::fmt;

use crate::{
    constants::{
        implant::{
            CORE_TO_SURFACE_DELTA_K, IMPLANT_JUNCTION_COUNT, TEG_INTERNAL_RESISTANCE_OHMS,
            TEG_MATCHED_LOAD_OHMS,
        },
        materials::BI2TE3_SEEBECK_V_PER_K,
    },
    errors::{DomainError, HarvestResult},
    power::{HarvestSource, PowerEstimate},
    traits::HarvestModel,
};

use super::utils;

/// Physical parameters of a thermoelectric harvester
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermoelectricParameters {
    /// Temperature difference across the module (K, numerically equal to °C)
    pub temperature_difference_kelvin: f64,

    /// Seebeck coefficient per junction (V/K)
    pub seebeck_coefficient_volts_per_kelvin: f64,

    /// Thermocouples connected in series
    pub junction_count: u32,

    /// Module internal resistance (Ω)
    pub internal_resistance_ohms: f64,

    /// External load resistance (Ω)
    pub load_resistance_ohms: f64,
}

impl ThermoelectricParameters {
    /// Bi2Te3 module with a 5 K core-to-surface gradient and matched load
    pub fn implant_baseline() -> Self {
        Self {
            temperature_difference_kelvin: CORE_TO_SURFACE_DELTA_K,
            seebeck_coefficient_volts_per_kelvin: BI2TE3_SEEBECK_V_PER_K,
            junction_count: IMPLANT_JUNCTION_COUNT,
            internal_resistance_ohms: TEG_INTERNAL_RESISTANCE_OHMS,
            load_resistance_ohms: TEG_MATCHED_LOAD_OHMS,
        }
    }

    /// Build parameters from a temperature difference measured in °C
    ///
    /// A difference in °C equals the same difference in K, so no offset is
    /// applied. Never pass an absolute temperature here.
    pub fn from_celsius_difference(
        delta_celsius: f64,
        seebeck_coefficient_volts_per_kelvin: f64,
        junction_count: u32,
        internal_resistance_ohms: f64,
        load_resistance_ohms: f64,
    ) -> Self {
        Self {
            temperature_difference_kelvin: delta_celsius,
            seebeck_coefficient_volts_per_kelvin,
            junction_count,
            internal_resistance_ohms,
            load_resistance_ohms,
        }
    }

    /// Same module with a different load
    pub fn with_load(mut self, load_resistance_ohms: f64) -> Self {
        self.load_resistance_ohms = load_resistance_ohms;
        self
    }

    /// Same module under a different gradient
    pub fn with_temperature_difference(mut self, kelvin: f64) -> Self {
        self.temperature_difference_kelvin = kelvin;
        self
    }

    /// Open-circuit voltage: Voc = S × ΔT × N (V)
    pub fn open_circuit_voltage(&self) -> f64 {
        self.seebeck_coefficient_volts_per_kelvin
            * self.temperature_difference_kelvin
            * self.junction_count as f64
    }
}

impl Default for ThermoelectricParameters {
    fn default() -> Self {
        Self::implant_baseline()
    }
}

/// Electrical state of the generator with its load attached
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermoelectricOperatingPoint {
    /// Voltage with no load current drawn (V)
    pub open_circuit_voltage_volts: f64,
    /// Current through the series circuit (A)
    pub current_amperes: f64,
    /// Voltage across the load (V)
    pub load_voltage_volts: f64,
    /// Power dissipated in the load (W)
    pub power_watts: f64,
}

impl fmt::Display for ThermoelectricOperatingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Open-circuit voltage (no load):      {:.3} mV", self.open_circuit_voltage_volts * 1e3)?;
        writeln!(f, "Current delivered:                   {:.3} µA", self.current_amperes * 1e6)?;
        writeln!(f, "Voltage across load:                 {:.3} mV", self.load_voltage_volts * 1e3)?;
        write!(f, "Power into load:                     {:.3} µW", self.power_watts * 1e6)
    }
}

/// Thermoelectric harvest model
#[derive(Debug, Clone, Copy, Default)]
pub struct ThermoelectricModel;

impl ThermoelectricModel {
    /// Create the model
    pub const fn new() -> Self {
        Self
    }

    /// Solve the divider circuit and return every intermediate quantity
    pub fn operating_point(
        &self,
        params: &ThermoelectricParameters,
    ) -> HarvestResult<ThermoelectricOperatingPoint> {
        self.check(params)?;

        let open_circuit_voltage = params.open_circuit_voltage();

        let total_resistance = params.internal_resistance_ohms + params.load_resistance_ohms;
        let current = open_circuit_voltage / total_resistance;
        let load_voltage = current * params.load_resistance_ohms;
        // P = V² / R, equivalently I² × R
        let power = utils::square(load_voltage) / params.load_resistance_ohms;

        // Extreme in-domain inputs can still overflow
        utils::check_finite("open_circuit_voltage_volts", open_circuit_voltage)?;
        utils::check_finite("current_amperes", current)?;
        utils::check_finite("power_watts", power)?;

        log_trace!(
            "thermoelectric: voc={} V, i={} A, v_load={} V, p={} W",
            open_circuit_voltage,
            current,
            load_voltage,
            power
        );

        Ok(ThermoelectricOperatingPoint {
            open_circuit_voltage_volts: open_circuit_voltage,
            current_amperes: current,
            load_voltage_volts: load_voltage,
            power_watts: power,
        })
    }
}

impl HarvestModel for ThermoelectricModel {
    type Parameters = ThermoelectricParameters;

    fn source(&self) -> HarvestSource {
        HarvestSource::Thermoelectric
    }

    fn check(&self, params: &Self::Parameters) -> HarvestResult<()> {
        utils::check_finite("temperature_difference_kelvin", params.temperature_difference_kelvin)?;
        utils::check_finite(
            "seebeck_coefficient_volts_per_kelvin",
            params.seebeck_coefficient_volts_per_kelvin,
        )?;
        if params.junction_count == 0 {
            return Err(DomainError::InvalidJunctionCount);
        }
        utils::check_finite("internal_resistance_ohms", params.internal_resistance_ohms)?;
        utils::check_finite("load_resistance_ohms", params.load_resistance_ohms)?;
        // Divider denominator
        if params.internal_resistance_ohms + params.load_resistance_ohms == 0.0 {
            return Err(DomainError::ZeroResistance {
                internal_ohms: params.internal_resistance_ohms,
                load_ohms: params.load_resistance_ohms,
            });
        }
        utils::check_positive("internal_resistance_ohms", params.internal_resistance_ohms)?;
        utils::check_positive("load_resistance_ohms", params.load_resistance_ohms)?;
        Ok(())
    }

    fn estimate(&self, params: &Self::Parameters) -> HarvestResult<PowerEstimate> {
        let point = self.operating_point(params)?;
        Ok(PowerEstimate::new(point.power_watts, self.source()))
    }
}
