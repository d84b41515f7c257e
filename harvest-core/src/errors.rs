//! Error Types for Physical Domain Violations
//!
//! ## Design Philosophy
//!
//! HarvestKit's error system follows the same constraints as the models:
//!
//! 1. **Small Size**: Each variant carries a few scalars and a `&'static str`
//!    naming the offending parameter, so errors stay `Copy` and can be returned
//!    from `no_std` code without allocation.
//!
//! 2. **Raised, Never Clamped**: A parameter outside its physical domain is
//!    reported at the point of violation. The engine never substitutes a
//!    "nearby" valid value.
//!
//! 3. **No Retries**: Every computation is a deterministic closed-form
//!    expression. Evaluating the same parameters again reproduces the same
//!    error, so callers should fix the input instead.
//!
//! ## Error Categories
//!
//! - `NonFinite`: a parameter, or a quantity computed from in-range
//!   parameters, is NaN or infinite
//! - `OutOfDomain`: a parameter violates its documented range (negative force,
//!   efficiency above 1, non-positive capacitance, ...)
//! - `ZeroResistance`: the thermoelectric circuit has no resistance to divide by
//! - `InvalidJunctionCount`: a thermoelectric module without junctions
//!
//! ## Handling Strategy
//!
//! ```rust
//! use harvest_core::{DomainError, ThermoelectricParameters, estimate_thermoelectric_power};
//!
//! let params = ThermoelectricParameters {
//!     internal_resistance_ohms: 0.0,
//!     load_resistance_ohms: 0.0,
//!     ..ThermoelectricParameters::implant_baseline()
//! };
//!
//! match estimate_thermoelectric_power(&params) {
//!     Ok(estimate) => println!("{}", estimate),
//!     Err(DomainError::ZeroResistance { .. }) => {
//!         // Reject the parameter set and ask for a corrected circuit
//!         println!("circuit has no resistance");
//!     }
//!     Err(other) => println!("cannot evaluate: {}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for harvest computations
pub type HarvestResult<T> = Result<T, DomainError>;

/// A physical parameter is outside the domain its formula is defined on
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Parameter or derived quantity is NaN or infinite
    #[error("Parameter {parameter} is not a finite number")]
    NonFinite {
        /// Name of the offending field or derived quantity
        parameter: &'static str,
    },

    /// Parameter violates its documented range
    #[error("Parameter {parameter} = {value} violates requirement: {requirement}")]
    OutOfDomain {
        /// Name of the offending field
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable domain, e.g. "> 0"
        requirement: &'static str,
    },

    /// Internal plus load resistance sums to zero
    #[error("Resistance sum is zero (internal {internal_ohms} ohm, load {load_ohms} ohm)")]
    ZeroResistance {
        /// Generator internal resistance
        internal_ohms: f64,
        /// External load resistance
        load_ohms: f64,
    },

    /// Thermoelectric module declared with no junctions
    #[error("Junction count must be at least 1")]
    InvalidJunctionCount,
}

impl DomainError {
    /// Name of the parameter that caused the error, when there is a single one
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NonFinite { parameter } | Self::OutOfDomain { parameter, .. } => Some(*parameter),
            Self::ZeroResistance { .. } => None,
            Self::InvalidJunctionCount => Some("junction_count"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonFinite { parameter } =>
                defmt::write!(fmt, "{} not finite", parameter),
            Self::OutOfDomain { parameter, value, requirement } =>
                defmt::write!(fmt, "{} = {} violates {}", parameter, value, requirement),
            Self::ZeroResistance { internal_ohms, load_ohms } =>
                defmt::write!(fmt, "Zero resistance sum ({} + {})", internal_ohms, load_ohms),
            Self::InvalidJunctionCount =>
                defmt::write!(fmt, "Junction count is zero"),
        }
    }
}
