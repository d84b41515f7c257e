//! Core estimation engine for HarvestKit
//!
//! Estimates electrical power an implanted sensor can harvest from body heat
//! (thermoelectric) and body motion (piezoelectric), classifies the result
//! into a usability tier, and combines both sources into one energy budget.
//!
//! Key constraints:
//! - Every evaluation is a pure function of an explicit parameter record
//! - No global configuration, no hidden state, no heap allocation
//! - Runs unchanged on `no_std` targets (disable default features)
//!
//! ```
//! use harvest_core::{
//!     aggregate_harvest, PiezoelectricParameters, ThermoelectricParameters, UsabilityTier,
//! };
//!
//! let report = aggregate_harvest(
//!     &ThermoelectricParameters::implant_baseline(),
//!     &PiezoelectricParameters::implant_baseline(),
//! )?;
//!
//! assert_eq!(report.tier, UsabilityTier::Sufficient);
//! println!("{}", report);
//! # Ok::<(), harvest_core::DomainError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod aggregator;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod models;
pub mod power;
pub mod traits;

// Public API
pub use aggregator::{HarvestAggregator, HarvestReport};
pub use classifier::{classify, UsabilityTier, TIER_BOUNDARIES};
pub use errors::{DomainError, HarvestResult};
pub use models::{
    PiezoelectricCycle, PiezoelectricModel, PiezoelectricParameters, ThermoelectricModel,
    ThermoelectricOperatingPoint, ThermoelectricParameters,
};
pub use power::{HarvestSource, PowerEstimate};
pub use traits::{HarvestModel, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Estimate power from a thermoelectric generator
pub fn estimate_thermoelectric_power(params: &ThermoelectricParameters) -> HarvestResult<PowerEstimate> {
    ThermoelectricModel::new().estimate(params)
}

/// Estimate power from a piezoelectric harvester
pub fn estimate_piezoelectric_power(params: &PiezoelectricParameters) -> HarvestResult<PowerEstimate> {
    PiezoelectricModel::new().estimate(params)
}

/// Evaluate both sources and build the combined energy budget
pub fn aggregate_harvest(
    thermo: &ThermoelectricParameters,
    piezo: &PiezoelectricParameters,
) -> HarvestResult<HarvestReport> {
    HarvestAggregator::new().aggregate(thermo, piezo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn free_functions_match_models() {
        let thermo = ThermoelectricParameters::implant_baseline();
        let piezo = PiezoelectricParameters::implant_baseline();
        assert_eq!(
            estimate_thermoelectric_power(&thermo),
            ThermoelectricModel::new().estimate(&thermo)
        );
        assert_eq!(
            estimate_piezoelectric_power(&piezo),
            PiezoelectricModel::new().estimate(&piezo)
        );
        assert_eq!(
            aggregate_harvest(&thermo, &piezo),
            HarvestAggregator::new().aggregate(&thermo, &piezo)
        );
    }
}
