//! Physics-Based Harvest Models
//!
//! ## Overview
//!
//! Each model turns one parameter record into one [`PowerEstimate`] with a
//! closed-form expression. Models are stateless unit structs: the same
//! parameters always give the same answer, and there is nothing to configure
//! beyond the record itself.
//!
//! ## Evaluation Layers
//!
//! Every model evaluates in two steps:
//!
//! ### 1. Domain Check
//! Each parameter is checked against the range its formula is defined on.
//! The first violation is returned as a [`DomainError`] naming the field:
//! ```rust
//! use harvest_core::{HarvestModel, PiezoelectricModel, PiezoelectricParameters};
//!
//! let params = PiezoelectricParameters::implant_baseline().with_efficiency(1.2);
//! let err = PiezoelectricModel::new().check(&params).unwrap_err();
//! assert_eq!(err.parameter(), Some("efficiency"));
//! ```
//!
//! ### 2. Closed-Form Evaluation
//! Intermediate quantities are available through `operating_point` and
//! `cycle`; `estimate` keeps only the power:
//! ```rust
//! use harvest_core::{ThermoelectricModel, ThermoelectricParameters};
//!
//! let point = ThermoelectricModel::new()
//!     .operating_point(&ThermoelectricParameters::implant_baseline())?;
//! assert!((point.open_circuit_voltage_volts - 0.1).abs() < 1e-12);
//! # Ok::<(), harvest_core::DomainError>(())
//! ```
//!
//! ## Physical Invariants
//!
//! Every returned quantity is finite. Parameters that are in range but large
//! enough to overflow an intermediate are reported as `NonFinite` naming that
//! quantity.
//!
//! ### Thermoelectric
//! - Power into the load is below the open-circuit power Voc² / R_load
//! - Power falls as internal resistance grows
//! - Power peaks when the load matches the internal resistance
//!
//! ### Piezoelectric
//! - Effective voltage never exceeds peak voltage
//! - Energy per cycle is never negative
//! - Power never decreases with force, frequency or efficiency
//!
//! [`PowerEstimate`]: crate::PowerEstimate
//! [`DomainError`]: crate::DomainError

mod thermoelectric;
mod piezoelectric;
pub(crate) mod utils;

pub use thermoelectric::{ThermoelectricModel, ThermoelectricOperatingPoint, ThermoelectricParameters};
pub use piezoelectric::{PiezoelectricCycle, PiezoelectricModel, PiezoelectricParameters};
