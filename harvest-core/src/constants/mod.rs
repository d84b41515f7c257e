//! Constants for HarvestKit Core
//!
//! Centralized, documented constants used throughout the engine. Every numeric
//! literal a model or preset relies on is named here with its unit and source.
//!
//! ## Organization
//!
//! - **Materials**: Seebeck and piezoelectric material properties
//! - **Implant**: Baseline operating conditions for an implanted harvester
//! - **Tiers**: Usability thresholds and unit conversions
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Cite a datasheet or measurement where one exists

/// Material properties for thermoelectric and piezoelectric elements.
pub mod materials;

/// Baseline implant operating conditions used by the parameter presets.
pub mod implant;

/// Usability thresholds and unit conversions.
pub mod tiers;

pub use materials::{BI2TE3_SEEBECK_V_PER_K, PIEZO_FILM_CHARGE_CONSTANT_C_PER_N};

pub use tiers::{
    MICROWATTS_PER_WATT, SUFFICIENT_THRESHOLD_UW, MARGINAL_THRESHOLD_UW,
};
