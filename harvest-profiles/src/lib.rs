//! JSON Parameter Profiles for HarvestKit
//!
//! ## Overview
//!
//! The core engine takes explicit parameter records and nothing else. This
//! crate is the layer that produces those records: it reads named implant
//! scenarios from JSON, checks every parameter against its physical domain,
//! and reports malformed or missing input as a [`ConfigurationError`] before
//! any model runs.
//!
//! ## Profile Format
//!
//! ```json
//! {
//!   "name": "implant_baseline",
//!   "description": "Implant near muscle",
//!   "thermoelectric": {
//!     "temperature_difference_kelvin": 5.0,
//!     "seebeck_coefficient_volts_per_kelvin": 0.0002,
//!     "junction_count": 100,
//!     "internal_resistance_ohms": 50.0,
//!     "load_resistance_ohms": 50.0
//!   },
//!   "piezoelectric": {
//!     "applied_force_newtons": 1.0,
//!     "motion_frequency_hz": 2.0,
//!     "charge_constant_coulombs_per_newton": 2e-11,
//!     "capacitance_farads": 1e-7,
//!     "load_resistance_ohms": 1000000.0,
//!     "efficiency": 0.3
//!   }
//! }
//! ```
//!
//! Every field is required except `description`. Temperatures are
//! *differences*; a value in °C can be entered as-is.
//!
//! ## Built-in Profiles
//!
//! The JSON files under `profiles/` are embedded at compile time:
//!
//! - `implant_baseline`: 5 K gradient, 2 Hz muscle micro-motion
//! - `skin_surface`: 3 K gradient, 1.2 Hz steps and heartbeat
//!
//! ## Usage Example
//!
//! ```rust
//! use harvest_profiles::ProfileRegistry;
//!
//! let registry = ProfileRegistry::with_defaults()?;
//! let report = registry.evaluate("implant_baseline")?;
//! println!("{}", report);
//! # Ok::<(), harvest_profiles::ConfigurationError>(())
//! ```

use harvest_core::DomainError;
use include_dir::{include_dir, Dir};

pub mod profile;
pub mod registry;

pub use profile::HarvestProfile;
pub use registry::ProfileRegistry;

/// Built-in profile files
pub static DEFAULT_PROFILES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/profiles");

/// Result type for profile operations
pub type ProfileResult<T> = Result<T, ConfigurationError>;

/// Malformed, missing or physically invalid configuration
#[derive(Debug, thiserror_no_std::Error)]
pub enum ConfigurationError {
    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile file {path} is not valid UTF-8")]
    Encoding { path: String },

    #[error("Profile has no name")]
    MissingName,

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Profile already registered: {0}")]
    DuplicateProfile(String),

    #[error("Profile {profile} is outside the physical domain: {source}")]
    InvalidProfile {
        profile: String,
        #[source]
        source: DomainError,
    },
}
