//! Harvest Profiles
//!
//! A profile is a named implant scenario: one thermoelectric parameter set and
//! one piezoelectric parameter set that are evaluated together. Profiles are
//! plain JSON so feasibility studies can be tuned without recompiling.

use harvest_core::{
    HarvestAggregator, HarvestModel, HarvestReport, PiezoelectricModel, PiezoelectricParameters,
    ThermoelectricModel, ThermoelectricParameters,
};
use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, ProfileResult};

/// Named implant scenario with parameters for both harvest sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestProfile {
    /// Unique profile name (e.g., "implant_baseline")
    pub name: String,

    /// Free-form description of the placement being modeled
    #[serde(default)]
    pub description: String,

    /// Body-heat harvester parameters
    pub thermoelectric: ThermoelectricParameters,

    /// Motion harvester parameters
    pub piezoelectric: PiezoelectricParameters,
}

impl HarvestProfile {
    /// Create a profile from explicit parameter sets
    pub fn new(
        name: impl Into<String>,
        thermoelectric: ThermoelectricParameters,
        piezoelectric: PiezoelectricParameters,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            thermoelectric,
            piezoelectric,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parse a profile from JSON and check it
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        let profile: HarvestProfile = serde_json::from_str(json)?;
        profile.check()?;
        Ok(profile)
    }

    /// Serialize the profile as pretty-printed JSON
    pub fn to_json(&self) -> ProfileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check both parameter sets against their physical domains
    pub fn check(&self) -> ProfileResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::MissingName);
        }

        ThermoelectricModel::new()
            .check(&self.thermoelectric)
            .and_then(|_| PiezoelectricModel::new().check(&self.piezoelectric))
            .map_err(|source| ConfigurationError::InvalidProfile {
                profile: self.name.clone(),
                source,
            })
    }

    /// Evaluate the combined energy budget for this profile
    pub fn evaluate(&self) -> ProfileResult<HarvestReport> {
        HarvestAggregator::new()
            .aggregate(&self.thermoelectric, &self.piezoelectric)
            .map_err(|source| ConfigurationError::InvalidProfile {
                profile: self.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_core::{DomainError, UsabilityTier};

    fn baseline() -> HarvestProfile {
        HarvestProfile::new(
            "baseline",
            ThermoelectricParameters::implant_baseline(),
            PiezoelectricParameters::implant_baseline(),
        )
    }

    #[test]
    fn json_round_trip_preserves_parameters() {
        let profile = baseline().with_description("test placement");
        let json = profile.to_json().unwrap();
        let parsed = HarvestProfile::from_json(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn missing_parameter_is_a_parse_error() {
        let json = r#"{
            "name": "partial",
            "thermoelectric": {
                "temperature_difference_kelvin": 5.0,
                "seebeck_coefficient_volts_per_kelvin": 0.0002,
                "junction_count": 100,
                "internal_resistance_ohms": 50.0
            },
            "piezoelectric": {
                "applied_force_newtons": 1.0,
                "motion_frequency_hz": 2.0,
                "charge_constant_coulombs_per_newton": 2e-11,
                "capacitance_farads": 1e-7,
                "load_resistance_ohms": 1e6,
                "efficiency": 0.3
            }
        }"#;
        let err = HarvestProfile::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
        assert!(err.to_string().contains("load_resistance_ohms"));
    }

    #[test]
    fn negative_junction_count_is_a_parse_error() {
        let mut value = serde_json::to_value(baseline()).unwrap();
        value["thermoelectric"]["junction_count"] = serde_json::json!(-3);
        let err = HarvestProfile::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }

    #[test]
    fn out_of_domain_parameter_names_profile() {
        let mut profile = baseline();
        profile.piezoelectric.efficiency = 1.5;
        match profile.check() {
            Err(ConfigurationError::InvalidProfile { profile, source }) => {
                assert_eq!(profile, "baseline");
                assert_eq!(source.parameter(), Some("efficiency"));
            }
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn blank_name_rejected() {
        let mut profile = baseline();
        profile.name = "  ".to_string();
        assert!(matches!(profile.check(), Err(ConfigurationError::MissingName)));
    }

    #[test]
    fn evaluate_runs_the_aggregator() {
        let report = baseline().evaluate().unwrap();
        assert_eq!(report.tier, UsabilityTier::Sufficient);
    }

    #[test]
    fn evaluate_surfaces_domain_errors() {
        let mut profile = baseline();
        profile.thermoelectric.internal_resistance_ohms = 0.0;
        profile.thermoelectric.load_resistance_ohms = 0.0;
        match profile.evaluate() {
            Err(ConfigurationError::InvalidProfile { source, .. }) => assert_eq!(
                source,
                DomainError::ZeroResistance { internal_ohms: 0.0, load_ohms: 0.0 }
            ),
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }
}
