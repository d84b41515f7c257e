//! Combined Energy Budget
//!
//! The aggregator evaluates both harvest models for one implant scenario and
//! sums their output into a single budget.
//!
//! ## Flow
//!
//! ```text
//! ThermoelectricParameters ──► ThermoelectricModel ──┐
//!                                                     ├─► sum ─► classify ─► HarvestReport
//! PiezoelectricParameters  ──► PiezoelectricModel  ──┘
//! ```
//!
//! The two models do not interact and can run in either order. Only the
//! combined power decides the report's `tier`; the per-source tiers are kept
//! alongside for information and never folded into it.
//!
//! ## Failure
//!
//! If either model rejects its parameters the whole aggregation fails with
//! that error. There is no partial report and no fallback to the other
//! source alone.

use core::fmt;

use crate::{
    classifier::{self, UsabilityTier},
    errors::HarvestResult,
    models::{
        PiezoelectricModel, PiezoelectricParameters, ThermoelectricModel,
        ThermoelectricParameters,
    },
    power::{HarvestSource, PowerEstimate},
    traits::HarvestModel,
};

/// Combined energy budget for one implant scenario
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestReport {
    /// Body-heat contribution
    pub thermoelectric: PowerEstimate,

    /// Motion contribution
    pub piezoelectric: PowerEstimate,

    /// Sum of both contributions
    pub combined: PowerEstimate,

    /// Usability of the combined budget
    pub tier: UsabilityTier,

    /// Usability of the thermoelectric source on its own (informational)
    pub thermoelectric_tier: UsabilityTier,

    /// Usability of the piezoelectric source on its own (informational)
    pub piezoelectric_tier: UsabilityTier,
}

impl HarvestReport {
    /// Build a report from two per-source estimates
    fn from_estimates(thermoelectric: PowerEstimate, piezoelectric: PowerEstimate) -> Self {
        let combined = thermoelectric.combine(&piezoelectric);
        Self {
            thermoelectric,
            piezoelectric,
            combined,
            tier: classifier::classify(combined.microwatts()),
            thermoelectric_tier: thermoelectric.tier(),
            piezoelectric_tier: piezoelectric.tier(),
        }
    }

    /// Source contributing the larger share of the budget
    pub fn dominant_source(&self) -> HarvestSource {
        if self.piezoelectric.power_watts > self.thermoelectric.power_watts {
            HarvestSource::Piezoelectric
        } else {
            HarvestSource::Thermoelectric
        }
    }

    /// Fraction of the combined budget supplied by `source`
    ///
    /// Returns 0 for an empty budget. `Combined` always returns 1 unless the
    /// budget is empty.
    pub fn share(&self, source: HarvestSource) -> f64 {
        if self.combined.power_watts == 0.0 {
            return 0.0;
        }
        let part = match source {
            HarvestSource::Thermoelectric => self.thermoelectric.power_watts,
            HarvestSource::Piezoelectric => self.piezoelectric.power_watts,
            HarvestSource::Combined => self.combined.power_watts,
        };
        part / self.combined.power_watts
    }

    /// Human-readable meaning of the combined tier
    pub fn interpretation(&self) -> &'static str {
        self.tier.interpretation(HarvestSource::Combined)
    }
}

impl fmt::Display for HarvestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Integrated Energy Harvesting Estimate -----")?;
        writeln!(
            f,
            "Thermoelectric power: {:.3} microwatts ({})",
            self.thermoelectric.microwatts(),
            self.thermoelectric_tier
        )?;
        writeln!(
            f,
            "Piezoelectric power:  {:.3} microwatts ({})",
            self.piezoelectric.microwatts(),
            self.piezoelectric_tier
        )?;
        writeln!(f, "-------------------------------------------------")?;
        writeln!(
            f,
            "Total estimated power: {:.3} microwatts ({})",
            self.combined.microwatts(),
            self.tier
        )?;
        writeln!(f, "-------------------------------------------------")?;
        write!(f, "Interpretation: {}", self.interpretation())
    }
}

/// Runs both harvest models and builds the combined budget
#[derive(Debug, Clone, Copy, Default)]
pub struct HarvestAggregator {
    thermoelectric: ThermoelectricModel,
    piezoelectric: PiezoelectricModel,
}

impl HarvestAggregator {
    /// Create an aggregator over the standard models
    pub const fn new() -> Self {
        Self {
            thermoelectric: ThermoelectricModel::new(),
            piezoelectric: PiezoelectricModel::new(),
        }
    }

    /// Evaluate both sources and combine them
    pub fn aggregate(
        &self,
        thermo: &ThermoelectricParameters,
        piezo: &PiezoelectricParameters,
    ) -> HarvestResult<HarvestReport> {
        let thermoelectric = self.thermoelectric.estimate(thermo)?;
        let piezoelectric = self.piezoelectric.estimate(piezo)?;

        let report = HarvestReport::from_estimates(thermoelectric, piezoelectric);

        log_debug!(
            "harvest budget: thermo={} W, piezo={} W, combined={} W ({})",
            report.thermoelectric.power_watts,
            report.piezoelectric.power_watts,
            report.combined.power_watts,
            report.tier.label()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::models::utils::approx_eq_relative;

    #[test]
    fn combined_is_sum_of_sources() {
        let thermo = ThermoelectricParameters::implant_baseline();
        let piezo = PiezoelectricParameters::implant_baseline();
        let report = HarvestAggregator::new().aggregate(&thermo, &piezo).unwrap();

        let expected = ThermoelectricModel::new().estimate(&thermo).unwrap().power_watts
            + PiezoelectricModel::new().estimate(&piezo).unwrap().power_watts;
        assert!(approx_eq_relative(report.combined.power_watts, expected, 1e-12));
        assert_eq!(report.combined.source, HarvestSource::Combined);
    }

    #[test]
    fn tiers_are_reported_per_source_and_combined() {
        let report = HarvestAggregator::new()
            .aggregate(
                &ThermoelectricParameters::implant_baseline(),
                &PiezoelectricParameters::implant_baseline(),
            )
            .unwrap();
        assert_eq!(report.thermoelectric_tier, UsabilityTier::Sufficient);
        assert_eq!(report.piezoelectric_tier, UsabilityTier::Insufficient);
        assert_eq!(report.tier, UsabilityTier::Sufficient);
        assert_eq!(report.dominant_source(), HarvestSource::Thermoelectric);
    }

    #[test]
    fn combined_tier_comes_from_the_sum() {
        // Two marginal sources that only clear the sufficient bar together:
        // 1 K gives 2 µW thermoelectric, the piezo element below gives 9 µW.
        let thermo = ThermoelectricParameters::implant_baseline().with_temperature_difference(1.0);
        let piezo = PiezoelectricParameters {
            applied_force_newtons: 100.0,
            charge_constant_coulombs_per_newton: 300e-12,
            capacitance_farads: 1e-9,
            efficiency: 1.0,
            motion_frequency_hz: 20.0,
            ..PiezoelectricParameters::implant_baseline()
        };
        let report = HarvestAggregator::new().aggregate(&thermo, &piezo).unwrap();

        assert_eq!(report.thermoelectric_tier, UsabilityTier::Marginal);
        assert_eq!(report.piezoelectric_tier, UsabilityTier::Marginal);
        assert_eq!(report.tier, UsabilityTier::Sufficient);
    }

    #[test]
    fn failure_in_either_source_aborts() {
        let aggregator = HarvestAggregator::new();
        let bad_thermo = ThermoelectricParameters {
            internal_resistance_ohms: 0.0,
            load_resistance_ohms: 0.0,
            ..ThermoelectricParameters::implant_baseline()
        };
        assert_eq!(
            aggregator.aggregate(&bad_thermo, &PiezoelectricParameters::implant_baseline()),
            Err(DomainError::ZeroResistance { internal_ohms: 0.0, load_ohms: 0.0 })
        );

        let bad_piezo = PiezoelectricParameters::implant_baseline().with_efficiency(2.0);
        let err = aggregator
            .aggregate(&ThermoelectricParameters::implant_baseline(), &bad_piezo)
            .unwrap_err();
        assert_eq!(err.parameter(), Some("efficiency"));
    }

    #[test]
    fn overflow_in_either_source_aborts() {
        let huge_piezo = PiezoelectricParameters {
            applied_force_newtons: 1e300,
            charge_constant_coulombs_per_newton: 1e10,
            motion_frequency_hz: 0.0,
            ..PiezoelectricParameters::implant_baseline()
        };
        let result = HarvestAggregator::new()
            .aggregate(&ThermoelectricParameters::implant_baseline(), &huge_piezo);
        assert!(matches!(result, Err(DomainError::NonFinite { .. })));
    }

    #[test]
    fn shares_add_up() {
        let report = HarvestAggregator::new()
            .aggregate(
                &ThermoelectricParameters::implant_baseline(),
                &PiezoelectricParameters::implant_baseline(),
            )
            .unwrap();
        let total = report.share(HarvestSource::Thermoelectric) + report.share(HarvestSource::Piezoelectric);
        assert!(approx_eq_relative(total, 1.0, 1e-12));
    }

    #[test]
    fn empty_budget_has_no_shares() {
        let thermo = ThermoelectricParameters::implant_baseline().with_temperature_difference(0.0);
        let piezo = PiezoelectricParameters::implant_baseline().with_frequency(0.0);
        let report = HarvestAggregator::new().aggregate(&thermo, &piezo).unwrap();
        assert_eq!(report.combined.power_watts, 0.0);
        assert_eq!(report.share(HarvestSource::Thermoelectric), 0.0);
        assert_eq!(report.tier, UsabilityTier::Insufficient);
    }

    #[cfg(feature = "std")]
    #[test]
    fn report_renders_budget_block() {
        let report = HarvestAggregator::new()
            .aggregate(
                &ThermoelectricParameters::implant_baseline(),
                &PiezoelectricParameters::implant_baseline(),
            )
            .unwrap();
        let text = report.to_string();
        assert!(text.contains("Thermoelectric power: 50.000 microwatts (sufficient)"));
        assert!(text.contains("Piezoelectric power:  0.000 microwatts (insufficient)"));
        assert!(text.contains("Total estimated power: 50.000 microwatts (sufficient)"));
    }
}
