//! Power estimates and their source tags
//!
//! A [`PowerEstimate`] is the scalar result every model returns. It is built
//! once per evaluation, never mutated, and consumed by the classifier or the
//! aggregator. Power is stored in watts; microwatts are derived on demand
//! because that is the scale implants are discussed in.

use core::fmt;

use crate::classifier::{self, UsabilityTier};
use crate::constants::MICROWATTS_PER_WATT;

/// Energy source an estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum HarvestSource {
    /// Body-heat gradient across a thermoelectric generator
    Thermoelectric = 0,
    /// Mechanical motion deforming a piezoelectric element
    Piezoelectric = 1,
    /// Sum of every source in a budget
    Combined = 2,
}

impl HarvestSource {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            HarvestSource::Thermoelectric => "thermoelectric",
            HarvestSource::Piezoelectric => "piezoelectric",
            HarvestSource::Combined => "combined",
        }
    }
}

impl fmt::Display for HarvestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Harvested electrical power from one source (or a sum of sources)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerEstimate {
    /// Average power delivered, in watts (never negative)
    pub power_watts: f64,
    /// Which source produced it
    pub source: HarvestSource,
}

impl PowerEstimate {
    /// Create an estimate
    pub const fn new(power_watts: f64, source: HarvestSource) -> Self {
        Self { power_watts, source }
    }

    /// Power in microwatts
    pub fn microwatts(&self) -> f64 {
        self.power_watts * MICROWATTS_PER_WATT
    }

    /// Usability tier of this estimate on its own
    pub fn tier(&self) -> UsabilityTier {
        classifier::classify(self.microwatts())
    }

    /// Sum two estimates into a combined budget entry
    pub fn combine(&self, other: &PowerEstimate) -> PowerEstimate {
        PowerEstimate::new(self.power_watts + other.power_watts, HarvestSource::Combined)
    }
}

impl fmt::Display for PowerEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} µW ({})", self.microwatts(), self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn microwatt_conversion() {
        let estimate = PowerEstimate::new(5e-5, HarvestSource::Thermoelectric);
        assert!((estimate.microwatts() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn combine_tags_as_combined() {
        let a = PowerEstimate::new(1e-6, HarvestSource::Thermoelectric);
        let b = PowerEstimate::new(2e-6, HarvestSource::Piezoelectric);
        let sum = a.combine(&b);
        assert_eq!(sum.source, HarvestSource::Combined);
        assert!((sum.power_watts - 3e-6).abs() < 1e-18);
    }

    #[test]
    fn source_names() {
        assert_eq!(HarvestSource::Thermoelectric.name(), "thermoelectric");
        assert_eq!(HarvestSource::Combined.name(), "combined");
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_in_microwatts() {
        let estimate = PowerEstimate::new(2.5e-6, HarvestSource::Piezoelectric);
        assert_eq!(estimate.to_string(), "2.500 µW (piezoelectric)");
    }
}
