//! Usability Classification
//!
//! Maps a harvested power level to a qualitative tier describing what an
//! implant can do with it.
//!
//! ## Tiers
//!
//! ```text
//!   power (µW)   0 ─────────── 1 ─────────── 10 ─────────── ∞
//!   tier          Insufficient │   Marginal   │  Sufficient
//!                              └ inclusive    └ inclusive
//! ```
//!
//! Each boundary belongs to the higher tier: exactly 10 µW is `Sufficient`,
//! exactly 1 µW is `Marginal`. The boundaries live in one ordered table,
//! [`TIER_BOUNDARIES`], scanned from the highest threshold down.
//!
//! Implants are not expected to run a radio continuously. The strategy is to
//! log quietly and transmit in bursts, so even a `Marginal` harvest can be
//! useful with storage and duty cycling.

use core::fmt;

use crate::constants::tiers::{MARGINAL_THRESHOLD_UW, SUFFICIENT_THRESHOLD_UW};
use crate::power::HarvestSource;

/// Qualitative usability of a harvested power level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum UsabilityTier {
    /// Too little to act on without long energy accumulation
    Insufficient = 0,
    /// Usable with energy storage and duty-cycled transmission
    Marginal = 1,
    /// Can sustain ultra-low-power sensing plus short radio bursts
    Sufficient = 2,
}

/// Inclusive lower bound (µW) of each tier, highest first
pub const TIER_BOUNDARIES: [(f64, UsabilityTier); 2] = [
    (SUFFICIENT_THRESHOLD_UW, UsabilityTier::Sufficient),
    (MARGINAL_THRESHOLD_UW, UsabilityTier::Marginal),
];

/// Classify a power level given in microwatts
///
/// NaN never satisfies a boundary and falls through to `Insufficient`.
pub fn classify(power_microwatts: f64) -> UsabilityTier {
    TIER_BOUNDARIES
        .iter()
        .find(|(threshold, _)| power_microwatts >= *threshold)
        .map(|&(_, tier)| tier)
        .unwrap_or(UsabilityTier::Insufficient)
}

impl UsabilityTier {
    /// Short label for tables and logs
    pub const fn label(&self) -> &'static str {
        match self {
            UsabilityTier::Sufficient => "sufficient",
            UsabilityTier::Marginal => "marginal",
            UsabilityTier::Insufficient => "insufficient",
        }
    }

    /// Inclusive lower bound of this tier in microwatts
    pub const fn threshold_microwatts(&self) -> f64 {
        match self {
            UsabilityTier::Sufficient => SUFFICIENT_THRESHOLD_UW,
            UsabilityTier::Marginal => MARGINAL_THRESHOLD_UW,
            UsabilityTier::Insufficient => 0.0,
        }
    }

    /// What this tier means for an implant powered by `source`
    pub const fn interpretation(&self, source: HarvestSource) -> &'static str {
        match (source, self) {
            (HarvestSource::Thermoelectric, UsabilityTier::Sufficient) =>
                "This could run ultra-low-power sensing plus short wireless bursts.",
            (HarvestSource::Thermoelectric, UsabilityTier::Marginal) =>
                "Borderline usable. Needs energy storage and duty cycling.",
            (HarvestSource::Thermoelectric, UsabilityTier::Insufficient) =>
                "Very low harvest. Energy must be stored over time before doing anything.",
            (HarvestSource::Piezoelectric, UsabilityTier::Sufficient) =>
                "Motion harvesting here can realistically power sensing logic.",
            (HarvestSource::Piezoelectric, UsabilityTier::Marginal) =>
                "Usable if energy is buffered and transmit is duty-cycled.",
            (HarvestSource::Piezoelectric, UsabilityTier::Insufficient) =>
                "Very low harvest. Must accumulate charge over time before sending data.",
            (HarvestSource::Combined, UsabilityTier::Sufficient) =>
                "The combined budget supports continuous sensing with burst telemetry.",
            (HarvestSource::Combined, UsabilityTier::Marginal) =>
                "The combined budget works with a storage element and duty-cycled radio.",
            (HarvestSource::Combined, UsabilityTier::Insufficient) =>
                "Even combined, the harvest only supports rare, accumulated transmissions.",
        }
    }

    /// Operating caveat attached to a source, independent of tier
    pub const fn caveat(source: HarvestSource) -> &'static str {
        match source {
            HarvestSource::Thermoelectric =>
                "Implant strategy is not constant radio: log quietly, then transmit in bursts.",
            HarvestSource::Piezoelectric =>
                "Piezo only works with repeated motion; implants in low-motion areas get less.",
            HarvestSource::Combined =>
                "Both sources vary with placement; budget against the weaker scenario.",
        }
    }
}

impl fmt::Display for UsabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for UsabilityTier {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_higher_tier() {
        assert_eq!(classify(10.0), UsabilityTier::Sufficient);
        assert_eq!(classify(9.999999), UsabilityTier::Marginal);
        assert_eq!(classify(1.0), UsabilityTier::Marginal);
        assert_eq!(classify(0.999999), UsabilityTier::Insufficient);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0.0), UsabilityTier::Insufficient);
        assert_eq!(classify(1e9), UsabilityTier::Sufficient);
        assert_eq!(classify(f64::INFINITY), UsabilityTier::Sufficient);
        assert_eq!(classify(f64::NAN), UsabilityTier::Insufficient);
    }

    #[test]
    fn table_is_ordered_highest_first() {
        assert!(TIER_BOUNDARIES.windows(2).all(|w| w[0].0 > w[1].0 && w[0].1 > w[1].1));
    }

    #[test]
    fn thresholds_round_trip_through_classify() {
        for tier in [UsabilityTier::Sufficient, UsabilityTier::Marginal, UsabilityTier::Insufficient] {
            assert_eq!(classify(tier.threshold_microwatts()), tier);
        }
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(UsabilityTier::Sufficient > UsabilityTier::Marginal);
        assert!(UsabilityTier::Marginal > UsabilityTier::Insufficient);
    }

    #[test]
    fn interpretation_depends_on_source() {
        let thermo = UsabilityTier::Marginal.interpretation(HarvestSource::Thermoelectric);
        let piezo = UsabilityTier::Marginal.interpretation(HarvestSource::Piezoelectric);
        assert_ne!(thermo, piezo);
        assert!(thermo.contains("duty cycling"));
    }
}
