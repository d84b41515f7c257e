//! Usability Thresholds
//!
//! Power levels at which an implant's duty cycle changes character. Both
//! thresholds are inclusive lower bounds of the higher tier.

/// Conversion factor from watts to microwatts.
pub const MICROWATTS_PER_WATT: f64 = 1e6;

/// Minimum harvest for continuous ultra-low-power sensing (µW).
///
/// At or above this, sensing logic plus short radio bursts can run
/// without long accumulation periods.
pub const SUFFICIENT_THRESHOLD_UW: f64 = 10.0;

/// Minimum harvest for buffered, duty-cycled operation (µW).
///
/// At or above this, the implant works if energy is stored and
/// transmissions are duty-cycled.
pub const MARGINAL_THRESHOLD_UW: f64 = 1.0;
