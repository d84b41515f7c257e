//! Material Constants
//!
//! Properties of the transducer materials assumed by the default presets.
//! Real modules vary; these values are feasibility-scale ballparks.

// ===== THERMOELECTRIC =====

/// Seebeck coefficient of a bismuth telluride (Bi2Te3) junction (V/K).
///
/// Voltage generated per kelvin of temperature difference per junction.
/// Roughly 200 µV/K is a common room-temperature figure for Bi2Te3 couples.
///
/// Source: Rowe, CRC Handbook of Thermoelectrics
pub const BI2TE3_SEEBECK_V_PER_K: f64 = 200e-6;

// ===== PIEZOELECTRIC =====

/// Effective charge constant of a thin piezoelectric film (C/N).
///
/// Charge produced per newton of applied force, i.e. 20 pC/N.
/// A simplified lumped figure; PVDF films sit around this order of magnitude.
///
/// Source: Measurement Specialties, Piezo Film Sensors Technical Manual
pub const PIEZO_FILM_CHARGE_CONSTANT_C_PER_N: f64 = 20e-12;

/// Capacitance of a small piezoelectric film element (F).
///
/// Small films are typically tens to hundreds of nanofarads.
pub const PIEZO_FILM_CAPACITANCE_F: f64 = 100e-9;

/// Mechanical-to-electrical capture efficiency of a simple harvester (ratio).
///
/// Fraction of the ideal peak voltage retained after conditioning losses.
pub const PIEZO_CAPTURE_EFFICIENCY: f64 = 0.3;
