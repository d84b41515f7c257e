//! Implant Operating Conditions
//!
//! Baseline conditions for a harvester implanted near the body surface.
//! These feed the `implant_baseline()` presets; nothing in the models reads
//! them directly.

// ===== THERMAL GRADIENT =====

/// Temperature difference between body core and the implant's outer face (K).
///
/// Roughly 37°C core versus 32°C near the surface. A difference in kelvin
/// equals the same difference in degrees Celsius.
pub const CORE_TO_SURFACE_DELTA_K: f64 = 5.0;

/// Temperature difference across a skin-surface module (K).
///
/// Smaller gradient for a module sitting at the skin rather than deeper tissue.
pub const SKIN_SURFACE_DELTA_K: f64 = 3.0;

/// Thermocouple count in a miniature implantable module.
///
/// Kept small because implant volume is severely limited.
pub const IMPLANT_JUNCTION_COUNT: u32 = 100;

/// Internal resistance of a miniature thermoelectric module (Ω).
pub const TEG_INTERNAL_RESISTANCE_OHMS: f64 = 50.0;

/// Load resistance matched to the module (Ω).
///
/// A load equal to the internal resistance gives maximum power transfer.
pub const TEG_MATCHED_LOAD_OHMS: f64 = 50.0;

// ===== MECHANICAL MOTION =====

/// Peak force per compression on an implanted piezo element (N).
///
/// About 100 grams-force; gentle, since the element sits inside tissue.
pub const IMPLANT_PEAK_FORCE_N: f64 = 1.0;

/// Motion frequency near a muscle or joint (Hz).
///
/// Around 1 Hz is a heartbeat; 2 Hz approximates walking micro-motion.
pub const MUSCLE_MOTION_FREQUENCY_HZ: f64 = 2.0;

/// Dominant body-motion frequency at the skin surface (Hz).
pub const SKIN_MOTION_FREQUENCY_HZ: f64 = 1.2;

/// Load the piezo element charges into (Ω).
///
/// High resistance lets voltage build up between compressions.
pub const PIEZO_LOAD_RESISTANCE_OHMS: f64 = 1e6;
