//! Common Domain Checks and Numeric Helpers
//!
//! ## Overview
//!
//! Shared functionality used by every model so that parameter checks behave
//! the same regardless of transducer type.
//!
//! ## Design Principles
//!
//! ### 1. Pure Functions
//! All helpers are pure functions with no side effects, safe to call from
//! interrupt handlers and trivial to test in isolation.
//!
//! ### 2. Report, Never Clamp
//! A value outside its domain produces a [`DomainError`] naming the field.
//! Nothing here substitutes a default or saturates a value.
//!
//! ### 3. Finite First
//! Every check rejects NaN and infinity before comparing, so a NaN never
//! slips through a comparison that happens to evaluate false.
//!
//! ## Common Patterns
//!
//! ```rust,ignore
//! // Resistances must be strictly positive
//! check_positive("load_resistance_ohms", params.load_resistance_ohms)?;
//!
//! // Efficiency is a ratio
//! check_unit_interval("efficiency", params.efficiency)?;
//! ```

use crate::{
    errors::{DomainError, HarvestResult},
    traits::Validatable,
};

/// Reject NaN and infinite values
pub fn check_finite(parameter: &'static str, value: f64) -> HarvestResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { parameter })
    }
}

/// Require a finite value strictly greater than zero
pub fn check_positive(parameter: &'static str, value: f64) -> HarvestResult<()> {
    check_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::OutOfDomain {
            parameter,
            value,
            requirement: "> 0",
        })
    }
}

/// Require a finite value greater than or equal to zero
pub fn check_non_negative(parameter: &'static str, value: f64) -> HarvestResult<()> {
    check_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::OutOfDomain {
            parameter,
            value,
            requirement: ">= 0",
        })
    }
}

/// Require a finite ratio within the closed interval `[0, 1]`
pub fn check_unit_interval(parameter: &'static str, value: f64) -> HarvestResult<()> {
    check_finite(parameter, value)?;
    if !(0.0..=1.0).contains(&value) {
        Err(DomainError::OutOfDomain {
            parameter,
            value,
            requirement: "within [0, 1]",
        })
    } else {
        Ok(())
    }
}

/// Square of a value
#[inline]
pub fn square(value: f64) -> f64 {
    value * value
}

/// Relative closeness test for comparing computed powers
#[cfg(test)]
///
/// Two zeros compare equal; otherwise the difference is scaled by the larger
/// magnitude.
pub fn approx_eq_relative(a: f64, b: f64, tolerance: f64) -> bool {
    let magnitude = |x: f64| if x < 0.0 { -x } else { x };
    let scale = if magnitude(a) > magnitude(b) { magnitude(a) } else { magnitude(b) };
    if scale == 0.0 {
        return true;
    }
    magnitude(a - b) / scale <= tolerance
}
