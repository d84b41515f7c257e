//! Core traits for harvest models
//!
//! These traits define the interface every energy source implements.
//! Keep them simple - a model is a pure function of its parameter record.

use crate::errors::HarvestResult;
use crate::power::{HarvestSource, PowerEstimate};

/// Core model trait - implement this for each transducer type
pub trait HarvestModel {
    /// Parameter record this model consumes
    type Parameters;

    /// Which energy source this model describes
    fn source(&self) -> HarvestSource;

    /// Check every parameter against its physical domain
    ///
    /// Called by `estimate` before any arithmetic; exposed so callers
    /// (configuration loaders in particular) can reject a record early.
    fn check(&self, params: &Self::Parameters) -> HarvestResult<()>;

    /// Estimate harvested power for one parameter set
    fn estimate(&self, params: &Self::Parameters) -> HarvestResult<PowerEstimate>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically meaningful (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
