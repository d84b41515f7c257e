//! Piezoelectric Harvest Example
//!
//! Estimates power from a small piezoelectric film compressed by muscle
//! micro-motion, and shows how the domain checks reject bad parameters.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_piezoelectric
//! ```

use harvest_core::{
    DomainError, HarvestModel, HarvestSource, PiezoelectricModel, PiezoelectricParameters,
    UsabilityTier,
};

fn main() -> Result<(), DomainError> {
    println!("=== Piezoelectric Harvest Model ===");

    let params = PiezoelectricParameters::implant_baseline();
    println!("Applied force per cycle:             {:.3} N", params.applied_force_newtons);
    println!("Motion frequency:                    {:.2} Hz", params.motion_frequency_hz);
    println!("Piezo capacitance:                   {:.1} nF", params.capacitance_farads * 1e9);

    let model = PiezoelectricModel::new();
    let cycle = model.cycle(&params)?;
    println!("{}", cycle);

    let tier = model.estimate(&params)?.tier();
    println!();
    println!("Interpretation: {}", tier.interpretation(HarvestSource::Piezoelectric));
    println!("Note: {}", UsabilityTier::caveat(HarvestSource::Piezoelectric));

    // Efficiency is a ratio; values above 1 are rejected, never clamped
    println!();
    match model.estimate(&params.with_efficiency(1.3)) {
        Ok(estimate) => println!("Unexpectedly accepted: {}", estimate),
        Err(err) => println!("Rejected parameter set: {}", err),
    }

    Ok(())
}
