//! Thermoelectric Harvest Example
//!
//! Estimates power from a miniature Bi2Te3 generator driven by the gradient
//! between body core and the implant's outer face.
//!
//! ## What You'll Learn
//!
//! - Building thermoelectric parameters from a Celsius difference
//! - Reading the intermediate circuit quantities
//! - Interpreting the result for an implant
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_thermoelectric
//! ```

use harvest_core::{
    constants::materials::BI2TE3_SEEBECK_V_PER_K, HarvestModel, HarvestSource,
    ThermoelectricModel, ThermoelectricParameters, UsabilityTier,
};

fn main() -> Result<(), harvest_core::DomainError> {
    println!("=== Thermoelectric Harvest Model ===");

    // ~37°C core vs ~32°C near the surface
    let params = ThermoelectricParameters::from_celsius_difference(
        5.0,
        BI2TE3_SEEBECK_V_PER_K,
        100,
        50.0,
        50.0,
    );

    println!("Temperature difference (ΔT):         {:.2} °C", params.temperature_difference_kelvin);
    println!("Seebeck per junction:                {:.1} µV/K", params.seebeck_coefficient_volts_per_kelvin * 1e6);
    println!("Number of junctions:                 {}", params.junction_count);
    println!("Load resistance:                     {:.1} Ω", params.load_resistance_ohms);
    println!("Internal resistance:                 {:.1} Ω", params.internal_resistance_ohms);
    println!();

    let model = ThermoelectricModel::new();
    let point = model.operating_point(&params)?;
    println!("{}", point);

    let tier = model.estimate(&params)?.tier();
    println!();
    println!("Interpretation: {}", tier.interpretation(HarvestSource::Thermoelectric));
    println!("Note: {}", UsabilityTier::caveat(HarvestSource::Thermoelectric));

    // Mismatched loads deliver less than the matched 50 Ω load
    println!();
    println!("Load sweep:");
    for load in [10.0, 25.0, 50.0, 100.0, 200.0] {
        let estimate = model.estimate(&params.with_load(load))?;
        println!("  {:>6.1} Ω -> {}", load, estimate);
    }

    Ok(())
}
