//! Combined Energy Budget Example
//!
//! Runs both harvest models for two implant placements and prints the
//! integrated budget for each.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_energy_budget
//! ```

use harvest_core::{
    aggregate_harvest,
    constants::implant::{SKIN_MOTION_FREQUENCY_HZ, SKIN_SURFACE_DELTA_K},
    DomainError, HarvestSource, PiezoelectricParameters, ThermoelectricParameters,
};

fn main() -> Result<(), DomainError> {
    let scenarios = [
        (
            "Deep implant (5 K, 2 Hz)",
            ThermoelectricParameters::implant_baseline(),
            PiezoelectricParameters::implant_baseline(),
        ),
        (
            "Skin surface (3 K, 1.2 Hz)",
            ThermoelectricParameters::implant_baseline()
                .with_temperature_difference(SKIN_SURFACE_DELTA_K),
            PiezoelectricParameters::implant_baseline().with_frequency(SKIN_MOTION_FREQUENCY_HZ),
        ),
    ];

    for (name, thermo, piezo) in &scenarios {
        println!("{}", name);
        let report = aggregate_harvest(thermo, piezo)?;
        println!("{}", report);
        println!(
            "Thermoelectric share: {:.1}%",
            report.share(HarvestSource::Thermoelectric) * 100.0
        );
        println!();
    }

    Ok(())
}
