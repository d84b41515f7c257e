//! Throughput of single-source estimates and the combined budget

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harvest_core::{
    aggregate_harvest, estimate_piezoelectric_power, estimate_thermoelectric_power,
    PiezoelectricParameters, ThermoelectricParameters,
};

fn bench_models(c: &mut Criterion) {
    let thermo = ThermoelectricParameters::implant_baseline();
    let piezo = PiezoelectricParameters::implant_baseline();

    c.bench_function("thermoelectric_estimate", |b| {
        b.iter(|| estimate_thermoelectric_power(black_box(&thermo)))
    });

    c.bench_function("piezoelectric_estimate", |b| {
        b.iter(|| estimate_piezoelectric_power(black_box(&piezo)))
    });

    c.bench_function("aggregate_harvest", |b| {
        b.iter(|| aggregate_harvest(black_box(&thermo), black_box(&piezo)))
    });
}

fn bench_load_sweep(c: &mut Criterion) {
    let thermo = ThermoelectricParameters::implant_baseline();

    c.bench_function("thermoelectric_load_sweep_100", |b| {
        b.iter(|| {
            (1..=100)
                .map(|load| thermo.with_load(load as f64))
                .filter_map(|params| estimate_thermoelectric_power(&params).ok())
                .fold(0.0f64, |best, estimate| best.max(estimate.power_watts))
        })
    });
}

criterion_group!(benches, bench_models, bench_load_sweep);
criterion_main!(benches);
