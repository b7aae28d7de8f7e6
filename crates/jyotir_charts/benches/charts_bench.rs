use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotir_charts::{
    compute_dasha_periods, compute_name_compatibility, compute_rising_sign, compute_yogas,
    navamsa_for_birth, upapada_for_birth,
};
use jyotir_time::CivilTime;

fn birth() -> CivilTime {
    CivilTime::new(1990, 7, 15, 14, 30, 0.0)
}

fn chart_bench(c: &mut Criterion) {
    let t = birth();

    let mut group = c.benchmark_group("chart");
    group.bench_function("rising_sign", |b| {
        b.iter(|| compute_rising_sign(black_box(&t), black_box(28.6), black_box(77.2)))
    });
    group.bench_function("dasha_periods", |b| {
        b.iter(|| compute_dasha_periods(black_box(&t)))
    });
    group.bench_function("yogas", |b| b.iter(|| compute_yogas(black_box(&t))));
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    let t = birth();

    let mut group = c.benchmark_group("varga");
    group.bench_function("navamsa", |b| b.iter(|| navamsa_for_birth(black_box(&t))));
    group.bench_function("upapada", |b| {
        b.iter(|| upapada_for_birth(black_box(&t), black_box(28.6), black_box(77.2)))
    });
    group.finish();
}

fn numerology_bench(c: &mut Criterion) {
    c.bench_function("name_compatibility", |b| {
        b.iter(|| compute_name_compatibility(black_box("Aditi Sharma"), black_box("Rohan Verma")))
    });
}

criterion_group!(benches, chart_bench, varga_bench, numerology_bench);
criterion_main!(benches);
