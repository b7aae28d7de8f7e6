use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotir_vedic_base::{
    GrahaLongitudes, Nakshatra, ZodiacSign, ascendant_longitude_deg, detect_yogas, guna_milan,
    nakshatra_from_longitude, obliquity_deg, sign_from_longitude, vimshottari_periods,
};

fn classification_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("classification");
    group.bench_function("sign_from_longitude", |b| {
        b.iter(|| sign_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn lagna_bench(c: &mut Criterion) {
    let eps = obliquity_deg(0.24);

    c.bench_function("ascendant_longitude", |b| {
        b.iter(|| ascendant_longitude_deg(black_box(212.3), black_box(28.6), black_box(eps)))
    });
}

fn dasha_bench(c: &mut Criterion) {
    c.bench_function("vimshottari_periods", |b| {
        b.iter(|| vimshottari_periods(black_box(2_451_545.0), black_box(123.456)))
    });
}

fn yoga_bench(c: &mut Criterion) {
    let positions = GrahaLongitudes {
        longitudes: [91.0, 200.0, 10.0, 95.0, 92.0, 272.0, 150.0, 30.0, 210.0],
    };

    c.bench_function("detect_yogas", |b| b.iter(|| detect_yogas(black_box(&positions))));
}

fn guna_bench(c: &mut Criterion) {
    c.bench_function("guna_milan", |b| {
        b.iter(|| {
            guna_milan(
                black_box(ZodiacSign::Cancer),
                black_box(Nakshatra::Pushya),
                black_box(ZodiacSign::Capricorn),
                black_box(Nakshatra::Shravana),
            )
        })
    });
}

criterion_group!(
    benches,
    classification_bench,
    lagna_bench,
    dasha_bench,
    yoga_bench,
    guna_bench
);
criterion_main!(benches);
