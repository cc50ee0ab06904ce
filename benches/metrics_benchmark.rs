use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitals_tracker::metrics;

fn benchmark_derived_metrics(c: &mut Criterion) {
    let dob = NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date");
    let as_of = NaiveDate::from_ymd_opt(2026, 8, 22).expect("valid date");

    let mut group = c.benchmark_group("derived_metrics");

    group.bench_function("age", |b| {
        b.iter(|| metrics::age(black_box(dob), black_box(as_of)))
    });

    group.bench_function("bmi", |b| {
        b.iter(|| metrics::bmi(black_box(70.0), black_box(175.0)))
    });

    group.bench_function("bmr_tdee_chain", |b| {
        b.iter(|| {
            let bmr = metrics::bmr(
                black_box(70.0),
                black_box(175.0),
                black_box(30),
                black_box("male"),
            );
            metrics::tdee(black_box(bmr), black_box("moderate"))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_derived_metrics);
criterion_main!(benches);
