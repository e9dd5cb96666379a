use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_ephemeris::{Horizon, spa};
use std::hint::black_box;

fn benchmark_single_day(c: &mut Criterion) {
    let day = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

    c.bench_function("sunrise_single", |b| {
        b.iter(|| {
            spa::sunrise_transit_set(
                black_box(day),
                black_box(52.52),
                black_box(13.405),
                black_box(69.0),
                black_box(Horizon::SunriseSunset),
            )
            .unwrap()
        });
    });

    c.bench_function("sunrise_utc_single", |b| {
        b.iter(|| {
            spa::sunrise_transit_set_utc(
                black_box(2023),
                black_box(6),
                black_box(21),
                black_box(52.52),
                black_box(13.405),
                black_box(69.0),
                black_box(Horizon::SunriseSunset),
            )
            .unwrap()
        });
    });
}

fn benchmark_twilight_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("twilight_presets");
    group.throughput(Throughput::Elements(Horizon::PRESETS.len() as u64));
    let day = "2023-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

    group.bench_function("individual", |b| {
        b.iter(|| {
            for horizon in Horizon::PRESETS {
                black_box(
                    spa::sunrise_transit_set(day, 60.1547, -1.1494, 69.2, horizon).unwrap(),
                );
            }
        });
    });

    group.bench_function("batch", |b| {
        b.iter(|| {
            black_box(
                spa::sunrise_transit_set_batch(day, 60.1547, -1.1494, 69.2, Horizon::PRESETS)
                    .unwrap(),
            )
        });
    });

    group.finish();
}

fn benchmark_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunrise_year");
    let start = "2023-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let days: Vec<DateTime<Utc>> = (0..365).map(|d| start + Duration::days(d)).collect();
    group.throughput(Throughput::Elements(days.len() as u64));

    for latitude in [0.0, 52.52, 69.65] {
        group.bench_with_input(BenchmarkId::from_parameter(latitude), &latitude, |b, &latitude| {
            b.iter(|| {
                for &day in &days {
                    black_box(
                        spa::sunrise_transit_set(day, latitude, 13.405, 69.0, Horizon::default())
                            .unwrap(),
                    );
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_day,
    benchmark_twilight_batch,
    benchmark_year
);
criterion_main!(benches);
