use airstat::{AirQualityReport, AirQualityTable, Reading, ThresholdScale};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A table the size of a full month of hourly readings, with a sprinkling of
/// missing values.
fn synthetic_table(rows: usize) -> AirQualityTable {
    let start = NaiveDate::from_ymd_opt(2024, 12, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let readings = (0..rows)
        .map(|i| {
            let f = i as f64;
            Reading {
                co: Some(200.0 + (f % 97.0)),
                no: if i % 13 == 0 { None } else { Some(f % 3.0) },
                no2: Some(f % 11.0),
                o3: Some(60.0 + (f % 29.0)),
                so2: Some(f % 5.0),
                pm2_5: if i % 7 == 0 { None } else { Some(f % 17.0) },
                pm10: Some(f % 23.0),
                nh3: Some(f % 2.0),
                ..Reading::empty(start + Duration::hours(i as i64))
            }
        })
        .collect();
    AirQualityTable::from_readings(readings)
}

fn bench_report(c: &mut Criterion) {
    let table = synthetic_table(24 * 31);
    c.bench_function("report_build_744_rows", |b| {
        b.iter(|| AirQualityReport::build(black_box(&table), &ThresholdScale))
    });
    c.bench_function("correlation_744_rows", |b| {
        b.iter(|| black_box(&table).correlation())
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
