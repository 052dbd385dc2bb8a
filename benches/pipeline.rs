use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inmet_eto::{aggregate_daily, EtoCalculator, HourlyField, Normalizer, Pipeline, RawHourlyRow};

/// One year of hourly rows with plausible values.
fn station_year() -> Vec<RawHourlyRow> {
    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    start
        .iter_days()
        .take(365)
        .flat_map(|day| (0..24u32).map(move |hour| (day, hour)))
        .enumerate()
        .map(|(i, (day, hour))| {
            let radiation = if (9..=21).contains(&hour) { "1450,5" } else { "" };
            RawHourlyRow::new(i + 2, day.format("%d/%m/%Y").to_string(), (hour * 100).to_string())
                .with(HourlyField::TemperatureMax, "28,4")
                .with(HourlyField::TemperatureMin, "21,7")
                .with(HourlyField::HumidityMax, "88")
                .with(HourlyField::HumidityMin, "61")
                .with(HourlyField::WindSpeed, "1,9")
                .with(HourlyField::WindDirection, "110")
                .with(HourlyField::WindGust, "4,8")
                .with(HourlyField::Radiation, radiation)
                .with(HourlyField::Rainfall, "0,0")
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = station_year();
    let hourly = Normalizer::default().normalize(&rows).records;
    let calculator = EtoCalculator::default();

    c.bench_function("normalize", |b| {
        b.iter(|| Normalizer::default().normalize(black_box(&rows)))
    });
    c.bench_function("aggregate_and_enrich", |b| {
        b.iter(|| calculator.enrich(&aggregate_daily(black_box(&hourly))))
    });
    c.bench_function("pipeline", |b| b.iter(|| Pipeline::new().run(black_box(&rows))));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
