use crate::processing::utils::{max_present, mean_present, min_present, round2, sum_present};
use crate::types::field::HourlyField;
use crate::types::records::daily::DailyRecord;
use crate::types::records::hourly::HourlyRecord;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Groups hourly records by their local day and aggregates each group.
///
/// Temperature extremes are absolute; humidity, wind and gust are means and
/// radiation and rainfall are sums, both rounded to 2 decimals. Missing
/// readings are skipped and a field with no reading in a day stays `None`.
/// Output is sorted by date and only contains days present in the input.
pub fn aggregate_daily(hourly: &[HourlyRecord]) -> Vec<DailyRecord> {
    let mut days: BTreeMap<NaiveDate, Vec<&HourlyRecord>> = BTreeMap::new();
    for record in hourly {
        days.entry(record.local_day).or_default().push(record);
    }
    debug!("Aggregating {} hourly records into {} days", hourly.len(), days.len());

    days.into_iter()
        .map(|(date, records)| aggregate_day(date, &records))
        .collect()
}

fn aggregate_day(date: NaiveDate, records: &[&HourlyRecord]) -> DailyRecord {
    let values = move |field: HourlyField| records.iter().map(move |r| r.value(field));
    let mean = |field| mean_present(values(field)).map(round2);
    let sum = |field| sum_present(values(field)).map(round2);

    DailyRecord {
        date,
        temperature_max: max_present(values(HourlyField::TemperatureMax)),
        temperature_min: min_present(values(HourlyField::TemperatureMin)),
        humidity_max: mean(HourlyField::HumidityMax),
        humidity_min: mean(HourlyField::HumidityMin),
        wind_speed: mean(HourlyField::WindSpeed),
        wind_direction: mean(HourlyField::WindDirection),
        wind_gust: mean(HourlyField::WindGust),
        radiation_total: sum(HourlyField::Radiation),
        rainfall_total: sum(HourlyField::Rainfall),
    }
}
