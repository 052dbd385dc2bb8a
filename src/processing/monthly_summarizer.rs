use crate::processing::utils::{mean_present, round2, sum_present};
use crate::types::records::daily::EnrichedDailyRecord;
use crate::types::records::monthly::{MonthlyRecord, MonthlySummary, CALENDAR};
use chrono::{Datelike, Month};
use std::collections::HashMap;

/// Rolls enriched days up into twelve calendar months.
///
/// The output is built by walking January to December and looking each month
/// up in the grouped days, so every month is present whatever the input
/// holds. Rainfall and ETo are summed, the rest averaged; missing values are
/// skipped and a month without data keeps every field `None`.
pub fn summarize_monthly(daily: &[EnrichedDailyRecord]) -> MonthlySummary {
    let mut by_month: HashMap<u32, Vec<&EnrichedDailyRecord>> = HashMap::new();
    for day in daily {
        by_month.entry(day.date().month()).or_default().push(day);
    }

    MonthlySummary::new(CALENDAR.map(|month| {
        match by_month.get(&month.number_from_month()) {
            Some(days) => summarize_month(month, days),
            None => MonthlyRecord::empty(month),
        }
    }))
}

fn summarize_month(month: Month, days: &[&EnrichedDailyRecord]) -> MonthlyRecord {
    let mean = |get: fn(&EnrichedDailyRecord) -> Option<f64>| {
        mean_present(days.iter().map(|d| get(d))).map(round2)
    };
    let sum = |get: fn(&EnrichedDailyRecord) -> Option<f64>| {
        sum_present(days.iter().map(|d| get(d))).map(round2)
    };

    MonthlyRecord {
        month,
        rainfall_total: sum(|d| d.daily.rainfall_total),
        eto_total: sum(|d| d.eto),
        mean_temperature: mean(|d| d.mean_temperature),
        temperature_max: mean(|d| d.daily.temperature_max),
        temperature_min: mean(|d| d.daily.temperature_min),
        wind_speed: mean(|d| d.daily.wind_speed),
        radiation: mean(|d| d.daily.radiation_total),
        mean_humidity: mean(|d| d.mean_humidity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::records::daily::DailyRecord;
    use chrono::NaiveDate;

    fn enriched(
        date: NaiveDate,
        wind: Option<f64>,
        eto: Option<f64>,
        rain: f64,
    ) -> EnrichedDailyRecord {
        EnrichedDailyRecord {
            daily: DailyRecord {
                date,
                temperature_max: Some(30.0),
                temperature_min: Some(18.0),
                humidity_max: Some(90.0),
                humidity_min: Some(40.0),
                wind_speed: wind,
                wind_direction: None,
                wind_gust: None,
                radiation_total: Some(18.5),
                rainfall_total: Some(rain),
            },
            mean_temperature: Some(24.0),
            mean_humidity: Some(65.0),
            saturation_vapor_pressure: None,
            actual_vapor_pressure: None,
            net_radiation: None,
            vapor_pressure_slope: None,
            eto,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn always_twelve_months_in_calendar_order() {
        let days = vec![
            enriched(date(2023, 11, 2), Some(1.0), Some(3.0), 0.0),
            enriched(date(2023, 2, 5), Some(1.0), Some(3.0), 0.0),
        ];
        let summary = summarize_monthly(&days);

        let months: Vec<Month> = summary.iter().map(|r| r.month).collect();
        assert_eq!(months, CALENDAR.to_vec());
        assert_eq!(summary.rows()[0].month_name(), "January");
        assert!(summary.get(Month::January).is_empty());
        assert!(!summary.get(Month::February).is_empty());
        assert!(!summary.get(Month::November).is_empty());
    }

    #[test]
    fn empty_input_gives_twelve_empty_rows() {
        let summary = summarize_monthly(&[]);
        assert_eq!(summary.rows().len(), 12);
        assert!(summary.iter().all(MonthlyRecord::is_empty));
        assert_eq!(summary, MonthlySummary::default());
    }

    #[test]
    fn sums_and_means_per_month() {
        let days = vec![
            enriched(date(2023, 3, 1), Some(2.0), Some(4.25), 12.4),
            enriched(date(2023, 3, 2), Some(3.0), Some(3.5), 0.6),
        ];
        let march = summarize_monthly(&days).get(Month::March).clone();

        assert_eq!(march.rainfall_total, Some(13.0));
        assert_eq!(march.eto_total, Some(7.75));
        assert_eq!(march.wind_speed, Some(2.5));
        assert_eq!(march.mean_temperature, Some(24.0));
        assert_eq!(march.radiation, Some(18.5));
        assert_eq!(march.mean_humidity, Some(65.0));
    }

    #[test]
    fn day_without_wind_is_left_out_of_mean_wind() {
        let days = vec![
            enriched(date(2023, 6, 1), Some(4.0), Some(3.0), 0.0),
            enriched(date(2023, 6, 2), None, None, 0.0),
        ];
        let june = summarize_monthly(&days).get(Month::June).clone();

        assert_eq!(june.wind_speed, Some(4.0));
        assert_eq!(june.eto_total, Some(3.0));
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = enriched(date(2023, 8, 1), Some(2.0), Some(4.0), 1.0);
        let b = enriched(date(2023, 1, 9), Some(1.0), Some(2.0), 5.0);
        let c = enriched(date(2023, 8, 2), Some(3.0), Some(5.0), 0.0);

        let forward = summarize_monthly(&[a.clone(), b.clone(), c.clone()]);
        let backward = summarize_monthly(&[c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn same_month_of_different_years_is_pooled() {
        let days = vec![
            enriched(date(2022, 5, 10), Some(1.0), Some(2.0), 3.0),
            enriched(date(2023, 5, 10), Some(1.0), Some(2.0), 4.0),
        ];
        let may = summarize_monthly(&days).get(Month::May).clone();
        assert_eq!(may.rainfall_total, Some(7.0));
        assert_eq!(may.eto_total, Some(4.0));
    }
}
