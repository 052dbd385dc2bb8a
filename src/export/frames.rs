//! Converts result records into polars `DataFrame`s with stable column names,
//! ready for spreadsheet export or charting.

use crate::types::field::HourlyField;
use crate::types::records::daily::EnrichedDailyRecord;
use crate::types::records::hourly::HourlyRecord;
use crate::types::records::monthly::{MonthlyRecord, MonthlySummary};
use chrono::NaiveDate;
use polars::prelude::*;

fn float_column<I>(name: &str, values: I) -> Column
where
    I: IntoIterator<Item = Option<f64>>,
{
    Series::new(name.into(), values.into_iter().collect::<Vec<_>>()).into()
}

fn text_column<I>(name: &str, values: I) -> Column
where
    I: IntoIterator<Item = String>,
{
    Series::new(name.into(), values.into_iter().collect::<Vec<_>>()).into()
}

fn date_column<I>(name: &str, dates: I) -> Column
where
    I: IntoIterator<Item = NaiveDate>,
{
    DateChunked::from_naive_date(name.into(), dates)
        .into_series()
        .into()
}

/// Cleaned hourly table. Numeric columns are named by [`HourlyField::column_name`].
pub fn hourly_frame(records: &[HourlyRecord]) -> PolarsResult<DataFrame> {
    let mut columns = vec![
        date_column("local_day", records.iter().map(|r| r.local_day)),
        text_column("local_time", records.iter().map(HourlyRecord::local_time_label)),
        text_column(
            "local_timestamp",
            records
                .iter()
                .map(|r| r.local_timestamp.format("%Y-%m-%d %H:%M").to_string()),
        ),
    ];
    columns.extend(HourlyField::ALL.iter().map(|&field| {
        float_column(field.column_name(), records.iter().map(|r| r.value(field)))
    }));
    DataFrame::new(columns)
}

/// Daily aggregates with the ETo intermediates.
pub fn daily_frame(records: &[EnrichedDailyRecord]) -> PolarsResult<DataFrame> {
    let numeric = |name: &str, get: fn(&EnrichedDailyRecord) -> Option<f64>| {
        float_column(name, records.iter().map(get))
    };

    DataFrame::new(vec![
        date_column("date", records.iter().map(EnrichedDailyRecord::date)),
        numeric("temp_max_c", |d| d.daily.temperature_max),
        numeric("temp_min_c", |d| d.daily.temperature_min),
        numeric("humidity_max_pct", |d| d.daily.humidity_max),
        numeric("humidity_min_pct", |d| d.daily.humidity_min),
        numeric("wind_speed_ms", |d| d.daily.wind_speed),
        numeric("wind_direction_deg", |d| d.daily.wind_direction),
        numeric("wind_gust_ms", |d| d.daily.wind_gust),
        numeric("radiation_mj_m2_day", |d| d.daily.radiation_total),
        numeric("rainfall_mm", |d| d.daily.rainfall_total),
        numeric("temp_mean_c", |d| d.mean_temperature),
        numeric("humidity_mean_pct", |d| d.mean_humidity),
        numeric("es_kpa", |d| d.saturation_vapor_pressure),
        numeric("ea_kpa", |d| d.actual_vapor_pressure),
        numeric("rn_mj_m2_day", |d| d.net_radiation),
        numeric("delta_kpa_c", |d| d.vapor_pressure_slope),
        numeric("eto_mm_day", |d| d.eto),
    ])
}

/// Twelve-row monthly summary, January first.
pub fn monthly_frame(summary: &MonthlySummary) -> PolarsResult<DataFrame> {
    let rows = summary.rows();
    let numeric = |name: &str, get: fn(&MonthlyRecord) -> Option<f64>| {
        float_column(name, rows.iter().map(get))
    };

    DataFrame::new(vec![
        text_column("month", rows.iter().map(|r| r.month_name().to_string())),
        numeric("rainfall_mm", |m| m.rainfall_total),
        numeric("eto_mm", |m| m.eto_total),
        numeric("temp_mean_c", |m| m.mean_temperature),
        numeric("temp_max_c", |m| m.temperature_max),
        numeric("temp_min_c", |m| m.temperature_min),
        numeric("wind_speed_ms", |m| m.wind_speed),
        numeric("radiation_mj_m2_day", |m| m.radiation),
        numeric("humidity_mean_pct", |m| m.mean_humidity),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::monthly_summarizer::summarize_monthly;
    use crate::{HourlyField, Pipeline, RawHourlyRow};

    #[test]
    fn hourly_frame_has_one_row_per_record() -> Result<(), Box<dyn std::error::Error>> {
        let rows = vec![
            RawHourlyRow::new(2, "01/01/2023", "1200").with(HourlyField::TemperatureMax, "30,5"),
            RawHourlyRow::new(3, "01/01/2023", "1300").with(HourlyField::TemperatureMax, "x"),
        ];
        let output = Pipeline::new().run(&rows);
        let df = hourly_frame(&output.hourly)?;

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("local_day")?.dtype(), &DataType::Date);
        let tmax = df.column("temp_max_c")?.f64()?;
        assert_eq!(tmax.get(0), Some(30.5));
        assert_eq!(tmax.get(1), None);
        let time = df.column("local_time")?.str()?;
        assert_eq!(time.get(0), Some("09:00"));
        Ok(())
    }

    #[test]
    fn daily_frame_carries_eto_columns() -> Result<(), Box<dyn std::error::Error>> {
        let df = daily_frame(&[])?;
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 17);
        assert!(df.column("eto_mm_day").is_ok());
        Ok(())
    }

    #[test]
    fn monthly_frame_always_has_twelve_rows() -> Result<(), Box<dyn std::error::Error>> {
        let df = monthly_frame(&summarize_monthly(&[]))?;
        assert_eq!(df.height(), 12);
        let months = df.column("month")?.str()?;
        assert_eq!(months.get(0), Some("January"));
        assert_eq!(months.get(11), Some("December"));
        assert_eq!(df.column("eto_mm")?.null_count(), 12);
        Ok(())
    }
}
