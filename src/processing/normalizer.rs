//! Turns raw station rows into cleaned hourly records in local time.

use crate::processing::report::{IngestReport, RowRejection};
use crate::types::config::StationClock;
use crate::types::field::HourlyField;
use crate::types::raw_row::RawHourlyRow;
use crate::types::reading::ParsedNumber;
use crate::types::records::hourly::HourlyRecord;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{info, warn};
use std::collections::HashSet;

const KJ_PER_MJ: f64 = 1000.0;

/// Day-first first; ISO forms are what a day-first parser also accepts.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHourly {
    pub records: Vec<HourlyRecord>,
    pub report: IngestReport,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    clock: StationClock,
}

impl Normalizer {
    pub fn new(clock: StationClock) -> Self {
        Self { clock }
    }

    /// Cleans `rows` in order.
    ///
    /// Rows whose timestamp cannot be built, and repeats of an already seen UTC
    /// hour, are left out and listed in the report. Numeric cells that cannot
    /// be read become `None` and are counted per field.
    pub fn normalize(&self, rows: &[RawHourlyRow]) -> NormalizedHourly {
        let mut report = IngestReport {
            rows_read: rows.len(),
            ..Default::default()
        };
        let mut seen = HashSet::with_capacity(rows.len());
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            let utc = match parse_utc_timestamp(&row.date, &row.utc_hour) {
                Ok(utc) => utc,
                Err(reason) => {
                    warn!("Dropping line {}: {}", row.line, reason);
                    report.drop_row(row.line, reason);
                    continue;
                }
            };
            let Some((local, local_day)) = self.localize(utc) else {
                let reason = RowRejection::InvalidDate(row.date.clone());
                warn!(
                    "Dropping line {}: {} (out of range in local time)",
                    row.line, reason
                );
                report.drop_row(row.line, reason);
                continue;
            };
            if !seen.insert(utc) {
                let reason = RowRejection::DuplicateHour(utc);
                warn!("Dropping line {}: {}", row.line, reason);
                report.drop_row(row.line, reason);
                continue;
            }
            records.push(self.to_record(row, local, local_day, &mut report));
        }

        for (field, count) in &report.invalid_cells {
            warn!("{} unparsable value(s) in '{}' treated as missing", count, field);
        }
        info!(
            "Normalized {} of {} hourly rows",
            records.len(),
            report.rows_read
        );

        NormalizedHourly { records, report }
    }

    fn localize(&self, utc: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDate)> {
        let local = self.clock.to_local(utc)?;
        Some((local, self.clock.day_bucket(local)?))
    }

    fn to_record(
        &self,
        row: &RawHourlyRow,
        local: NaiveDateTime,
        local_day: NaiveDate,
        report: &mut IngestReport,
    ) -> HourlyRecord {
        let mut read = |field: HourlyField| {
            let parsed = ParsedNumber::parse(row.cell(field));
            if parsed.is_invalid() {
                report.count_invalid(field);
            }
            parsed.value()
        };

        HourlyRecord {
            local_day,
            local_time: local.time(),
            local_timestamp: local,
            temperature_max: read(HourlyField::TemperatureMax),
            temperature_min: read(HourlyField::TemperatureMin),
            humidity_max: read(HourlyField::HumidityMax),
            humidity_min: read(HourlyField::HumidityMin),
            wind_speed: read(HourlyField::WindSpeed),
            wind_direction: read(HourlyField::WindDirection),
            wind_gust: read(HourlyField::WindGust),
            radiation: read(HourlyField::Radiation).map(|kj| kj / KJ_PER_MJ),
            rainfall: read(HourlyField::Rainfall),
        }
    }
}

/// Combines the station date and the HHMM hour code into a UTC timestamp.
pub fn parse_utc_timestamp(date: &str, utc_hour: &str) -> Result<NaiveDateTime, RowRejection> {
    let date = parse_station_date(date).ok_or_else(|| RowRejection::InvalidDate(date.to_string()))?;
    let time =
        parse_utc_hour(utc_hour).ok_or_else(|| RowRejection::InvalidHour(utc_hour.to_string()))?;
    Ok(date.and_time(time))
}

fn parse_station_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Reads an hour code such as `0`, `100`, `1300` or `1300 UTC`.
/// The code is HHMM with leading zeros dropped.
fn parse_utc_hour(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_suffix("UTC")
        .or_else(|| trimmed.strip_suffix("utc"))
        .unwrap_or(trimmed)
        .trim();
    let code: u32 = digits.parse().ok()?;
    let padded = format!("{:04}", code);
    if padded.len() != 4 {
        return None;
    }
    let hours: u32 = padded[..2].parse().ok()?;
    let minutes: u32 = padded[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}
