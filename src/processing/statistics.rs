//! Headline figures for a processed period: totals, extremes and data
//! completeness.

use crate::processing::utils::{mean_present, round_to, sum_present};
use crate::types::records::daily::EnrichedDailyRecord;
use crate::types::records::hourly::HourlyRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An extreme value and the local day it was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub day: NaiveDate,
}

/// The most recent day with rain and how long ago it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastRainfall {
    pub day: NaiveDate,
    /// Days between `day` and the last recorded day.
    pub dry_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStatistics {
    pub last_day: Option<NaiveDate>,
    pub mean_temperature: Option<f64>,   // °C, 1 decimal
    pub total_rainfall: Option<f64>,     // mm, 1 decimal
    pub wettest_day: Option<Extreme>,    // daily rainfall
    pub hottest_hour: Option<Extreme>,   // hourly max temperature
    pub coldest_hour: Option<Extreme>,   // hourly min temperature
    pub windiest_hour: Option<Extreme>,  // hourly wind speed
    pub driest_hour: Option<Extreme>,    // hourly min humidity
    /// Hourly records without a maximum temperature. Always reported.
    pub missing_temperature_max: usize,
    pub last_rainfall: Option<LastRainfall>,
}

impl PeriodStatistics {
    pub fn compute(hourly: &[HourlyRecord], daily: &[EnrichedDailyRecord]) -> Self {
        let last_day = daily.iter().map(EnrichedDailyRecord::date).max();

        let last_rainfall = hourly
            .iter()
            .filter(|r| r.rainfall.is_some_and(|mm| mm > 0.0))
            .map(|r| r.local_day)
            .max()
            .zip(last_day)
            .map(|(day, last)| LastRainfall {
                day,
                dry_days: (last - day).num_days(),
            });

        Self {
            last_day,
            mean_temperature: mean_present(daily.iter().map(|d| d.mean_temperature))
                .map(|t| round_to(t, 1)),
            total_rainfall: sum_present(daily.iter().map(|d| d.daily.rainfall_total))
                .map(|mm| round_to(mm, 1)),
            wettest_day: extreme(
                daily.iter().map(|d| (d.date(), d.daily.rainfall_total)),
                Pick::Max,
            ),
            hottest_hour: extreme(
                hourly.iter().map(|r| (r.local_day, r.temperature_max)),
                Pick::Max,
            ),
            coldest_hour: extreme(
                hourly.iter().map(|r| (r.local_day, r.temperature_min)),
                Pick::Min,
            ),
            windiest_hour: extreme(hourly.iter().map(|r| (r.local_day, r.wind_speed)), Pick::Max),
            driest_hour: extreme(hourly.iter().map(|r| (r.local_day, r.humidity_min)), Pick::Min),
            missing_temperature_max: hourly
                .iter()
                .filter(|r| r.temperature_max.is_none())
                .count(),
            last_rainfall,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_temperature_max == 0
    }

    fn write_completeness(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            writeln!(f, "Complete data: yes")
        } else {
            writeln!(
                f,
                "Incomplete data: {} hourly records without maximum temperature",
                self.missing_temperature_max
            )
        }
    }
}

#[derive(Clone, Copy)]
enum Pick {
    Max,
    Min,
}

/// First occurrence of the extreme, skipping missing values.
fn extreme<I>(values: I, pick: Pick) -> Option<Extreme>
where
    I: IntoIterator<Item = (NaiveDate, Option<f64>)>,
{
    values
        .into_iter()
        .filter_map(|(day, value)| value.map(|value| Extreme { value, day }))
        .fold(None, |best: Option<Extreme>, candidate| match best {
            Some(current) => {
                let better = match pick {
                    Pick::Max => candidate.value.total_cmp(&current.value).is_gt(),
                    Pick::Min => candidate.value.total_cmp(&current.value).is_lt(),
                };
                Some(if better { candidate } else { current })
            }
            None => Some(candidate),
        })
}

fn write_extreme(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    unit: &str,
    extreme: Option<Extreme>,
) -> fmt::Result {
    match extreme {
        Some(e) => writeln!(f, "{label}: {} {unit} on {}", e.value, e.day),
        None => writeln!(f, "{label}: n/a"),
    }
}

impl fmt::Display for PeriodStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(day) = self.last_day else {
            writeln!(f, "No data in period")?;
            return self.write_completeness(f);
        };
        writeln!(f, "Last recorded day: {day}")?;
        if let Some(t) = self.mean_temperature {
            writeln!(f, "Mean temperature: {t} °C")?;
        }
        if let Some(mm) = self.total_rainfall {
            writeln!(f, "Total rainfall: {mm} mm")?;
        }
        write_extreme(f, "Wettest day", "mm", self.wettest_day)?;
        write_extreme(f, "Highest temperature", "°C", self.hottest_hour)?;
        write_extreme(f, "Lowest temperature", "°C", self.coldest_hour)?;
        write_extreme(f, "Strongest wind", "m/s", self.windiest_hour)?;
        write_extreme(f, "Lowest relative humidity", "%", self.driest_hour)?;
        self.write_completeness(f)?;
        if let Some(rain) = self.last_rainfall {
            writeln!(f, "Last rainfall: {} ({} days without rain)", rain.day, rain.dry_days)?;
        }
        Ok(())
    }
}
