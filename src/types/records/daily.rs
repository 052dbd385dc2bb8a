use chrono::NaiveDate;
use serde::Serialize;

/// Aggregates of one local day of hourly observations.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temperature_max: Option<f64>,        // absolute max, °C
    pub temperature_min: Option<f64>,        // absolute min, °C
    pub humidity_max: Option<f64>,           // mean of hourly max, %
    pub humidity_min: Option<f64>,           // mean of hourly min, %
    pub wind_speed: Option<f64>,             // mean, m/s
    pub wind_direction: Option<f64>,         // mean, degrees
    pub wind_gust: Option<f64>,              // mean, m/s
    pub radiation_total: Option<f64>,        // sum, MJ/m²·day
    pub rainfall_total: Option<f64>,         // sum, mm
}

/// A [`DailyRecord`] with the quantities derived by the ETo calculation.
///
/// Every derived field is `None` when one of its inputs is missing.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct EnrichedDailyRecord {
    #[serde(flatten)]
    pub daily: DailyRecord,
    pub mean_temperature: Option<f64>,          // T, °C
    pub mean_humidity: Option<f64>,             // UR, %
    pub saturation_vapor_pressure: Option<f64>, // es, kPa
    pub actual_vapor_pressure: Option<f64>,     // ea, kPa
    pub net_radiation: Option<f64>,             // Rn, MJ/m²·day
    pub vapor_pressure_slope: Option<f64>,      // Δ, kPa/°C
    pub eto: Option<f64>,                       // mm/day
}

impl EnrichedDailyRecord {
    pub fn date(&self) -> NaiveDate {
        self.daily.date
    }
}
