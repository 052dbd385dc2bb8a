use crate::types::field::HourlyField;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One cleaned hourly observation in station-local time.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct HourlyRecord {
    pub local_day: NaiveDate,              // day bucket, boundary at 01:00 local
    pub local_time: NaiveTime,             // HH:MM
    pub local_timestamp: NaiveDateTime,    // UTC - offset
    pub temperature_max: Option<f64>,      // °C
    pub temperature_min: Option<f64>,      // °C
    pub humidity_max: Option<f64>,         // %
    pub humidity_min: Option<f64>,         // %
    pub wind_speed: Option<f64>,           // m/s
    pub wind_direction: Option<f64>,       // degrees
    pub wind_gust: Option<f64>,            // m/s
    pub radiation: Option<f64>,            // MJ/m²
    pub rainfall: Option<f64>,             // mm
}

impl HourlyRecord {
    pub fn value(&self, field: HourlyField) -> Option<f64> {
        match field {
            HourlyField::TemperatureMax => self.temperature_max,
            HourlyField::TemperatureMin => self.temperature_min,
            HourlyField::HumidityMax => self.humidity_max,
            HourlyField::HumidityMin => self.humidity_min,
            HourlyField::WindSpeed => self.wind_speed,
            HourlyField::WindDirection => self.wind_direction,
            HourlyField::WindGust => self.wind_gust,
            HourlyField::Radiation => self.radiation,
            HourlyField::Rainfall => self.rainfall,
        }
    }

    /// Local time formatted the way station reports print it.
    pub fn local_time_label(&self) -> String {
        self.local_time.format("%H:%M").to_string()
    }
}
