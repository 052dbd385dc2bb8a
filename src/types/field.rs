//! Defines the `HourlyField` enum, mapping the numeric columns of an INMET
//! hourly export to their meaning in this crate.

use serde::Serialize;
use std::fmt;

/// A numeric column of the raw hourly table.
///
/// Each variant knows the header the station export uses for it
/// ([`HourlyField::source_headers`]) and the column name used when the cleaned
/// tables are exported ([`HourlyField::column_name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyField {
    /// Maximum air temperature in the hour, °C.
    TemperatureMax,
    /// Minimum air temperature in the hour, °C.
    TemperatureMin,
    /// Maximum relative humidity in the hour, %.
    HumidityMax,
    /// Minimum relative humidity in the hour, %.
    HumidityMin,
    /// Mean wind speed, m/s.
    WindSpeed,
    /// Wind direction, degrees. Upstream exports label this column as a speed.
    WindDirection,
    /// Peak wind gust, m/s.
    WindGust,
    /// Global solar radiation. kJ/m² in the raw table, MJ/m² once normalized.
    Radiation,
    /// Accumulated rainfall, mm.
    Rainfall,
}

impl HourlyField {
    /// All numeric fields in table order.
    pub const ALL: [HourlyField; 9] = [
        HourlyField::TemperatureMax,
        HourlyField::TemperatureMin,
        HourlyField::HumidityMax,
        HourlyField::HumidityMin,
        HourlyField::WindSpeed,
        HourlyField::WindDirection,
        HourlyField::WindGust,
        HourlyField::Radiation,
        HourlyField::Rainfall,
    ];

    /// Headers accepted for this field in the station CSV, preferred first.
    pub(crate) fn source_headers(&self) -> &'static [&'static str] {
        match self {
            HourlyField::TemperatureMax => &["Temp. Max. (C)"],
            HourlyField::TemperatureMin => &["Temp. Min. (C)"],
            HourlyField::HumidityMax => &["Umi. Max. (%)"],
            HourlyField::HumidityMin => &["Umi. Min. (%)"],
            HourlyField::WindSpeed => &["Vel. Vento (m/s)"],
            // Mislabeled upstream as a speed; the corrected header is accepted too.
            HourlyField::WindDirection => &["Dir. Vento (m/s)", "Dir. Vento (°)"],
            HourlyField::WindGust => &["Raj. Vento (m/s)"],
            HourlyField::Radiation => &["Radiacao (KJ/m²)", "Radiacao (KJ/m2)"],
            HourlyField::Rainfall => &["Chuva (mm)"],
        }
    }

    /// Column name in the exported hourly table.
    pub fn column_name(&self) -> &'static str {
        match self {
            HourlyField::TemperatureMax => "temp_max_c",
            HourlyField::TemperatureMin => "temp_min_c",
            HourlyField::HumidityMax => "humidity_max_pct",
            HourlyField::HumidityMin => "humidity_min_pct",
            HourlyField::WindSpeed => "wind_speed_ms",
            HourlyField::WindDirection => "wind_direction_deg",
            HourlyField::WindGust => "wind_gust_ms",
            HourlyField::Radiation => "radiation_mj_m2",
            HourlyField::Rainfall => "rainfall_mm",
        }
    }
}

impl fmt::Display for HourlyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
