use crate::types::field::HourlyField;

/// One row of the station export exactly as read, before any cleaning.
///
/// Numeric cells keep their decimal commas. `line` is the 1-based line in the
/// source file (header is line 1) and only serves diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHourlyRow {
    pub line: usize,
    pub date: String,     // Data, dd/mm/yyyy
    pub utc_hour: String, // Hora (UTC), e.g. "0", "1300" or "1300 UTC"
    pub temperature_max: String,
    pub temperature_min: String,
    pub humidity_max: String,
    pub humidity_min: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub wind_gust: String,
    pub radiation_kj: String,
    pub rainfall: String,
}

impl RawHourlyRow {
    pub fn new(line: usize, date: impl Into<String>, utc_hour: impl Into<String>) -> Self {
        Self {
            line,
            date: date.into(),
            utc_hour: utc_hour.into(),
            ..Default::default()
        }
    }

    /// Sets the raw text of a numeric cell.
    pub fn with(mut self, field: HourlyField, raw: impl Into<String>) -> Self {
        *self.cell_mut(field) = raw.into();
        self
    }

    pub fn cell(&self, field: HourlyField) -> &str {
        match field {
            HourlyField::TemperatureMax => &self.temperature_max,
            HourlyField::TemperatureMin => &self.temperature_min,
            HourlyField::HumidityMax => &self.humidity_max,
            HourlyField::HumidityMin => &self.humidity_min,
            HourlyField::WindSpeed => &self.wind_speed,
            HourlyField::WindDirection => &self.wind_direction,
            HourlyField::WindGust => &self.wind_gust,
            HourlyField::Radiation => &self.radiation_kj,
            HourlyField::Rainfall => &self.rainfall,
        }
    }

    pub(crate) fn cell_mut(&mut self, field: HourlyField) -> &mut String {
        match field {
            HourlyField::TemperatureMax => &mut self.temperature_max,
            HourlyField::TemperatureMin => &mut self.temperature_min,
            HourlyField::HumidityMax => &mut self.humidity_max,
            HourlyField::HumidityMin => &mut self.humidity_min,
            HourlyField::WindSpeed => &mut self.wind_speed,
            HourlyField::WindDirection => &mut self.wind_direction,
            HourlyField::WindGust => &mut self.wind_gust,
            HourlyField::Radiation => &mut self.radiation_kj,
            HourlyField::Rainfall => &mut self.rainfall,
        }
    }
}
