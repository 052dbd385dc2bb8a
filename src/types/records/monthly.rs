use chrono::Month;
use serde::{Serialize, Serializer};

/// Calendar months in reporting order.
pub const CALENDAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Roll-up of every enriched day that falls in one calendar month.
///
/// Days from different years that share a month are pooled together.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MonthlyRecord {
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub rainfall_total: Option<f64>,        // sum, mm
    pub eto_total: Option<f64>,             // sum, mm
    pub mean_temperature: Option<f64>,      // mean of daily T
    pub temperature_max: Option<f64>,       // mean of daily max
    pub temperature_min: Option<f64>,       // mean of daily min
    pub wind_speed: Option<f64>,            // mean
    pub radiation: Option<f64>,             // mean of daily totals
    pub mean_humidity: Option<f64>,         // mean of daily UR
}

impl MonthlyRecord {
    /// A month with no data.
    pub fn empty(month: Month) -> Self {
        Self {
            month,
            rainfall_total: None,
            eto_total: None,
            mean_temperature: None,
            temperature_max: None,
            temperature_min: None,
            wind_speed: None,
            radiation: None,
            mean_humidity: None,
        }
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty(self.month)
    }
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

/// The twelve monthly rows, always January to December.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(transparent)]
pub struct MonthlySummary {
    rows: [MonthlyRecord; 12],
}

impl MonthlySummary {
    pub(crate) fn new(rows: [MonthlyRecord; 12]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MonthlyRecord; 12] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRecord> {
        self.rows.iter()
    }

    pub fn get(&self, month: Month) -> &MonthlyRecord {
        &self.rows[month.number_from_month() as usize - 1]
    }
}

impl<'a> IntoIterator for &'a MonthlySummary {
    type Item = &'a MonthlyRecord;
    type IntoIter = std::slice::Iter<'a, MonthlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Default for MonthlySummary {
    fn default() -> Self {
        Self::new(CALENDAR.map(MonthlyRecord::empty))
    }
}
