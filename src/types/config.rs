//! Station clock and ETo constants used by the pipeline.

use bon::Builder;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// How UTC observation times map to the station's local clock and day.
///
/// The station has no daylight-saving rules: local time is UTC minus a fixed
/// offset. The day bucket used for grouping is taken from local time minus a
/// further `day_boundary_shift_hours`, so with the defaults a "day" runs from
/// 01:00 to 00:59 local time.
///
/// The extra shift matches how the station's daily reports have always been
/// grouped. Its domain rationale is not documented; keep it unless a
/// corrected convention is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct StationClock {
    #[builder(default = 3)]
    pub utc_offset_hours: i64,
    #[builder(default = 1)]
    pub day_boundary_shift_hours: i64,
}

impl Default for StationClock {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StationClock {
    /// `None` when the offset or the result falls outside chrono's range.
    pub fn to_local(&self, utc: NaiveDateTime) -> Option<NaiveDateTime> {
        utc.checked_sub_signed(TimeDelta::try_hours(self.utc_offset_hours)?)
    }

    pub fn day_bucket(&self, local: NaiveDateTime) -> Option<NaiveDate> {
        local
            .checked_sub_signed(TimeDelta::try_hours(self.day_boundary_shift_hours)?)
            .map(|shifted| shifted.date())
    }
}

/// Constants of the simplified Penman-Monteith equation.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct EtoParameters {
    /// Soil heat flux G, MJ/m²·day.
    #[builder(default = 0.0)]
    pub soil_heat_flux: f64,
    /// Psychrometric constant γ, kPa/°C.
    #[builder(default = 0.063)]
    pub psychrometric_constant: f64,
    /// Fraction of the daily radiation sum taken as net radiation Rn.
    #[builder(default = 0.5)]
    pub net_radiation_fraction: f64,
}

impl Default for EtoParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Everything the pipeline can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Builder)]
pub struct PipelineConfig {
    #[builder(default)]
    pub clock: StationClock,
    #[builder(default)]
    pub eto: EtoParameters,
}
