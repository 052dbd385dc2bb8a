//! This module provides the main entry point of the crate: a configured
//! [`Pipeline`] that turns raw station rows into every result table.

use crate::processing::daily_aggregator::aggregate_daily;
use crate::processing::eto_calculator::EtoCalculator;
use crate::processing::monthly_summarizer::summarize_monthly;
use crate::processing::normalizer::Normalizer;
use crate::processing::report::IngestReport;
use crate::processing::statistics::PeriodStatistics;
use crate::types::config::{EtoParameters, PipelineConfig, StationClock};
use crate::types::raw_row::RawHourlyRow;
use crate::types::records::daily::EnrichedDailyRecord;
use crate::types::records::hourly::HourlyRecord;
use crate::types::records::monthly::MonthlySummary;
use bon::bon;
use log::info;
use serde::Serialize;

/// Every table produced from one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub hourly: Vec<HourlyRecord>,
    pub daily: Vec<EnrichedDailyRecord>,
    pub monthly: MonthlySummary,
    pub statistics: PeriodStatistics,
    pub report: IngestReport,
}

/// Runs normalization, daily aggregation, ETo and the monthly roll-up.
///
/// The pipeline holds only configuration, so one instance can process any
/// number of datasets.
///
/// # Examples
///
/// ```
/// use inmet_eto::{HourlyField, Pipeline, RawHourlyRow};
///
/// let rows = vec![
///     RawHourlyRow::new(2, "01/01/2023", "0000").with(HourlyField::TemperatureMax, "25,5"),
/// ];
/// let output = Pipeline::new().run(&rows);
///
/// assert_eq!(output.hourly[0].temperature_max, Some(25.5));
/// assert_eq!(output.daily.len(), 1);
/// assert_eq!(output.monthly.rows().len(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

#[bon]
impl Pipeline {
    /// Creates a pipeline with the default station clock and ETo constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline, overriding any part of the configuration.
    ///
    /// ```
    /// use inmet_eto::{Pipeline, StationClock};
    ///
    /// let pipeline = Pipeline::configured()
    ///     .clock(StationClock::builder().utc_offset_hours(4).build())
    ///     .call();
    /// assert_eq!(pipeline.config().clock.utc_offset_hours, 4);
    /// ```
    #[builder(start_fn = configured)]
    pub fn with_config(clock: Option<StationClock>, eto: Option<EtoParameters>) -> Self {
        Self {
            config: PipelineConfig {
                clock: clock.unwrap_or_default(),
                eto: eto.unwrap_or_default(),
            },
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Processes one dataset. Never fails: problems with individual rows are
    /// listed in [`PipelineOutput::report`].
    pub fn run(&self, rows: &[RawHourlyRow]) -> PipelineOutput {
        let normalized = Normalizer::new(self.config.clock).normalize(rows);
        let daily = aggregate_daily(&normalized.records);
        let enriched = EtoCalculator::new(self.config.eto).enrich(&daily);
        let monthly = summarize_monthly(&enriched);
        let statistics = PeriodStatistics::compute(&normalized.records, &enriched);

        info!(
            "Processed {} hourly records into {} days ({} with ETo)",
            normalized.records.len(),
            enriched.len(),
            enriched.iter().filter(|d| d.eto.is_some()).count()
        );

        PipelineOutput {
            hourly: normalized.records,
            daily: enriched,
            monthly,
            statistics,
            report: normalized.report,
        }
    }
}

impl From<PipelineConfig> for Pipeline {
    fn from(config: PipelineConfig) -> Self {
        Self { config }
    }
}
