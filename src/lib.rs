//! Cleans hourly records from an INMET automatic weather station, aggregates
//! them per local day, computes a simplified Penman-Monteith reference
//! evapotranspiration (ETo) and rolls the days up into a twelve-month summary.
//!
//! The core is [`Pipeline::run`], a pure transformation of raw rows. Reading
//! station CSV files ([`read_station_csv`]) and writing result tables
//! ([`export_tables`]) sit around it.

mod error;
mod export;
mod intake;
mod pipeline;
mod processing;
mod types;

pub use error::EtoError;
pub use pipeline::*;

pub use export::error::ExportError;
pub use export::frames::{daily_frame, hourly_frame, monthly_frame};
pub use export::writer::{export_tables, write_table, ExportedTables, TableFormat};

pub use intake::csv_reader::read_station_csv;
pub use intake::error::IntakeError;

pub use processing::daily_aggregator::aggregate_daily;
pub use processing::eto_calculator::{
    saturation_vapor_pressure, vapor_pressure_slope, EtoCalculator, EtoInputs,
};
pub use processing::monthly_summarizer::summarize_monthly;
pub use processing::normalizer::{parse_utc_timestamp, NormalizedHourly, Normalizer};
pub use processing::report::{DroppedRow, IngestReport, RowRejection};
pub use processing::statistics::{Extreme, LastRainfall, PeriodStatistics};

pub use types::config::{EtoParameters, PipelineConfig, StationClock};
pub use types::field::HourlyField;
pub use types::raw_row::RawHourlyRow;
pub use types::reading::ParsedNumber;
pub use types::records::daily::{DailyRecord, EnrichedDailyRecord};
pub use types::records::hourly::HourlyRecord;
pub use types::records::monthly::{MonthlyRecord, MonthlySummary, CALENDAR};
