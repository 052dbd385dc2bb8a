pub mod daily_aggregator;
pub mod eto_calculator;
pub mod monthly_summarizer;
pub mod normalizer;
pub mod report;
pub mod statistics;
mod utils;
