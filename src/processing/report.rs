use crate::types::field::HourlyField;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a raw row could not become an hourly record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowRejection {
    #[error("unparsable date '{0}'")]
    InvalidDate(String),

    #[error("unparsable UTC hour '{0}'")]
    InvalidHour(String),

    #[error("duplicate observation for {0} UTC")]
    DuplicateHour(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRow {
    pub line: usize,
    pub reason: RowRejection,
}

/// Data-quality findings collected while normalizing one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub rows_read: usize,
    /// Cells with content that could not be read as a number, per field.
    pub invalid_cells: BTreeMap<HourlyField, usize>,
    pub dropped: Vec<DroppedRow>,
}

impl IngestReport {
    pub(crate) fn count_invalid(&mut self, field: HourlyField) {
        *self.invalid_cells.entry(field).or_insert(0) += 1;
    }

    pub(crate) fn drop_row(&mut self, line: usize, reason: RowRejection) {
        self.dropped.push(DroppedRow { line, reason });
    }

    pub fn invalid_total(&self) -> usize {
        self.invalid_cells.values().sum()
    }

    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.dropped.len()
    }

    /// True when every row was kept and every non-blank cell parsed.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.invalid_cells.is_empty()
    }
}
