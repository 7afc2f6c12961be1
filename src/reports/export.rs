//! One-way report export.
//!
//! Serializes a computed report window to a JSON document for download.
//! There is no corresponding import path.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::reports::metrics::{DateRange, ReportMetrics};
use crate::AdminError;

#[derive(Clone, Debug, Serialize)]
pub struct ReportExport {
    pub date_range: DateRange,
    pub metrics: ReportMetrics,
    pub generated_at: DateTime<Utc>,
}

impl ReportExport {
    pub fn new(date_range: DateRange, metrics: ReportMetrics) -> Self {
        Self { date_range, metrics, generated_at: Utc::now() }
    }

    pub fn to_json(&self) -> Result<String, AdminError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested download name, e.g. `report-30d-2026-08-06.json`.
    pub fn filename(&self) -> String {
        format!("report-{}-{}.json", self.date_range.label(), self.generated_at.date_naive())
    }
}
