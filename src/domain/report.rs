use crate::errors::{LoadResult, RowError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tally for one load run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub rows_read: u64,
    pub accepted: u64,
    pub skipped_missing: u64,
    pub skipped_invalid: u64,
    pub skipped_malformed: u64,
    pub manufacturers: u64,
    pub models: u64,
    pub locations: u64,
    pub commits: u64,
    /// True when `max_rows` ended the run; input past the cap was not read.
    pub truncated: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl LoadReport {
    pub fn start() -> Self {
        Self {
            rows_read: 0,
            accepted: 0,
            skipped_missing: 0,
            skipped_invalid: 0,
            skipped_malformed: 0,
            manufacturers: 0,
            models: 0,
            locations: 0,
            commits: 0,
            truncated: false,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record_skip(&mut self, err: &RowError) {
        match err {
            RowError::MissingField { .. } => self.skipped_missing += 1,
            RowError::InvalidNumber { .. } => self.skipped_invalid += 1,
            RowError::Malformed { .. } | RowError::Encoding { .. } => self.skipped_malformed += 1,
        }
    }

    pub fn skipped(&self) -> u64 {
        self.skipped_missing + self.skipped_invalid + self.skipped_malformed
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn write_json(&self, path: &Path) -> LoadResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
