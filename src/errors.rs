// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end the run. Nothing is committed past the last checkpoint.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("config error: {0}")]
    Config(String),
    #[error("failed to open csv source {}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("csv source is missing required columns: {0:?}")]
    MissingColumns(Vec<&'static str>),
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("report output failed: {0}")]
    ReportIo(#[from] std::io::Error),
    #[error("report serialization failed: {0}")]
    ReportJson(#[from] serde_json::Error),
    #[error("failed to initialize tracing: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Problems confined to one input row. The row is skipped and counted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("line {line}: missing required field `{field}`")]
    MissingField { line: u64, field: &'static str },
    #[error("line {line}: field `{field}` is not a valid number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    Malformed { line: u64, expected: u64, found: u64 },
    #[error("line {line}: record is not valid UTF-8")]
    Encoding { line: u64 },
}

impl RowError {
    pub fn line(&self) -> u64 {
        match self {
            RowError::MissingField { line, .. }
            | RowError::InvalidNumber { line, .. }
            | RowError::Malformed { line, .. }
            | RowError::Encoding { line } => *line,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
