// src/domain/listing.rs

use crate::errors::RowError;
use crate::source::RawRow;

/// Columns every accepted row must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "manufacturer",
    "model",
    "year",
    "state",
    "region",
    "posting_date",
    "image_url",
    "price",
    "odometer",
    "description",
];

/// Integers above this cannot round-trip through an `f64` rendering.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// Rejects the row at the first required field that is absent or empty.
///
/// Values are not trimmed: a field holding only whitespace is accepted here
/// and left to the typed conversion (or stored as-is for text columns).
/// A whitespace-only numeric field fails conversion as `InvalidNumber`.
pub fn validate(row: &RawRow) -> Result<(), RowError> {
    for field in REQUIRED_FIELDS {
        match row.get(field) {
            Some(v) if !v.is_empty() => {}
            _ => {
                return Err(RowError::MissingField {
                    line: row.line,
                    field,
                })
            }
        }
    }
    Ok(())
}

/// A fully typed input row, ready to be split into the four tables.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub line: u64,
    pub manufacturer: String,
    pub model: String,
    pub year: i64,
    pub state: String,
    pub region: String,
    pub posting_date: String,
    pub image_url: String,
    pub price: f64,
    pub odometer: i64,
    pub description: String,
}

impl VehicleRecord {
    /// Validates presence, then converts the numeric columns.
    pub fn from_raw(row: &RawRow) -> Result<Self, RowError> {
        validate(row)?;

        // validate() guarantees every required key is present.
        let text = |field: &str| row.get(field).unwrap_or_default().to_string();

        Ok(Self {
            line: row.line,
            year: parse_int(row, "year")?,
            price: parse_decimal(row, "price")?,
            odometer: parse_int(row, "odometer")?,
            manufacturer: text("manufacturer"),
            model: text("model"),
            state: text("state"),
            region: text("region"),
            posting_date: text("posting_date"),
            image_url: text("image_url"),
            description: text("description"),
        })
    }
}

/// Plain integers, plus float renderings with no fractional part ("2020.0").
/// Surrounding whitespace is ignored for conversion only.
fn parse_int(row: &RawRow, field: &'static str) -> Result<i64, RowError> {
    let raw = row.get(field).unwrap_or_default();
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(v);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT => {
            Ok(f as i64)
        }
        _ => Err(invalid(row, field, raw)),
    }
}

fn parse_decimal(row: &RawRow, field: &'static str) -> Result<f64, RowError> {
    let raw = row.get(field).unwrap_or_default();
    match raw.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(invalid(row, field, raw)),
    }
}

fn invalid(row: &RawRow, field: &'static str, raw: &str) -> RowError {
    RowError::InvalidNumber {
        line: row.line,
        field,
        value: raw.to_string(),
    }
}
