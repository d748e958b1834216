use crate::domain::listing::REQUIRED_FIELDS;
use crate::errors::{LoadError, LoadResult, RowError};
use csv::{ErrorKind, Reader, ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One data row keyed by header name. Values are untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line in the source file where the record starts.
    pub line: u64,
    pub fields: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Row(RawRow),
    Rejected(RowError),
}

/// Streams records from a header-delimited CSV source, in file order.
pub struct CsvSource<R: Read = File> {
    reader: Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl CsvSource<File> {
    pub fn open(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let reader = builder()
            .from_path(path)
            .map_err(|source| LoadError::SourceOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_reader(reader)
    }
}

impl<R: Read> CsvSource<R> {
    #[cfg(test)]
    pub fn from_reader(rdr: R) -> LoadResult<Self> {
        Self::with_reader(builder().from_reader(rdr))
    }

    fn with_reader(mut reader: Reader<R>) -> LoadResult<Self> {
        let headers = reader.headers()?.clone();

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    #[cfg(test)]
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Reads the next record. `Ok(None)` at end of input.
    pub fn next_row(&mut self) -> LoadResult<Option<ReadOutcome>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => Ok(None),
            Ok(true) => {
                let line = self.record.position().map(|p| p.line()).unwrap_or(0);
                let fields = self
                    .headers
                    .iter()
                    .zip(self.record.iter())
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                Ok(Some(ReadOutcome::Row(RawRow { line, fields })))
            }
            Err(err) => match err.kind() {
                ErrorKind::UnequalLengths {
                    pos,
                    expected_len,
                    len,
                } => Ok(Some(ReadOutcome::Rejected(RowError::Malformed {
                    line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                    expected: *expected_len,
                    found: *len,
                }))),
                ErrorKind::Utf8 { pos, .. } => Ok(Some(ReadOutcome::Rejected(RowError::Encoding {
                    line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                }))),
                _ => Err(LoadError::Csv(err)),
            },
        }
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = LoadResult<ReadOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(true).flexible(false).trim(Trim::None);
    b
}
