use crate::db::SqliteStore;
use crate::domain::ids::IdGenerator;
use crate::domain::report::LoadReport;
use crate::loader::{LoadOptions, Loader};
use crate::source::{CsvSource, RawRow};
use std::collections::HashMap;
use std::io::{self, Cursor, Read};

/// Required columns plus one extra the loader should ignore.
pub const HEADER: &str =
    "id,manufacturer,model,year,state,region,posting_date,image_url,price,odometer,description";

/// Deterministic ids ("prefix-1", "prefix-2", ...).
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Hands out the same id every time, to force a primary-key clash.
pub struct StuckIds;

impl IdGenerator for StuckIds {
    fn next_id(&mut self) -> String {
        "stuck".to_string()
    }
}

/// Serves `data`, then fails every read after it.
pub struct BrokenTail {
    data: Cursor<Vec<u8>>,
}

impl BrokenTail {
    pub fn new(data: &str) -> Self {
        Self {
            data: Cursor::new(data.as_bytes().to_vec()),
        }
    }
}

impl Read for BrokenTail {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 && !buf.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Other, "device went away"));
        }
        Ok(n)
    }
}

/// One CSV data line with fixed date, image and description.
pub fn vehicle_line(
    manufacturer: &str,
    model: &str,
    year: &str,
    state: &str,
    region: &str,
    price: &str,
    odometer: &str,
) -> String {
    format!(
        "x,{manufacturer},{model},{year},{state},{region},2021-01-01,http://x/1.jpg,{price},{odometer},clean"
    )
}

pub fn csv_of(lines: &[String]) -> String {
    let mut out = String::from(HEADER);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
    out
}

pub fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
    RawRow {
        line: 2,
        fields: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    }
}

/// A row with every required field filled with plausible values.
pub fn complete_row() -> RawRow {
    raw_row(&[
        ("manufacturer", "honda"),
        ("model", "civic"),
        ("year", "2020"),
        ("state", "ca"),
        ("region", "bayarea"),
        ("posting_date", "2021-01-01T10:00:00-0800"),
        ("image_url", "http://x/1.jpg"),
        ("price", "15000"),
        ("odometer", "30000"),
        ("description", "clean"),
    ])
}

/// Loads `csv` into a fresh in-memory database with sequential ids.
pub fn load_csv(csv: &str, options: LoadOptions) -> (LoadReport, SqliteStore) {
    let store = SqliteStore::open_in_memory().expect("open in-memory db");
    let source = CsvSource::from_reader(csv.as_bytes()).expect("csv header");
    let mut loader = Loader::new(store, SequentialIds::new("id"), options);
    let report = loader.run(source).expect("load run");
    (report, loader.into_store())
}

pub fn query_strings(store: &SqliteStore, sql: &str) -> Vec<String> {
    let conn = store.connection();
    let mut stmt = conn.prepare(sql).expect("prepare");
    let rows = stmt
        .query_map([], |r| r.get::<_, String>(0))
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}
