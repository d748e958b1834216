use crate::config::Config;
use crate::db::{DryRunStore, SqliteStore, Store};
use crate::domain::entities::Table;
use crate::domain::ids::UuidIds;
use crate::domain::report::LoadReport;
use crate::errors::LoadResult;
use crate::loader::{LoadOptions, Loader};
use crate::source::CsvSource;
use std::io::Read;
use tracing::{error, info};

mod config;
mod db;
mod domain;
mod errors;
mod loader;
mod logging;
mod source;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = logging::setup_logging(logging::DEFAULT_FILTER) {
        eprintln!("{e}");
    }

    if let Err(e) = run() {
        error!("load failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> LoadResult<()> {
    let config = Config::from_env()?;
    info!(
        csv = %config.csv_path.display(),
        db = %config.db_path.display(),
        dry_run = config.dry_run,
        "starting load"
    );

    // Open the input first so a bad path never creates an empty database.
    let source = CsvSource::open(&config.csv_path)?;
    let options = LoadOptions::from(&config);

    let report = if config.dry_run {
        load_into(DryRunStore::default(), source, options)?
    } else {
        load_into(SqliteStore::open(&config.db_path)?, source, options)?
    };

    info!(
        manufacturers = report.manufacturers,
        models = report.models,
        locations = report.locations,
        skipped_missing = report.skipped_missing,
        skipped_invalid = report.skipped_invalid,
        skipped_malformed = report.skipped_malformed,
        commits = report.commits,
        truncated = report.truncated,
        "load report"
    );

    if let Some(path) = &config.report_path {
        report.write_json(path)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Runs one load against `store`, logs table totals, and closes the store.
fn load_into<S: Store, R: Read>(
    store: S,
    source: CsvSource<R>,
    options: LoadOptions,
) -> LoadResult<LoadReport> {
    let mut loader = Loader::new(store, UuidIds, options);
    let report = loader.run(source)?;

    let store = loader.into_store();
    for table in Table::ALL {
        info!(table = table.name(), rows = store.count(table)?, "table total");
    }
    store.close()?;

    Ok(report)
}
