use crate::config::Config;
use crate::db::Store;
use crate::domain::entities::{NewListing, NewLocation, NewManufacturer, NewModel};
use crate::domain::ids::IdGenerator;
use crate::domain::listing::VehicleRecord;
use crate::domain::registry::EntityRegistry;
use crate::domain::report::LoadReport;
use crate::errors::{LoadResult, RowError};
use crate::source::{CsvSource, ReadOutcome};
use std::io::Read;
use std::num::NonZeroU64;
use tracing::{debug, info, warn};

const PROGRESS_EVERY: u64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadOptions {
    pub commit_every: Option<NonZeroU64>,
    pub max_rows: Option<u64>,
}

impl From<&Config> for LoadOptions {
    fn from(config: &Config) -> Self {
        Self {
            commit_every: config.commit_every,
            max_rows: config.max_rows,
        }
    }
}

/// Run context: the target store, id source and dedup state for one load.
pub struct Loader<S: Store, G: IdGenerator> {
    store: S,
    ids: G,
    registry: EntityRegistry,
    options: LoadOptions,
}

impl<S: Store, G: IdGenerator> Loader<S, G> {
    pub fn new(store: S, ids: G, options: LoadOptions) -> Self {
        Self {
            store,
            ids,
            registry: EntityRegistry::new(),
            options,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates the schema, then streams `source` into the store.
    ///
    /// Row-level problems are logged and counted. Any store or I/O error
    /// aborts the run; work since the last commit is discarded when the
    /// store is dropped or closed.
    pub fn run<R: Read>(&mut self, mut source: CsvSource<R>) -> LoadResult<LoadReport> {
        let mut report = LoadReport::start();

        self.store.create_schema()?;
        self.store.begin()?;

        loop {
            // Checked before reading so nothing past the cap is touched.
            if self
                .options
                .max_rows
                .is_some_and(|max| report.rows_read >= max)
            {
                report.truncated = true;
                info!(max_rows = report.rows_read, "row limit reached; stopping early");
                break;
            }
            let Some(outcome) = source.next_row()? else {
                break;
            };
            report.rows_read += 1;

            let record = match outcome {
                ReadOutcome::Row(raw) => VehicleRecord::from_raw(&raw),
                ReadOutcome::Rejected(err) => Err(err),
            };

            match record {
                Ok(record) => {
                    self.load_record(&record, &mut report)?;
                    report.accepted += 1;
                    if report.accepted % PROGRESS_EVERY == 0 {
                        debug!(accepted = report.accepted, "progress");
                    }
                    self.checkpoint(&mut report)?;
                }
                Err(err) => skip(&mut report, err),
            }
        }

        self.store.commit()?;
        report.commits += 1;
        report.finish();

        info!(
            rows_read = report.rows_read,
            accepted = report.accepted,
            skipped = report.skipped(),
            distinct_manufacturers = self.registry.manufacturer_count(),
            distinct_models = self.registry.model_count(),
            distinct_locations = self.registry.location_count(),
            "load finished"
        );
        Ok(report)
    }

    /// Inserts any unseen reference rows, then the listing itself.
    fn load_record(&mut self, rec: &VehicleRecord, report: &mut LoadReport) -> LoadResult<()> {
        let manufacturer = self.registry.manufacturer(&rec.manufacturer, &mut self.ids);
        if manufacturer.is_new() {
            self.store.insert_manufacturer(&NewManufacturer {
                id: manufacturer.id(),
                name: &rec.manufacturer,
            })?;
            report.manufacturers += 1;
        }

        let model = self.registry.model(&rec.model, rec.year, &mut self.ids);
        if model.is_new() {
            self.store.insert_model(&NewModel {
                id: model.id(),
                name: &rec.model,
                year: rec.year,
                manufacturer_id: manufacturer.id(),
            })?;
            report.models += 1;
        }

        let location = self.registry.location(&rec.state, &rec.region, &mut self.ids);
        if location.is_new() {
            self.store.insert_location(&NewLocation {
                id: location.id(),
                state: &rec.state,
                region: &rec.region,
            })?;
            report.locations += 1;
        }

        let listing_id = self.ids.next_id();
        self.store.insert_listing(&NewListing {
            id: &listing_id,
            date: &rec.posting_date,
            image: &rec.image_url,
            price: rec.price,
            mileage: rec.odometer,
            description: &rec.description,
            model_id: model.id(),
            location_id: location.id(),
        })?;

        Ok(())
    }

    fn checkpoint(&mut self, report: &mut LoadReport) -> LoadResult<()> {
        let Some(every) = self.options.commit_every else {
            return Ok(());
        };
        if report.accepted % every.get() == 0 {
            self.store.commit()?;
            self.store.begin()?;
            report.commits += 1;
            info!(accepted = report.accepted, "checkpoint committed");
        }
        Ok(())
    }
}

fn skip(report: &mut LoadReport, err: RowError) {
    warn!(line = err.line(), "skipping row: {err}");
    report.record_skip(&err);
}
