use crate::db::Store;
use crate::domain::entities::{NewListing, NewLocation, NewManufacturer, NewModel, Table};
use crate::errors::LoadResult;
use std::collections::HashMap;

/// Accepts every write and only counts it. Used for `LISTINGS_DRY_RUN`.
#[derive(Debug, Default)]
pub struct DryRunStore {
    counts: HashMap<Table, u64>,
}

impl DryRunStore {
    fn bump(&mut self, table: Table) {
        *self.counts.entry(table).or_insert(0) += 1;
    }
}

impl Store for DryRunStore {
    fn create_schema(&mut self) -> LoadResult<()> {
        Ok(())
    }

    fn begin(&mut self) -> LoadResult<()> {
        Ok(())
    }

    fn commit(&mut self) -> LoadResult<()> {
        Ok(())
    }

    fn insert_manufacturer(&mut self, _row: &NewManufacturer<'_>) -> LoadResult<()> {
        self.bump(Table::Manufacturer);
        Ok(())
    }

    fn insert_model(&mut self, _row: &NewModel<'_>) -> LoadResult<()> {
        self.bump(Table::Model);
        Ok(())
    }

    fn insert_location(&mut self, _row: &NewLocation<'_>) -> LoadResult<()> {
        self.bump(Table::Location);
        Ok(())
    }

    fn insert_listing(&mut self, _row: &NewListing<'_>) -> LoadResult<()> {
        self.bump(Table::Listing);
        Ok(())
    }

    fn count(&self, table: Table) -> LoadResult<u64> {
        Ok(self.counts.get(&table).copied().unwrap_or(0))
    }

    fn close(self) -> LoadResult<()> {
        Ok(())
    }
}
