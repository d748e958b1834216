pub mod connection;
pub mod dry_run;
pub mod listings;

use crate::domain::entities::{NewListing, NewLocation, NewManufacturer, NewModel, Table};
use crate::errors::LoadResult;

pub use connection::SqliteStore;
pub use dry_run::DryRunStore;

/// Everything the loader needs from a target database.
///
/// Each engine gets one adapter; SQL dialect and parameter binding stay
/// inside it.
pub trait Store {
    /// Ensures the four tables exist. Safe to call on a populated database.
    fn create_schema(&mut self) -> LoadResult<()>;

    fn begin(&mut self) -> LoadResult<()>;
    fn commit(&mut self) -> LoadResult<()>;

    fn insert_manufacturer(&mut self, row: &NewManufacturer<'_>) -> LoadResult<()>;
    fn insert_model(&mut self, row: &NewModel<'_>) -> LoadResult<()>;
    fn insert_location(&mut self, row: &NewLocation<'_>) -> LoadResult<()>;
    fn insert_listing(&mut self, row: &NewListing<'_>) -> LoadResult<()>;

    /// Committed (or pending, for adapters without transactions) row count.
    fn count(&self, table: Table) -> LoadResult<u64>;

    /// Releases the underlying connection. An open transaction is discarded.
    fn close(self) -> LoadResult<()>
    where
        Self: Sized;
}
