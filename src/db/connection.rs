use crate::db::{listings, Store};
use crate::domain::entities::{NewListing, NewLocation, NewManufacturer, NewModel, Table};
use crate::errors::LoadResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info, warn};

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// SQLite adapter. Owns one connection for the whole run.
///
/// Dropping the store closes the connection, and SQLite discards any
/// transaction still open at that point, so an aborted run leaves nothing
/// past its last commit.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened sqlite database");
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> LoadResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> LoadResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Applies the bundled schema. Every statement is `CREATE TABLE IF NOT EXISTS`.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

impl Store for SqliteStore {
    fn create_schema(&mut self) -> LoadResult<()> {
        init_db(&self.conn)?;
        info!("schema ready: Manufacturer, Model, Location, Listing");
        Ok(())
    }

    fn begin(&mut self) -> LoadResult<()> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    fn commit(&mut self) -> LoadResult<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn insert_manufacturer(&mut self, row: &NewManufacturer<'_>) -> LoadResult<()> {
        Ok(listings::insert_manufacturer(&self.conn, row)?)
    }

    fn insert_model(&mut self, row: &NewModel<'_>) -> LoadResult<()> {
        Ok(listings::insert_model(&self.conn, row)?)
    }

    fn insert_location(&mut self, row: &NewLocation<'_>) -> LoadResult<()> {
        Ok(listings::insert_location(&self.conn, row)?)
    }

    fn insert_listing(&mut self, row: &NewListing<'_>) -> LoadResult<()> {
        Ok(listings::insert_listing(&self.conn, row)?)
    }

    fn count(&self, table: Table) -> LoadResult<u64> {
        Ok(listings::count_rows(&self.conn, table)?)
    }

    fn close(self) -> LoadResult<()> {
        if !self.conn.is_autocommit() {
            warn!("closing with an open transaction; rolling back");
            self.conn.execute_batch("ROLLBACK")?;
        }
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
