use crate::domain::entities::{NewListing, NewLocation, NewManufacturer, NewModel, Table};
use rusqlite::{params, Connection};

const SQL_INSERT_MANUFACTURER: &str = "INSERT INTO Manufacturer (ManID, Name) VALUES (?1, ?2)";

const SQL_INSERT_MODEL: &str =
    "INSERT INTO Model (ModelID, Name, Year, ManID) VALUES (?1, ?2, ?3, ?4)";

const SQL_INSERT_LOCATION: &str =
    "INSERT INTO Location (LocationID, State, Region) VALUES (?1, ?2, ?3)";

const SQL_INSERT_LISTING: &str = r#"
    INSERT INTO Listing (
        ListingID, Date, Image, Price, Mileage, Description, ModelID, LocationID
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub fn insert_manufacturer(conn: &Connection, m: &NewManufacturer<'_>) -> rusqlite::Result<()> {
    conn.prepare_cached(SQL_INSERT_MANUFACTURER)?
        .execute(params![m.id, m.name])?;
    Ok(())
}

pub fn insert_model(conn: &Connection, m: &NewModel<'_>) -> rusqlite::Result<()> {
    conn.prepare_cached(SQL_INSERT_MODEL)?
        .execute(params![m.id, m.name, m.year, m.manufacturer_id])?;
    Ok(())
}

pub fn insert_location(conn: &Connection, l: &NewLocation<'_>) -> rusqlite::Result<()> {
    conn.prepare_cached(SQL_INSERT_LOCATION)?
        .execute(params![l.id, l.state, l.region])?;
    Ok(())
}

pub fn insert_listing(conn: &Connection, l: &NewListing<'_>) -> rusqlite::Result<()> {
    conn.prepare_cached(SQL_INSERT_LISTING)?.execute(params![
        l.id,
        l.date,
        l.image,
        l.price,
        l.mileage,
        l.description,
        l.model_id,
        l.location_id,
    ])?;
    Ok(())
}

pub fn count_rows(conn: &Connection, table: Table) -> rusqlite::Result<u64> {
    // Table names come from a closed enum, never from input.
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    let n: i64 = conn.query_row(&sql, [], |r| r.get(0))?;
    Ok(n as u64)
}
