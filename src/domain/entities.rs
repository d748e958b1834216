// src/domain/entities.rs

//! Rows as written to the four tables. Borrowed so a record can be split
//! without cloning its text fields.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewManufacturer<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewModel<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub year: i64,
    pub manufacturer_id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub state: &'a str,
    pub region: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewListing<'a> {
    pub id: &'a str,
    pub date: &'a str,
    pub image: &'a str,
    pub price: f64,
    pub mileage: i64,
    pub description: &'a str,
    pub model_id: &'a str,
    pub location_id: &'a str,
}

/// The four target tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Manufacturer,
    Model,
    Location,
    Listing,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Manufacturer,
        Table::Model,
        Table::Location,
        Table::Listing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Manufacturer => "Manufacturer",
            Table::Model => "Model",
            Table::Location => "Location",
            Table::Listing => "Listing",
        }
    }
}
