pub mod entities;
pub mod ids;
pub mod listing;
pub mod registry;
pub mod report;
