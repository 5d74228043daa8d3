//! Storage - In-Memory Data Storage
//!
//! This crate provides the table store: in-memory rows per table, the
//! unified constraint validation every mutation goes through, and the
//! database handle tying catalog, tables, and sequences together.

pub mod constraints;
pub mod database;
pub mod error;
pub mod row;
pub mod table;

pub use database::{Database, TableSnapshot};
pub use error::StorageError;
pub use row::Row;
pub use table::Table;
