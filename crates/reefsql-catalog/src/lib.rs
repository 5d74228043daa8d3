//! Catalog - Schema Metadata Storage
//!
//! Provides metadata structures for tables and columns along with the
//! catalog registry that tracks table schemas, and the process-wide
//! sequence generator used for default column values.

mod column;
pub mod errors;
mod foreign_key;
mod sequence;
mod store;
mod table;

pub use column::ColumnSchema;
pub use errors::CatalogError;
pub use foreign_key::ForeignKey;
pub use sequence::SequenceGenerator;
pub use store::Catalog;
pub use table::TableSchema;
