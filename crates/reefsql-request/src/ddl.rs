//! Data definition requests

use reefsql_types::{DataType, SqlValue};

/// Default value generator for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// A literal value cloned into each defaulted row
    Literal(SqlValue),
    /// The next value of a named sequence
    Sequence(String),
}

/// Column definition inside a create-table or add-column request.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        ColumnDef { name: name.into(), data_type, nullable, default: None }
    }

    pub fn with_default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }
}

/// Foreign key definition: local columns referencing columns of another
/// (or the same) table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDef {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

/// CREATE TABLE request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableRequest {
    pub table_name: String,
    pub columns: Vec<ColumnDef>,
    /// Primary key column names (empty = no primary key)
    pub primary_key: Vec<String>,
    /// Unique column subsets, each enforced independently
    pub unique: Vec<Vec<String>>,
    pub foreign_keys: Vec<ForeignKeyDef>,
}

impl CreateTableRequest {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        CreateTableRequest {
            table_name: table_name.into(),
            columns,
            primary_key: Vec::new(),
            unique: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }
}

/// ALTER TABLE ... ADD COLUMN request. Columns are append-only; there is no
/// drop-column or retype counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumnRequest {
    pub table_name: String,
    pub column: ColumnDef,
}

/// DROP TABLE request
#[derive(Debug, Clone, PartialEq)]
pub struct DropTableRequest {
    pub table_name: String,
}

/// CREATE SEQUENCE request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSequenceRequest {
    pub sequence_name: String,
}
