use crate::{ColumnSchema, ForeignKey};

/// Table schema definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
    /// Primary key column names (None if no primary key, Some(vec) for
    /// single or composite key). Primary-key columns are implicitly
    /// not-null; registration forces the flag.
    pub primary_key: Option<Vec<String>>,
    /// Unique column subsets, each enforced independently of the others.
    pub unique_constraints: Vec<Vec<String>>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        TableSchema {
            name: name.into(),
            columns,
            primary_key: None,
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Create a table schema with a primary key
    pub fn with_primary_key(mut self, primary_key: Vec<String>) -> Self {
        self.primary_key = Some(primary_key);
        self
    }

    pub fn with_unique(mut self, columns: Vec<String>) -> Self {
        self.unique_constraints.push(columns);
        self
    }

    pub fn with_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Get column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Get column index by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Get number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Resolve a list of column names to indices; None if any name is
    /// unknown.
    pub fn resolve_columns(&self, names: &[String]) -> Option<Vec<usize>> {
        names.iter().map(|name| self.get_column_index(name)).collect()
    }

    /// Get the indices of primary key columns
    pub fn primary_key_indices(&self) -> Option<Vec<usize>> {
        self.primary_key.as_ref().and_then(|pk| self.resolve_columns(pk))
    }
}
