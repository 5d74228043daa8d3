//! Catalog registry - manages all table schemas

use std::collections::HashMap;

use crate::{CatalogError, ColumnSchema, TableSchema};

/// Database catalog - manages all table schemas.
///
/// The catalog is the single owner of schema metadata; the table store
/// keeps a copy of each schema alongside its rows and both are mutated
/// together.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<String, TableSchema>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Catalog { tables: HashMap::new() }
    }

    /// Register a table schema.
    ///
    /// Validates that primary-key, unique, and foreign-key column lists
    /// name real columns, and that every foreign key target exists at
    /// creation time. Primary-key columns are forced not-null. A table may
    /// reference itself.
    pub fn create_table(&mut self, mut schema: TableSchema) -> Result<(), CatalogError> {
        let table_name = schema.name.clone();
        if self.tables.contains_key(&table_name) {
            return Err(CatalogError::TableAlreadyExists(table_name));
        }

        if let Some(pk) = schema.primary_key.clone() {
            for name in &pk {
                let idx = schema.get_column_index(name).ok_or_else(|| {
                    CatalogError::ColumnNotFound {
                        table_name: table_name.clone(),
                        column_name: name.clone(),
                    }
                })?;
                schema.columns[idx].nullable = false;
            }
        }
        for unique in &schema.unique_constraints {
            for name in unique {
                if schema.get_column(name).is_none() {
                    return Err(CatalogError::ColumnNotFound {
                        table_name: table_name.clone(),
                        column_name: name.clone(),
                    });
                }
            }
        }

        for fk in &schema.foreign_keys {
            for name in &fk.columns {
                if schema.get_column(name).is_none() {
                    return Err(CatalogError::ColumnNotFound {
                        table_name: table_name.clone(),
                        column_name: name.clone(),
                    });
                }
            }
            // Self-references resolve against the schema being created
            let referenced = if fk.referenced_table == table_name {
                &schema
            } else {
                self.tables.get(&fk.referenced_table).ok_or_else(|| {
                    CatalogError::UnknownReferencedTable {
                        table_name: table_name.clone(),
                        referenced_table: fk.referenced_table.clone(),
                    }
                })?
            };
            for name in &fk.referenced_columns {
                if referenced.get_column(name).is_none() {
                    return Err(CatalogError::UnknownReferencedColumn {
                        referenced_table: fk.referenced_table.clone(),
                        column_name: name.clone(),
                    });
                }
            }
        }

        self.tables.insert(table_name, schema);
        Ok(())
    }

    /// Get a table schema by name
    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// Get a table schema by name, failing if absent
    pub fn require_table(&self, name: &str) -> Result<&TableSchema, CatalogError> {
        self.tables.get(name).ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// Drop a table schema. Frees the name for reuse.
    pub fn drop_table(&mut self, name: &str) -> Result<(), CatalogError> {
        if self.tables.remove(name).is_some() {
            Ok(())
        } else {
            Err(CatalogError::TableNotFound(name.to_string()))
        }
    }

    /// Append a column to an existing table schema. Columns cannot be
    /// removed or retyped afterwards.
    pub fn add_column(&mut self, table_name: &str, column: ColumnSchema) -> Result<(), CatalogError> {
        let schema = self
            .tables
            .get_mut(table_name)
            .ok_or_else(|| CatalogError::TableNotFound(table_name.to_string()))?;
        if schema.get_column(&column.name).is_some() {
            return Err(CatalogError::ColumnAlreadyExists {
                table_name: table_name.to_string(),
                column_name: column.name,
            });
        }
        schema.columns.push(column);
        Ok(())
    }

    /// List all table names
    pub fn list_tables(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Check if table exists
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}
