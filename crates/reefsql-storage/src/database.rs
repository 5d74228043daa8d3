//! Database - catalog, tables, and sequences under one handle

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use reefsql_catalog::{Catalog, ColumnSchema, SequenceGenerator, TableSchema};
use reefsql_request::{ColumnDefault, InsertValue};
use reefsql_types::SqlValue;

use crate::{constraints, Row, StorageError, Table};

/// A consistent copy of one table: schema plus row set, taken under a
/// momentary shared read. Queries evaluate snapshots after the lock is
/// released, so they see all or none of a concurrent mutation.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    pub schema: TableSchema,
    pub rows: Vec<Row>,
}

/// In-memory database - owns the catalog, the table store, and the
/// process-wide sequence generator.
///
/// All operations take `&self`; interior locks provide the concurrency
/// contract. Every mutation on a table runs under that table's exclusive
/// write lock for its full duration. There are no cross-table locks:
/// foreign-key targets are snapshotted under a momentary read *before* the
/// mutating table's lock is taken, which also rules out lock-order
/// deadlock between mutually referencing tables. The window between that
/// snapshot and commit is an accepted race (no transaction manager in
/// scope).
#[derive(Debug, Default)]
pub struct Database {
    catalog: RwLock<Catalog>,
    tables: RwLock<HashMap<String, Arc<RwLock<Table>>>>,
    sequences: SequenceGenerator,
}

impl Database {
    /// Create a new empty database
    pub fn new() -> Self {
        Database {
            catalog: RwLock::new(Catalog::new()),
            tables: RwLock::new(HashMap::new()),
            sequences: SequenceGenerator::new(),
        }
    }

    /// The process-wide sequence generator
    pub fn sequences(&self) -> &SequenceGenerator {
        &self.sequences
    }

    /// Create a table: register the schema, then the empty row store.
    pub fn create_table(&self, schema: TableSchema) -> Result<(), StorageError> {
        let table_name = schema.name.clone();
        let mut catalog = self.catalog.write();
        catalog.create_table(schema)?;
        // Catalog registration validated the schema; take its canonical
        // copy (primary-key columns are now marked not-null).
        let schema = catalog
            .get_table(&table_name)
            .cloned()
            .ok_or_else(|| StorageError::TableNotFound(table_name.clone()))?;
        self.tables.write().insert(table_name.clone(), Arc::new(RwLock::new(Table::new(schema))));
        debug!("created table '{}'", table_name);
        Ok(())
    }

    /// Drop a table, discarding its schema and all rows irrecoverably.
    pub fn drop_table(&self, name: &str) -> Result<(), StorageError> {
        let mut catalog = self.catalog.write();
        catalog.drop_table(name)?;
        self.tables.write().remove(name);
        debug!("dropped table '{}'", name);
        Ok(())
    }

    /// Create a named sequence
    pub fn create_sequence(&self, name: &str) -> Result<(), StorageError> {
        self.sequences.create(name)?;
        Ok(())
    }

    /// Get a table schema by name
    pub fn get_schema(&self, name: &str) -> Result<TableSchema, StorageError> {
        Ok(self.catalog.read().require_table(name)?.clone())
    }

    /// List all table names
    pub fn list_tables(&self) -> Vec<String> {
        self.catalog.read().list_tables()
    }

    /// Take a consistent snapshot of one table for query evaluation.
    pub fn snapshot(&self, name: &str) -> Result<TableSnapshot, StorageError> {
        let handle = self.table_handle(name)?;
        let table = handle.read();
        Ok(TableSnapshot { schema: table.schema.clone(), rows: table.scan().to_vec() })
    }

    /// Insert one row. `values` supplies one entry per column in schema
    /// order; `Default` markers resolve through the column's default
    /// generator. The assembled row passes the unified constraint
    /// validation and is appended atomically, or the call fails with no
    /// effect.
    pub fn insert(&self, table_name: &str, values: Vec<InsertValue>) -> Result<(), StorageError> {
        let referenced = self.snapshot_foreign_targets(table_name)?;
        let handle = self.table_handle(table_name)?;
        let mut table = handle.write();

        if values.len() != table.schema.column_count() {
            return Err(StorageError::ColumnCountMismatch {
                expected: table.schema.column_count(),
                actual: values.len(),
            });
        }

        let mut row_values = Vec::with_capacity(values.len());
        for (value, column) in values.into_iter().zip(table.schema.columns.iter()) {
            row_values.push(match value {
                InsertValue::Value(v) => v,
                InsertValue::Default => self.resolve_default(column)?,
            });
        }
        let row = Row::new(row_values);

        constraints::validate_row(&table.schema, table.scan(), None, &row, &referenced)?;
        table.push_row(row);
        Ok(())
    }

    /// Delete all rows matching the predicate closure; returns the count.
    /// Zero matches is not an error. The predicate runs under the table's
    /// write lock; an evaluation error aborts with no rows removed.
    pub fn delete_where(
        &self,
        table_name: &str,
        predicate: &mut dyn FnMut(&TableSchema, &Row) -> Result<bool, StorageError>,
    ) -> Result<usize, StorageError> {
        let handle = self.table_handle(table_name)?;
        let mut table = handle.write();

        let mut matched = Vec::new();
        for (idx, row) in table.scan().iter().enumerate() {
            if predicate(&table.schema, row)? {
                matched.push(idx);
            }
        }
        let count = matched.len();
        table.remove_rows(matched);
        debug!("deleted {} row(s) from '{}'", count, table_name);
        Ok(count)
    }

    /// Update rows through an apply closure returning `Some(new_row)` for
    /// rows it matched and changed. Every changed row is re-validated
    /// through the same constraint routine as insert; any violation aborts
    /// the whole call with no rows changed.
    pub fn update_where(
        &self,
        table_name: &str,
        apply: &mut dyn FnMut(&TableSchema, &Row) -> Result<Option<Row>, StorageError>,
    ) -> Result<usize, StorageError> {
        let referenced = self.snapshot_foreign_targets(table_name)?;
        let handle = self.table_handle(table_name)?;
        let mut table = handle.write();

        let mut prospective = table.scan().to_vec();
        let mut changed = Vec::new();
        for (idx, row) in table.scan().iter().enumerate() {
            if let Some(new_row) = apply(&table.schema, row)? {
                prospective[idx] = new_row;
                changed.push(idx);
            }
        }

        for &idx in &changed {
            constraints::validate_row(
                &table.schema,
                &prospective,
                Some(idx),
                &prospective[idx],
                &referenced,
            )?;
        }

        let count = changed.len();
        table.replace_rows(prospective);
        debug!("updated {} row(s) in '{}'", count, table_name);
        Ok(count)
    }

    /// Append a column to a table. Existing rows are extended through the
    /// default generator when one is supplied, otherwise with an explicit
    /// NULL placeholder - even for a not-null column, rows are never
    /// dropped.
    pub fn add_column(&self, table_name: &str, column: ColumnSchema) -> Result<(), StorageError> {
        let mut catalog = self.catalog.write();
        let schema = catalog.require_table(table_name)?;
        if schema.get_column(&column.name).is_some() {
            return Err(StorageError::Catalog(
                reefsql_catalog::CatalogError::ColumnAlreadyExists {
                    table_name: table_name.to_string(),
                    column_name: column.name,
                },
            ));
        }

        let handle = self.table_handle(table_name)?;
        let mut table = handle.write();

        let mut fill = Vec::with_capacity(table.row_count());
        for _ in 0..table.row_count() {
            fill.push(self.resolve_default(&column)?);
        }

        catalog.add_column(table_name, column.clone())?;
        table.append_column(column, fill);
        Ok(())
    }

    fn table_handle(&self, name: &str) -> Result<Arc<RwLock<Table>>, StorageError> {
        self.tables
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))
    }

    fn resolve_default(&self, column: &ColumnSchema) -> Result<SqlValue, StorageError> {
        match &column.default {
            Some(ColumnDefault::Literal(value)) => Ok(value.clone()),
            Some(ColumnDefault::Sequence(sequence)) => {
                Ok(SqlValue::Integer(self.sequences.next(sequence)?))
            }
            None => Ok(SqlValue::Null),
        }
    }

    /// Snapshot every foreign-key target table under a momentary shared
    /// read, before the mutating table's write lock is taken. The mutating
    /// table itself is skipped; self-references are checked against the
    /// live row set.
    fn snapshot_foreign_targets(
        &self,
        table_name: &str,
    ) -> Result<HashMap<String, TableSnapshot>, StorageError> {
        let targets: Vec<String> = {
            let catalog = self.catalog.read();
            catalog
                .require_table(table_name)?
                .foreign_keys
                .iter()
                .map(|fk| fk.referenced_table.clone())
                .filter(|name| name != table_name)
                .collect()
        };

        let mut snapshots = HashMap::new();
        for target in targets {
            if !snapshots.contains_key(&target) {
                let snapshot = self.snapshot(&target)?;
                snapshots.insert(target, snapshot);
            }
        }
        Ok(snapshots)
    }
}
