use crate::Row;
use reefsql_catalog::TableSchema;

/// In-memory table - stores rows in insertion order.
///
/// Constraint checks live in [`crate::constraints`]; the table itself is a
/// plain container mutated only while its owner holds the write lock.
#[derive(Debug, Clone)]
pub struct Table {
    pub schema: TableSchema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with given schema
    pub fn new(schema: TableSchema) -> Self {
        Table { schema, rows: Vec::new() }
    }

    /// Get all rows (for scanning)
    pub fn scan(&self) -> &[Row] {
        &self.rows
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append an already-validated row
    pub(crate) fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Replace the whole row set (atomic commit of an update)
    pub(crate) fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Remove rows by index, highest first so indices stay valid
    pub(crate) fn remove_rows(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable();
        for index in indices.into_iter().rev() {
            self.rows.remove(index);
        }
    }

    /// Extend every row with one more value and record the new column
    pub(crate) fn append_column(
        &mut self,
        column: reefsql_catalog::ColumnSchema,
        fill: Vec<reefsql_types::SqlValue>,
    ) {
        debug_assert_eq!(fill.len(), self.rows.len());
        self.schema.columns.push(column);
        for (row, value) in self.rows.iter_mut().zip(fill) {
            row.values.push(value);
        }
    }
}
