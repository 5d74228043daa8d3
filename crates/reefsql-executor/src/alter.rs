use crate::errors::ExecutorError;
use reefsql_catalog::ColumnSchema;
use reefsql_request::AddColumnRequest;
use reefsql_storage::Database;

/// Executor for ALTER TABLE ... ADD COLUMN requests
pub struct AddColumnExecutor;

impl AddColumnExecutor {
    /// Append a column to an existing table. Existing rows are backfilled
    /// through the column's default generator, or with an explicit NULL
    /// placeholder when there is none; rows are never dropped.
    pub fn execute(database: &Database, request: &AddColumnRequest) -> Result<(), ExecutorError> {
        database.add_column(&request.table_name, ColumnSchema::from(request.column.clone()))?;
        Ok(())
    }
}
