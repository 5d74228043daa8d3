use crate::errors::ExecutorError;
use reefsql_request::InsertRequest;
use reefsql_storage::Database;

/// Executor for INSERT requests
pub struct InsertExecutor;

impl InsertExecutor {
    /// Execute an INSERT. Default markers resolve through the column's
    /// default generator; the assembled row is validated and appended
    /// atomically by the store. Returns the number of rows inserted.
    pub fn execute(database: &Database, request: &InsertRequest) -> Result<usize, ExecutorError> {
        database.insert(&request.table_name, request.values.clone())?;
        Ok(1)
    }
}
