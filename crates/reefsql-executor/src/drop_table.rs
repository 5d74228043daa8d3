use crate::errors::ExecutorError;
use reefsql_request::DropTableRequest;
use reefsql_storage::Database;

/// Executor for DROP TABLE requests
pub struct DropTableExecutor;

impl DropTableExecutor {
    /// Remove the schema and all rows. The data is gone irrecoverably.
    pub fn execute(database: &Database, request: &DropTableRequest) -> Result<(), ExecutorError> {
        database.drop_table(&request.table_name)?;
        Ok(())
    }
}
