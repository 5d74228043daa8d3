use crate::errors::ExecutorError;
use reefsql_request::CreateSequenceRequest;
use reefsql_storage::Database;

/// Executor for CREATE SEQUENCE requests
pub struct CreateSequenceExecutor;

impl CreateSequenceExecutor {
    pub fn execute(
        database: &Database,
        request: &CreateSequenceRequest,
    ) -> Result<(), ExecutorError> {
        database.create_sequence(&request.sequence_name)?;
        Ok(())
    }
}
