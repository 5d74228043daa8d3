use crate::errors::ExecutorError;
use crate::evaluator::{validate_expr_columns, ExpressionEvaluator};
use reefsql_request::DeleteRequest;
use reefsql_storage::{Database, StorageError};

/// Executor for DELETE requests
pub struct DeleteExecutor;

impl DeleteExecutor {
    /// Execute a DELETE. Rows where the predicate is FALSE or unknown are
    /// kept. Returns the number of rows removed; zero matches is not an
    /// error.
    pub fn execute(database: &Database, request: &DeleteRequest) -> Result<usize, ExecutorError> {
        if let Some(predicate) = &request.predicate {
            let schema = database.get_schema(&request.table_name)?;
            validate_expr_columns(predicate, &schema)?;
        }

        // Predicate evaluation runs inside the store's write lock; typed
        // errors are stashed here and re-raised over the string the store
        // carries across the boundary.
        let mut inner: Option<ExecutorError> = None;
        let result = database.delete_where(&request.table_name, &mut |schema, row| {
            let predicate = match &request.predicate {
                Some(predicate) => predicate,
                None => return Ok(true),
            };
            let evaluator = ExpressionEvaluator::new(schema);
            match evaluator.eval_predicate(predicate, row) {
                Ok(keep) => Ok(keep),
                Err(err) => {
                    let message = err.to_string();
                    inner = Some(err);
                    Err(StorageError::Expression(message))
                }
            }
        });

        match result {
            Ok(count) => Ok(count),
            Err(err) => match inner {
                Some(typed) => Err(typed),
                None => Err(err.into()),
            },
        }
    }
}
