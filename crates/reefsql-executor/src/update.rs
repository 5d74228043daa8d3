use crate::errors::ExecutorError;
use crate::evaluator::{validate_expr_columns, ExpressionEvaluator};
use reefsql_request::UpdateRequest;
use reefsql_storage::{Database, Row, StorageError};

/// Executor for UPDATE requests
pub struct UpdateExecutor;

impl UpdateExecutor {
    /// Execute an UPDATE. Every matched row is rewritten through the
    /// assignments and re-validated against the full constraint set; any
    /// violation aborts the whole update with no rows changed. Returns the
    /// number of rows updated.
    pub fn execute(database: &Database, request: &UpdateRequest) -> Result<usize, ExecutorError> {
        let schema = database.get_schema(&request.table_name)?;
        for assignment in &request.assignments {
            if schema.get_column_index(&assignment.column).is_none() {
                return Err(ExecutorError::ColumnNotFound(assignment.column.clone()));
            }
            validate_expr_columns(&assignment.value, &schema)?;
        }
        if let Some(predicate) = &request.predicate {
            validate_expr_columns(predicate, &schema)?;
        }

        let mut inner: Option<ExecutorError> = None;
        let result = database.update_where(&request.table_name, &mut |schema, row| {
            let evaluator = ExpressionEvaluator::new(schema);

            let mut step = || -> Result<Option<Row>, ExecutorError> {
                if let Some(predicate) = &request.predicate {
                    if !evaluator.eval_predicate(predicate, row)? {
                        return Ok(None);
                    }
                }
                let mut values = row.values.clone();
                for assignment in &request.assignments {
                    // Index existence was checked upfront; assignments see
                    // the row's pre-update values
                    if let Some(index) = schema.get_column_index(&assignment.column) {
                        values[index] = evaluator.eval(&assignment.value, row)?;
                    }
                }
                Ok(Some(Row::new(values)))
            };

            match step() {
                Ok(updated) => Ok(updated),
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
