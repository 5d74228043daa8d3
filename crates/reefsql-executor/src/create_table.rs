use crate::errors::ExecutorError;
use reefsql_catalog::{ColumnSchema, ForeignKey, TableSchema};
use reefsql_request::CreateTableRequest;
use reefsql_storage::Database;

/// Executor for CREATE TABLE requests
pub struct CreateTableExecutor;

impl CreateTableExecutor {
    /// Build a schema from the request and register it with zero rows.
    /// Constraint column names and foreign-key targets are validated
    /// eagerly by the catalog.
    pub fn execute(database: &Database, request: &CreateTableRequest) -> Result<(), ExecutorError> {
        let mut schema = TableSchema::new(
            request.table_name.clone(),
            request.columns.iter().cloned().map(ColumnSchema::from).collect(),
        );
        if !request.primary_key.is_empty() {
            schema = schema.with_primary_key(request.primary_key.clone());
        }
        for unique in &request.unique {
            schema = schema.with_unique(unique.clone());
        }
        for fk in &request.foreign_keys {
            schema = schema.with_foreign_key(ForeignKey::from(fk.clone()));
        }

        database.create_table(schema)?;
        Ok(())
    }
}
