//! Top-level request dispatch.

use crate::errors::ExecutorError;
use crate::select::{QueryResult, SelectExecutor};
use crate::{
    AddColumnExecutor, CreateSequenceExecutor, CreateTableExecutor, DeleteExecutor,
    DropTableExecutor, InsertExecutor, UpdateExecutor,
};
use reefsql_request::Request;
use reefsql_storage::Database;

/// What a request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// DDL completed with nothing to report
    Done,
    /// DML completed; how many rows it touched
    RowsAffected(usize),
    /// A query's output rows
    Rows(QueryResult),
}

/// Execute one request against the database.
pub fn execute(database: &Database, request: &Request) -> Result<RequestOutcome, ExecutorError> {
    match request {
        Request::CreateTable(req) => {
            log::debug!("create table '{}'", req.table_name);
            CreateTableExecutor::execute(database, req)?;
            Ok(RequestOutcome::Done)
        }
        Request::AddColumn(req) => {
            log::debug!("add column '{}' to '{}'", req.column.name, req.table_name);
            AddColumnExecutor::execute(database, req)?;
            Ok(RequestOutcome::Done)
        }
        Request::DropTable(req) => {
            log::debug!("drop table '{}'", req.table_name);
            DropTableExecutor::execute(database, req)?;
            Ok(RequestOutcome::Done)
        }
        Request::CreateSequence(req) => {
            log::debug!("create sequence '{}'", req.sequence_name);
            CreateSequenceExecutor::execute(database, req)?;
            Ok(RequestOutcome::Done)
        }
        Request::Insert(req) => {
            log::debug!("insert into '{}'", req.table_name);
            let count = InsertExecutor::execute(database, req)?;
            Ok(RequestOutcome::RowsAffected(count))
        }
        Request::Update(req) => {
            log::debug!("update '{}'", req.table_name);
            let count = UpdateExecutor::execute(database, req)?;
            Ok(RequestOutcome::RowsAffected(count))
        }
        Request::Delete(req) => {
            log::debug!("delete from '{}'", req.table_name);
            let count = DeleteExecutor::execute(database, req)?;
            Ok(RequestOutcome::RowsAffected(count))
        }
        Request::Select(req) => {
            log::debug!("select from '{}'", req.table_name);
            let result = SelectExecutor::new(database).execute(req)?;
            Ok(RequestOutcome::Rows(result))
        }
    }
}
