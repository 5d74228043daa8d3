//! Executor - Request Execution Engine
//!
//! This crate evaluates structured requests against the table store:
//! expression evaluation with three-valued logic, filtered projection,
//! grouping and aggregation, constraint-checked mutation, and schema
//! changes.

pub mod errors;

mod alter;
mod create_table;
mod delete;
mod dispatch;
mod drop_table;
mod evaluator;
mod grouping;
mod insert;
mod select;
mod sequence;
mod update;

pub use alter::AddColumnExecutor;
pub use create_table::CreateTableExecutor;
pub use delete::DeleteExecutor;
pub use dispatch::{execute, RequestOutcome};
pub use drop_table::DropTableExecutor;
pub use errors::ExecutorError;
pub use evaluator::ExpressionEvaluator;
pub use insert::InsertExecutor;
pub use select::{QueryResult, SelectExecutor};
pub use sequence::CreateSequenceExecutor;
pub use update::UpdateExecutor;

#[cfg(test)]
mod tests;
