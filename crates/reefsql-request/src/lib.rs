//! Structured requests for the ReefSQL engine
//!
//! This crate defines the plain data records an external statement parser
//! produces and the engine consumes: DDL and DML requests, select requests,
//! and the expression trees used in predicates and projections. No SQL text
//! appears anywhere in the engine; these records are the whole interface.

mod ddl;
mod dml;
mod expression;
mod operators;
mod request;
mod select;

pub use ddl::{
    AddColumnRequest, ColumnDef, ColumnDefault, CreateSequenceRequest, CreateTableRequest,
    DropTableRequest, ForeignKeyDef,
};
pub use dml::{Assignment, DeleteRequest, InsertRequest, InsertValue, UpdateRequest};
pub use expression::{AggregateFunction, Expression};
pub use operators::{BinaryOperator, UnaryOperator};
pub use request::Request;
pub use select::{SelectItem, SelectRequest};
