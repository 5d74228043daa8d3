//! Data manipulation requests

use crate::Expression;
use reefsql_types::SqlValue;

/// One slot of an insert's value list.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValue {
    /// An explicit value (possibly NULL)
    Value(SqlValue),
    /// Resolve through the column's default generator
    Default,
}

/// INSERT request: one value per column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRequest {
    pub table_name: String,
    pub values: Vec<InsertValue>,
}

/// Column assignment (column = expression)
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expression,
}

/// UPDATE request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub table_name: String,
    pub assignments: Vec<Assignment>,
    pub predicate: Option<Expression>,
}

/// DELETE request
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub table_name: String,
    pub predicate: Option<Expression>,
}
