//! Select request types

use crate::{AggregateFunction, Expression};

/// Item in the projection list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// A plain column. Under grouping it must name a group-by column.
    Column(String),
    /// An aggregate call; `column: None` is COUNT(*).
    Aggregate { func: AggregateFunction, column: Option<String>, distinct: bool },
}

/// SELECT request
#[derive(Debug, Clone, PartialEq)]
pub struct SelectRequest {
    pub table_name: String,
    pub projection: Vec<SelectItem>,
    pub predicate: Option<Expression>,
    pub group_by: Vec<String>,
    pub having: Option<Expression>,
    pub distinct: bool,
}

impl SelectRequest {
    /// A bare projection over a table, no filtering or grouping.
    pub fn new(table_name: impl Into<String>, projection: Vec<SelectItem>) -> Self {
        SelectRequest {
            table_name: table_name.into(),
            projection,
            predicate: None,
            group_by: Vec::new(),
            having: None,
            distinct: false,
        }
    }
}
