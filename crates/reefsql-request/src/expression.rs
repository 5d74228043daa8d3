//! Expression types for use in predicates, projections, and HAVING clauses

use crate::{BinaryOperator, UnaryOperator};
use reefsql_types::SqlValue;

/// An expression over column values and literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value (42, 'hello', TRUE, NULL)
    Literal(SqlValue),

    /// Column reference
    Column(String),

    /// Binary operation (a + b, x = y, p AND q)
    BinaryOp { op: BinaryOperator, left: Box<Expression>, right: Box<Expression> },

    /// Unary operation (NOT x, -5)
    UnaryOp { op: UnaryOperator, expr: Box<Expression> },

    /// IS NULL / IS NOT NULL
    IsNull {
        expr: Box<Expression>,
        negated: bool, // false = IS NULL, true = IS NOT NULL
    },

    /// Aggregate call. `column: None` is COUNT(*); the other functions
    /// require a column argument. Only valid where grouping applies
    /// (projection items and HAVING), never in a row predicate.
    Aggregate { func: AggregateFunction, column: Option<String>, distinct: bool },
}

/// Functions reducing a group of rows to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }
}

impl Expression {
    /// Check whether this expression contains an aggregate call anywhere.
    pub fn contains_aggregate(&self) -> bool {
        match self {
            Expression::Aggregate { .. } => true,
            Expression::BinaryOp { left, right, .. } => {
                left.contains_aggregate() || right.contains_aggregate()
            }
            Expression::UnaryOp { expr, .. } | Expression::IsNull { expr, .. } => {
                expr.contains_aggregate()
            }
            Expression::Literal(_) | Expression::Column(_) => false,
        }
    }

    /// Visit every column name referenced by this expression, including
    /// aggregate arguments.
    pub fn visit_columns<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        match self {
            Expression::Column(name) => visit(name),
            Expression::Aggregate { column, .. } => {
                if let Some(name) = column {
                    visit(name);
                }
            }
            Expression::BinaryOp { left, right, .. } => {
                left.visit_columns(visit);
                right.visit_columns(visit);
            }
            Expression::UnaryOp { expr, .. } | Expression::IsNull { expr, .. } => {
                expr.visit_columns(visit);
            }
            Expression::Literal(_) => {}
        }
    }
}
