//! Row-context expression evaluation with three-valued logic.

use crate::errors::ExecutorError;
use reefsql_catalog::TableSchema;
use reefsql_request::{BinaryOperator, Expression, UnaryOperator};
use reefsql_storage::Row;
use reefsql_types::SqlValue;

/// Evaluates expressions in the context of a row
pub struct ExpressionEvaluator<'a> {
    schema: &'a TableSchema,
}

impl<'a> ExpressionEvaluator<'a> {
    pub fn new(schema: &'a TableSchema) -> Self {
        ExpressionEvaluator { schema }
    }

    /// Evaluate an expression against a single row.
    pub fn eval(&self, expr: &Expression, row: &Row) -> Result<SqlValue, ExecutorError> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),

            Expression::Column(name) => {
                let index = self
                    .schema
                    .get_column_index(name)
                    .ok_or_else(|| ExecutorError::ColumnNotFound(name.clone()))?;
                Ok(row.values[index].clone())
            }

            Expression::BinaryOp { op, left, right } => {
                let left_val = self.eval(left, row)?;
                let right_val = self.eval(right, row)?;
                eval_binary_op(&left_val, *op, &right_val)
            }

            Expression::UnaryOp { op, expr } => {
                let value = self.eval(expr, row)?;
                eval_unary_op(*op, &value)
            }

            // IS NULL is the one predicate that never yields unknown
            Expression::IsNull { expr, negated } => {
                let value = self.eval(expr, row)?;
                Ok(SqlValue::Boolean(value.is_null() != *negated))
            }

            Expression::Aggregate { func, .. } => Err(ExecutorError::InvalidAggregateTarget(
                format!("{} is not valid in a row predicate", func.name()),
            )),
        }
    }

    /// Evaluate a predicate into the three-valued filter decision: rows
    /// where the result is FALSE or unknown are excluded.
    pub fn eval_predicate(&self, expr: &Expression, row: &Row) -> Result<bool, ExecutorError> {
        match self.eval(expr, row)? {
            SqlValue::Boolean(keep) => Ok(keep),
            SqlValue::Null => Ok(false),
            other => Err(ExecutorError::InvalidPredicate(format!(
                "predicate must evaluate to boolean, got {}",
                other
            ))),
        }
    }
}

pub(crate) fn eval_binary_op(
    left: &SqlValue,
    op: BinaryOperator,
    right: &SqlValue,
) -> Result<SqlValue, ExecutorError> {
    use BinaryOperator::*;

    match op {
        And | Or => return eval_logical(left, op, right),
        _ => {}
    }

    // NULL operand makes every arithmetic or comparison result unknown
    if left.is_null() || right.is_null() {
        return Ok(SqlValue::Null);
    }

    match op {
        Plus | Minus | Multiply | Divide | Modulo => eval_arithmetic(left, op, right),
        Equal | NotEqual | LessThan | LessThanOrEqual | GreaterThan | GreaterThanOrEqual => {
            eval_comparison(left, op, right)
        }
        And | Or => unreachable!(),
    }
}

/// Kleene AND/OR. A NULL operand only dominates when the other side does
/// not already decide the result.
fn eval_logical(
    left: &SqlValue,
    op: BinaryOperator,
    right: &SqlValue,
) -> Result<SqlValue, ExecutorError> {
    let as_bool = |value: &SqlValue| -> Result<Option<bool>, ExecutorError> {
        match value {
            SqlValue::Boolean(b) => Ok(Some(*b)),
            SqlValue::Null => Ok(None),
            other => Err(ExecutorError::TypeMismatch {
                left: left.clone(),
                op: format!("{:?}", op),
                right: other.clone(),
            }),
        }
    };

    let a = as_bool(left)?;
    let b = as_bool(right)?;
    let result = match op {
        BinaryOperator::And => match (a, b) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        },
        BinaryOperator::Or => match (a, b) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        },
        _ => unreachable!(),
    };
    Ok(result.map_or(SqlValue::Null, SqlValue::Boolean))
}

fn eval_arithmetic(
    left: &SqlValue,
    op: BinaryOperator,
    right: &SqlValue,
) -> Result<SqlValue, ExecutorError> {
    use BinaryOperator::*;
    use SqlValue::*;

    match (left, right) {
        (Integer(a), Integer(b)) => match op {
            Plus => Ok(Integer(a + b)),
            Minus => Ok(Integer(a - b)),
            Multiply => Ok(Integer(a * b)),
            Divide => {
                if *b == 0 {
                    Err(ExecutorError::DivisionByZero)
                } else {
                    Ok(Integer(a / b))
                }
            }
            Modulo => {
                if *b == 0 {
                    Err(ExecutorError::DivisionByZero)
                } else {
                    Ok(Integer(a % b))
                }
            }
            _ => unreachable!(),
        },
        // Mixed integer/real arithmetic widens to real
        (Real(_), Real(_)) | (Real(_), Integer(_)) | (Integer(_), Real(_)) => {
            let a = to_f64(left);
            let b = to_f64(right);
            match op {
                Plus => Ok(Real(a + b)),
                Minus => Ok(Real(a - b)),
                Multiply => Ok(Real(a * b)),
                Divide => {
                    if b == 0.0 {
                        Err(ExecutorError::DivisionByZero)
                    } else {
                        Ok(Real(a / b))
                    }
                }
                Modulo => {
                    if b == 0.0 {
                        Err(ExecutorError::DivisionByZero)
                    } else {
                        Ok(Real(a % b))
                    }
                }
                _ => unreachable!(),
            }
        }
        _ => Err(ExecutorError::TypeMismatch {
            left: left.clone(),
            op: format!("{:?}", op),
            right: right.clone(),
        }),
    }
}

fn eval_comparison(
    left: &SqlValue,
    op: BinaryOperator,
    right: &SqlValue,
) -> Result<SqlValue, ExecutorError> {
    use std::cmp::Ordering;

    let numeric = |value: &SqlValue| matches!(value, SqlValue::Integer(_) | SqlValue::Real(_));

    // Mixed integer/real comparisons widen to real
    let ordering = if numeric(left) && numeric(right) {
        match to_f64(left).partial_cmp(&to_f64(right)) {
            Some(ordering) => ordering,
            // NaN compares as unknown
            None => return Ok(SqlValue::Null),
        }
    } else {
        match left.partial_cmp(right) {
            Some(ordering) => ordering,
            // Incomparable non-null values are a type error, not unknown
            None => {
                return Err(ExecutorError::TypeMismatch {
                    left: left.clone(),
                    op: format!("{:?}", op),
                    right: right.clone(),
                })
            }
        }
    };

    let result = match op {
        BinaryOperator::Equal => ordering == Ordering::Equal,
        BinaryOperator::NotEqual => ordering != Ordering::Equal,
        BinaryOperator::LessThan => ordering == Ordering::Less,
        BinaryOperator::LessThanOrEqual => ordering != Ordering::Greater,
        BinaryOperator::GreaterThan => ordering == Ordering::Greater,
        BinaryOperator::GreaterThanOrEqual => ordering != Ordering::Less,
        _ => unreachable!(),
    };
    Ok(SqlValue::Boolean(result))
}

pub(crate) fn eval_unary_op(op: UnaryOperator, value: &SqlValue) -> Result<SqlValue, ExecutorError> {
    match (op, value) {
        (_, SqlValue::Null) => Ok(SqlValue::Null),
        (UnaryOperator::Not, SqlValue::Boolean(b)) => Ok(SqlValue::Boolean(!b)),
        (UnaryOperator::Minus, SqlValue::Integer(n)) => Ok(SqlValue::Integer(-n)),
        (UnaryOperator::Minus, SqlValue::Real(x)) => Ok(SqlValue::Real(-x)),
        _ => Err(ExecutorError::TypeMismatch {
            left: value.clone(),
            op: format!("{:?}", op),
            right: SqlValue::Null,
        }),
    }
}

/// Check every column an expression references against the schema, so a bad
/// reference fails with a typed error before execution begins.
pub(crate) fn validate_expr_columns(
    expr: &Expression,
    schema: &TableSchema,
) -> Result<(), ExecutorError> {
    let mut bad = None;
    expr.visit_columns(&mut |name| {
        if bad.is_none() && schema.get_column_index(name).is_none() {
            bad = Some(name.to_string());
        }
    });
    match bad {
        Some(name) => Err(ExecutorError::ColumnNotFound(name)),
        None => Ok(()),
    }
}

fn to_f64(value: &SqlValue) -> f64 {
    match value {
        SqlValue::Integer(n) => *n as f64,
        SqlValue::Real(x) => *x,
        _ => f64::NAN,
    }
}
