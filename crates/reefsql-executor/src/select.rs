//! SELECT execution: filtered projection, grouping, and aggregation over a
//! table snapshot.

use crate::errors::ExecutorError;
use crate::evaluator::ExpressionEvaluator;
use crate::grouping::{compute_aggregate, group_rows};
use reefsql_catalog::TableSchema;
use reefsql_request::{Expression, SelectItem, SelectRequest};
use reefsql_storage::{Database, Row};
use reefsql_types::SqlValue;

/// Result of a SELECT: output column names plus the produced rows.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Executes SELECT requests
pub struct SelectExecutor<'a> {
    database: &'a Database,
}

impl<'a> SelectExecutor<'a> {
    pub fn new(database: &'a Database) -> Self {
        SelectExecutor { database }
    }

    pub fn execute(&self, request: &SelectRequest) -> Result<QueryResult, ExecutorError> {
        let snapshot = self.database.snapshot(&request.table_name)?;
        let schema = &snapshot.schema;

        validate_columns(request, schema)?;

        // WHERE filter; rows where the predicate is unknown are dropped
        let evaluator = ExpressionEvaluator::new(schema);
        let mut filtered: Vec<Row> = Vec::new();
        for row in snapshot.rows {
            let keep = match &request.predicate {
                Some(predicate) => evaluator.eval_predicate(predicate, &row)?,
                None => true,
            };
            if keep {
                filtered.push(row);
            }
        }

        let has_aggregates = request
            .projection
            .iter()
            .any(|item| matches!(item, SelectItem::Aggregate { .. }));
        let grouped_mode =
            has_aggregates || !request.group_by.is_empty() || request.having.is_some();

        let mut result = if grouped_mode {
            self.execute_grouped(request, schema, filtered)?
        } else {
            self.execute_plain(request, schema, filtered)?
        };

        // Full-tuple strict equality: rows differing only by NULLs stay
        if request.distinct {
            let mut deduped: Vec<Row> = Vec::new();
            for row in result.rows {
                if !deduped.iter().any(|kept| kept.strictly_equals(&row)) {
                    deduped.push(row);
                }
            }
            result.rows = deduped;
        }

        Ok(result)
    }

    /// Plain projection, one output row per filtered row.
    fn execute_plain(
        &self,
        request: &SelectRequest,
        schema: &TableSchema,
        filtered: Vec<Row>,
    ) -> Result<QueryResult, ExecutorError> {
        let mut columns = Vec::new();
        let mut indices = Vec::new();
        for item in &request.projection {
            match item {
                SelectItem::Column(name) => {
                    // Existence was checked upfront
                    if let Some(index) = schema.get_column_index(name) {
                        columns.push(name.clone());
                        indices.push(index);
                    }
                }
                SelectItem::Aggregate { .. } => unreachable!("aggregates take the grouped path"),
            }
        }

        let rows = filtered
            .into_iter()
            .map(|row| Row::new(indices.iter().map(|&i| row.values[i].clone()).collect()))
            .collect();
        Ok(QueryResult { columns, rows })
    }

    /// Grouped projection: one output row per group. With no GROUP BY the
    /// whole filtered set forms a single implicit group.
    fn execute_grouped(
        &self,
        request: &SelectRequest,
        schema: &TableSchema,
        filtered: Vec<Row>,
    ) -> Result<QueryResult, ExecutorError> {
        let key_indices: Vec<usize> = request
            .group_by
            .iter()
            .filter_map(|name| schema.get_column_index(name))
            .collect();

        let groups = if request.group_by.is_empty() {
            vec![(Vec::new(), filtered)]
        } else {
            group_rows(filtered, &key_indices)
        };

        let columns = request
            .projection
            .iter()
            .map(|item| match item {
                SelectItem::Column(name) => name.clone(),
                SelectItem::Aggregate { func, column, distinct } => {
                    aggregate_label(func.name(), column.as_deref(), *distinct)
                }
            })
            .collect();

        let mut rows = Vec::new();
        for (key, members) in groups {
            if let Some(having) = &request.having {
                let verdict = eval_group_expr(having, &key, &request.group_by, &members, schema)?;
                let keep = match verdict {
                    SqlValue::Boolean(keep) => keep,
                    SqlValue::Null => false,
                    other => {
                        return Err(ExecutorError::InvalidPredicate(format!(
                            "HAVING must evaluate to boolean, got {}",
                            other
                        )))
                    }
                };
                if !keep {
                    continue;
                }
            }

            let mut values = Vec::with_capacity(request.projection.len());
            for item in &request.projection {
                let value = match item {
                    SelectItem::Column(name) => group_key_value(name, &key, &request.group_by)?,
                    SelectItem::Aggregate { func, column, distinct } => {
                        compute_aggregate(*func, column.as_deref(), *distinct, &members, schema)?
                    }
                };
                values.push(value);
            }
            rows.push(Row::new(values));
        }

        Ok(QueryResult { columns, rows })
    }
}

/// Evaluate a HAVING expression in the context of one group. Plain columns
/// resolve to the group key; aggregates reduce the group's rows.
fn eval_group_expr(
    expr: &Expression,
    key: &[SqlValue],
    group_by: &[String],
    members: &[Row],
    schema: &TableSchema,
) -> Result<SqlValue, ExecutorError> {
    match expr {
        Expression::Literal(value) => Ok(value.clone()),

        Expression::Column(name) => group_key_value(name, key, group_by),

        Expression::Aggregate { func, column, distinct } => {
            compute_aggregate(*func, column.as_deref(), *distinct, members, schema)
        }

        Expression::BinaryOp { op, left, right } => {
            let left_val = eval_group_expr(left, key, group_by, members, schema)?;
            let right_val = eval_group_expr(right, key, group_by, members, schema)?;
            crate::evaluator::eval_binary_op(&left_val, *op, &right_val)
        }

        Expression::UnaryOp { op, expr } => {
            let value = eval_group_expr(expr, key, group_by, members, schema)?;
            crate::evaluator::eval_unary_op(*op, &value)
        }

        Expression::IsNull { expr, negated } => {
            let value = eval_group_expr(expr, key, group_by, members, schema)?;
            Ok(SqlValue::Boolean(value.is_null() != *negated))
        }
    }
}

/// Resolve a plain column in a grouped context. Only group-by columns have
/// a single value per group.
fn group_key_value(
    name: &str,
    key: &[SqlValue],
    group_by: &[String],
) -> Result<SqlValue, ExecutorError> {
    group_by
        .iter()
        .position(|g| g == name)
        .map(|i| key[i].clone())
        .ok_or_else(|| {
            ExecutorError::InvalidAggregateTarget(format!(
                "column '{}' must appear in GROUP BY or inside an aggregate",
                name
            ))
        })
}

fn aggregate_label(func: &str, column: Option<&str>, distinct: bool) -> String {
    match column {
        None => format!("{}(*)", func),
        Some(name) if distinct => format!("{}(distinct {})", func, name),
        Some(name) => format!("{}({})", func, name),
    }
}

/// Upfront column existence checks so a bad reference fails the same way
/// whether or not any row reaches it.
fn validate_columns(request: &SelectRequest, schema: &TableSchema) -> Result<(), ExecutorError> {
    let check = |name: &str| -> Result<(), ExecutorError> {
        if schema.get_column_index(name).is_none() {
            return Err(ExecutorError::ColumnNotFound(name.to_string()));
        }
        Ok(())
    };

    for item in &request.projection {
        match item {
            SelectItem::Column(name) => check(name)?,
            SelectItem::Aggregate { column: Some(name), .. } => check(name)?,
            SelectItem::Aggregate { column: None, .. } => {}
        }
    }
    for name in &request.group_by {
        check(name)?;
    }
    for expr in request.predicate.iter().chain(request.having.iter()) {
        let mut bad = None;
        expr.visit_columns(&mut |name| {
            if bad.is_none() && schema.get_column_index(name).is_none() {
                bad = Some(name.to_string());
            }
        });
        if let Some(name) = bad {
            return Err(ExecutorError::ColumnNotFound(name));
        }
    }
    Ok(())
}
