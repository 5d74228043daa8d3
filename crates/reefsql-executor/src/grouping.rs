//! Grouping and aggregate accumulation for SELECT execution.

use crate::errors::ExecutorError;
use reefsql_request::AggregateFunction;
use reefsql_storage::Row;
use reefsql_types::SqlValue;

/// Accumulator for aggregate functions
#[derive(Debug, Clone)]
pub(crate) enum AggregateAccumulator {
    Count { count: i64 },
    Sum { sum: Option<SqlValue> },
    Avg { sum: f64, count: i64 },
    Min { value: Option<SqlValue> },
    Max { value: Option<SqlValue> },
}

impl AggregateAccumulator {
    pub(crate) fn new(func: AggregateFunction) -> Self {
        match func {
            AggregateFunction::Count => AggregateAccumulator::Count { count: 0 },
            AggregateFunction::Sum => AggregateAccumulator::Sum { sum: None },
            AggregateFunction::Avg => AggregateAccumulator::Avg { sum: 0.0, count: 0 },
            AggregateFunction::Min => AggregateAccumulator::Min { value: None },
            AggregateFunction::Max => AggregateAccumulator::Max { value: None },
        }
    }

    /// Feed one non-null value into the accumulator. Callers skip NULLs
    /// before this point.
    pub(crate) fn accumulate(&mut self, value: &SqlValue) -> Result<(), ExecutorError> {
        match self {
            AggregateAccumulator::Count { count } => {
                *count += 1;
                Ok(())
            }

            // SUM keeps the input's numeric type: an all-integer column sums
            // to an integer, anything touching a real widens to real.
            AggregateAccumulator::Sum { sum } => {
                let next = match (sum.as_ref(), value) {
                    (None, SqlValue::Integer(b)) => SqlValue::Integer(*b),
                    (None, SqlValue::Real(b)) => SqlValue::Real(*b),
                    (Some(SqlValue::Integer(a)), SqlValue::Integer(b)) => SqlValue::Integer(a + b),
                    (Some(SqlValue::Integer(a)), SqlValue::Real(b)) => SqlValue::Real(*a as f64 + b),
                    (Some(SqlValue::Real(a)), SqlValue::Integer(b)) => SqlValue::Real(a + *b as f64),
                    (Some(SqlValue::Real(a)), SqlValue::Real(b)) => SqlValue::Real(a + b),
                    _ => {
                        return Err(ExecutorError::InvalidAggregateTarget(format!(
                            "sum over non-numeric value {}",
                            value
                        )))
                    }
                };
                *sum = Some(next);
                Ok(())
            }

            AggregateAccumulator::Avg { sum, count } => {
                match value {
                    SqlValue::Integer(n) => *sum += *n as f64,
                    SqlValue::Real(x) => *sum += x,
                    _ => {
                        return Err(ExecutorError::InvalidAggregateTarget(format!(
                            "avg over non-numeric value {}",
                            value
                        )))
                    }
                }
                *count += 1;
                Ok(())
            }

            AggregateAccumulator::Min { value: current } => {
                let replace = match current {
                    None => true,
                    Some(best) => value.total_cmp(best) == std::cmp::Ordering::Less,
                };
                if replace {
                    *current = Some(value.clone());
                }
                Ok(())
            }

            AggregateAccumulator::Max { value: current } => {
                let replace = match current {
                    None => true,
                    Some(best) => value.total_cmp(best) == std::cmp::Ordering::Greater,
                };
                if replace {
                    *current = Some(value.clone());
                }
                Ok(())
            }
        }
    }

    /// Finish the aggregate. An empty (or all-NULL) input finalizes to NULL
    /// for every function except COUNT, which finalizes to 0.
    pub(crate) fn finalize(self) -> SqlValue {
        match self {
            AggregateAccumulator::Count { count } => SqlValue::Integer(count),
            AggregateAccumulator::Sum { sum } => sum.unwrap_or(SqlValue::Null),
            AggregateAccumulator::Avg { sum, count } => {
                if count == 0 {
                    SqlValue::Null
                } else {
                    SqlValue::Real(sum / count as f64)
                }
            }
            AggregateAccumulator::Min { value } => value.unwrap_or(SqlValue::Null),
            AggregateAccumulator::Max { value } => value.unwrap_or(SqlValue::Null),
        }
    }
}

/// Compute an aggregate over the rows of one group.
///
/// `column: None` is COUNT(*), which counts every row regardless of NULLs.
/// All other forms skip NULL values in the argument column; DISTINCT
/// deduplicates the surviving values first.
pub(crate) fn compute_aggregate(
    func: AggregateFunction,
    column: Option<&str>,
    distinct: bool,
    rows: &[Row],
    schema: &reefsql_catalog::TableSchema,
) -> Result<SqlValue, ExecutorError> {
    let column = match column {
        None => {
            if func == AggregateFunction::Count {
                return Ok(SqlValue::Integer(rows.len() as i64));
            }
            return Err(ExecutorError::InvalidAggregateTarget(format!(
                "{} requires a column argument",
                func.name()
            )));
        }
        Some(name) => name,
    };

    let index = schema
        .get_column_index(column)
        .ok_or_else(|| ExecutorError::ColumnNotFound(column.to_string()))?;

    let mut accumulator = AggregateAccumulator::new(func);
    let mut seen: Vec<SqlValue> = Vec::new();
    for row in rows {
        let value = &row.values[index];
        if value.is_null() {
            continue;
        }
        if distinct {
            if seen.iter().any(|v| v.strictly_equals(value)) {
                continue;
            }
            seen.push(value.clone());
        }
        accumulator.accumulate(value)?;
    }
    Ok(accumulator.finalize())
}

/// Grouped rows: (group key values, rows in group), in first-appearance order
pub(crate) type GroupedRows = Vec<(Vec<SqlValue>, Vec<Row>)>;

/// Partition rows by the values of the group-by columns. Unlike row
/// comparison, grouping puts all NULL keys into one group.
pub(crate) fn group_rows(
    rows: Vec<Row>,
    key_indices: &[usize],
) -> GroupedRows {
    let mut groups: GroupedRows = Vec::new();
    for row in rows {
        let key: Vec<SqlValue> =
            key_indices.iter().map(|&i| row.values[i].clone()).collect();
        // Derived equality treats two NULLs as the same key
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
}
