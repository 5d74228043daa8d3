//! Unified constraint validation
//!
//! Insert and update go through the same routine: type conformance,
//! not-null, primary-key and unique tuples, then foreign keys. A violation
//! aborts the enclosing mutation with no partial effect.

use std::collections::HashMap;

use reefsql_catalog::{CatalogError, TableSchema};
use reefsql_types::SqlValue;

use crate::{Row, StorageError, TableSnapshot};

/// Validate a candidate row against every constraint of its schema.
///
/// `rows` is the row set uniqueness is checked against; `skip` excludes one
/// index from that check (the row an update is replacing). `referenced`
/// holds snapshots of foreign-key target tables taken under a momentary
/// shared read; a self-referencing foreign key resolves against `rows`
/// plus the candidate itself, since the caller already holds that table's
/// write lock.
pub fn validate_row(
    schema: &TableSchema,
    rows: &[Row],
    skip: Option<usize>,
    candidate: &Row,
    referenced: &HashMap<String, TableSnapshot>,
) -> Result<(), StorageError> {
    // Type conformance and NOT NULL, column by column
    for (idx, column) in schema.columns.iter().enumerate() {
        let value = candidate.get(idx).ok_or(StorageError::ColumnCountMismatch {
            expected: schema.column_count(),
            actual: candidate.len(),
        })?;
        if value.is_null() {
            if !column.nullable {
                return Err(StorageError::NotNullViolation {
                    table_name: schema.name.clone(),
                    column_name: column.name.clone(),
                });
            }
        } else if !column.data_type.accepts(value.data_type()) {
            return Err(StorageError::TypeMismatch {
                table_name: schema.name.clone(),
                column_name: column.name.clone(),
                expected: column.data_type,
                actual: value.data_type().unwrap_or(column.data_type),
            });
        }
    }

    // Primary key, then each unique subset
    if let Some(pk) = &schema.primary_key {
        if has_duplicate_tuple(schema, pk, rows, skip, candidate)? {
            return Err(StorageError::PrimaryKeyViolation {
                table_name: schema.name.clone(),
                columns: pk.clone(),
            });
        }
    }
    for unique in &schema.unique_constraints {
        if has_duplicate_tuple(schema, unique, rows, skip, candidate)? {
            return Err(StorageError::UniqueViolation {
                table_name: schema.name.clone(),
                columns: unique.clone(),
            });
        }
    }

    // Foreign keys
    for fk in &schema.foreign_keys {
        let local = resolve(schema, &fk.columns)?;
        let tuple: Vec<&SqlValue> =
            local.iter().filter_map(|&idx| candidate.get(idx)).collect();
        // A tuple containing unknown always satisfies the constraint
        if tuple.iter().any(|v| v.is_null()) {
            continue;
        }

        let matched = if fk.referenced_table == schema.name {
            let indices = resolve(schema, &fk.referenced_columns)?;
            rows.iter()
                .chain(std::iter::once(candidate))
                .any(|row| tuple_matches(row, &indices, &tuple))
        } else {
            let target = referenced.get(&fk.referenced_table).ok_or_else(|| {
                StorageError::TableNotFound(fk.referenced_table.clone())
            })?;
            let indices = resolve(&target.schema, &fk.referenced_columns)?;
            target.rows.iter().any(|row| tuple_matches(row, &indices, &tuple))
        };

        if !matched {
            return Err(StorageError::ForeignKeyViolation {
                table_name: schema.name.clone(),
                referenced_table: fk.referenced_table.clone(),
            });
        }
    }

    Ok(())
}

/// Check whether some row other than `skip` holds a strictly-equal tuple
/// on the given columns. Tuples containing unknown never collide.
fn has_duplicate_tuple(
    schema: &TableSchema,
    columns: &[String],
    rows: &[Row],
    skip: Option<usize>,
    candidate: &Row,
) -> Result<bool, StorageError> {
    let indices = resolve(schema, columns)?;
    let tuple: Vec<&SqlValue> =
        indices.iter().filter_map(|&idx| candidate.get(idx)).collect();
    if tuple.iter().any(|v| v.is_null()) {
        return Ok(false);
    }
    Ok(rows
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != skip)
        .any(|(_, row)| tuple_matches(row, &indices, &tuple)))
}

fn tuple_matches(row: &Row, indices: &[usize], tuple: &[&SqlValue]) -> bool {
    indices.len() == tuple.len()
        && indices
            .iter()
            .zip(tuple.iter())
            .all(|(&idx, value)| row.get(idx).is_some_and(|v| v.strictly_equals(value)))
}

fn resolve(schema: &TableSchema, columns: &[String]) -> Result<Vec<usize>, StorageError> {
    schema.resolve_columns(columns).ok_or_else(|| {
        let missing = columns
            .iter()
            .find(|name| schema.get_column_index(name).is_none())
            .cloned()
            .unwrap_or_default();
        StorageError::Catalog(CatalogError::ColumnNotFound {
            table_name: schema.name.clone(),
            column_name: missing,
        })
    })
}
