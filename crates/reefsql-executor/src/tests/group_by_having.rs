use super::{binop, col, insert_sailor, int_lit, sailors_db};
use crate::errors::ExecutorError;
use crate::SelectExecutor;
use reefsql_request::{AggregateFunction, BinaryOperator, Expression, SelectItem, SelectRequest};
use reefsql_types::SqlValue;

fn aggregate(func: AggregateFunction, column: Option<&str>) -> SelectItem {
    SelectItem::Aggregate { func, column: column.map(str::to_string), distinct: false }
}

fn aggregate_expr(func: AggregateFunction, column: &str) -> Expression {
    Expression::Aggregate { func, column: Some(column.to_string()), distinct: false }
}

#[test]
fn test_group_by_with_count() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Null);
    insert_sailor(&db, 2, "b", SqlValue::Integer(7), SqlValue::Null);
    insert_sailor(&db, 3, "c", SqlValue::Integer(8), SqlValue::Null);

    let mut request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("rating".to_string()), aggregate(AggregateFunction::Count, None)],
    );
    request.group_by = vec!["rating".to_string()];
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    assert_eq!(result.columns, vec!["rating".to_string(), "count(*)".to_string()]);
    assert_eq!(result.rows.len(), 2);
    // Groups come out in first-appearance order
    assert_eq!(result.rows[0].values, vec![SqlValue::Integer(7), SqlValue::Integer(2)]);
    assert_eq!(result.rows[1].values, vec![SqlValue::Integer(8), SqlValue::Integer(1)]);
}

#[test]
fn test_null_keys_form_one_group() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Null, SqlValue::Null);
    insert_sailor(&db, 2, "b", SqlValue::Null, SqlValue::Null);
    insert_sailor(&db, 3, "c", SqlValue::Integer(8), SqlValue::Null);

    let mut request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("rating".to_string()), aggregate(AggregateFunction::Count, None)],
    );
    request.group_by = vec!["rating".to_string()];
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].values, vec![SqlValue::Null, SqlValue::Integer(2)]);
}

#[test]
fn test_having_filters_groups_by_aggregate() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(10), SqlValue::Integer(25));
    insert_sailor(&db, 2, "b", SqlValue::Integer(10), SqlValue::Integer(26));
    insert_sailor(&db, 3, "c", SqlValue::Integer(7), SqlValue::Integer(5));

    let mut request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("rating".to_string()), aggregate(AggregateFunction::Avg, Some("age"))],
    );
    request.group_by = vec!["rating".to_string()];
    request.having = Some(binop(
        aggregate_expr(AggregateFunction::Sum, "age"),
        BinaryOperator::GreaterThan,
        int_lit(10),
    ));
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    // The rating=7 group sums to 5 and is dropped
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].values, vec![SqlValue::Integer(10), SqlValue::Real(25.5)]);
}

#[test]
fn test_having_may_reference_group_key() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Null);
    insert_sailor(&db, 2, "b", SqlValue::Integer(8), SqlValue::Null);

    let mut request =
        SelectRequest::new("sailors", vec![SelectItem::Column("rating".to_string())]);
    request.group_by = vec!["rating".to_string()];
    request.having = Some(binop(col("rating"), BinaryOperator::GreaterThan, int_lit(7)));
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].values[0], SqlValue::Integer(8));
}

#[test]
fn test_having_without_group_by_forms_implicit_group() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Integer(5));
    insert_sailor(&db, 2, "b", SqlValue::Integer(8), SqlValue::Integer(6));

    let mut request =
        SelectRequest::new("sailors", vec![aggregate(AggregateFunction::Count, None)]);
    request.having = Some(binop(
        aggregate_expr(AggregateFunction::Sum, "age"),
        BinaryOperator::GreaterThan,
        int_lit(100),
    ));
    let result = SelectExecutor::new(&db).execute(&request).unwrap();
    assert!(result.rows.is_empty());
}

#[test]
fn test_group_by_without_aggregates_projects_keys() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Null);
    insert_sailor(&db, 2, "b", SqlValue::Integer(7), SqlValue::Null);
    insert_sailor(&db, 3, "c", SqlValue::Integer(8), SqlValue::Null);

    let mut request =
        SelectRequest::new("sailors", vec![SelectItem::Column("rating".to_string())]);
    request.group_by = vec!["rating".to_string()];
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    assert_eq!(result.rows.len(), 2);
}

#[test]
fn test_group_by_over_empty_input_yields_no_groups() {
    let db = sailors_db();

    let mut request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("rating".to_string()), aggregate(AggregateFunction::Count, None)],
    );
    request.group_by = vec!["rating".to_string()];
    let result = SelectExecutor::new(&db).execute(&request).unwrap();
    assert!(result.rows.is_empty());
}

#[test]
fn test_ungrouped_column_beside_aggregate_rejected() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Null);

    let request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("sname".to_string()), aggregate(AggregateFunction::Count, None)],
    );
    assert!(matches!(
        SelectExecutor::new(&db).execute(&request).unwrap_err(),
        ExecutorError::InvalidAggregateTarget(_)
    ));
}

#[test]
fn test_projected_column_outside_group_by_rejected() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Null);

    let mut request = SelectRequest::new(
        "sailors",
        vec![SelectItem::Column("sname".to_string()), aggregate(AggregateFunction::Count, None)],
    );
    request.group_by = vec!["rating".to_string()];
    assert!(matches!(
        SelectExecutor::new(&db).execute(&request).unwrap_err(),
        ExecutorError::InvalidAggregateTarget(_)
    ));
}

#[test]
fn test_multi_column_group_keys() {
    let db = sailors_db();
    insert_sailor(&db, 1, "a", SqlValue::Integer(7), SqlValue::Integer(10));
    insert_sailor(&db, 2, "a", SqlValue::Integer(7), SqlValue::Integer(20));
    insert_sailor(&db, 3, "a", SqlValue::Integer(8), SqlValue::Integer(30));

    let mut request = SelectRequest::new(
        "sailors",
        vec![
            SelectItem::Column("sname".to_string()),
            SelectItem::Column("rating".to_string()),
            aggregate(AggregateFunction::Sum, Some("age")),
        ],
    );
    request.group_by = vec!["sname".to_string(), "rating".to_string()];
    let result = SelectExecutor::new(&db).execute(&request).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(
        result.rows[0].values,
        vec![SqlValue::Text("a".to_string()), SqlValue::Integer(7), SqlValue::Integer(30)]
    );
}
