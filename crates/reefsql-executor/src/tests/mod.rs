//! Test modules for the executor crate
//!
//! Tests are organized by feature area:
//! - `expression_eval`: expression evaluator tests (literals, columns, operators, three-valued logic)
//! - `select_filtering`: projection, WHERE filtering, and DISTINCT output
//! - `aggregates`: COUNT, SUM, AVG, MIN, MAX with NULL handling and DISTINCT arguments
//! - `group_by_having`: GROUP BY partitioning and HAVING filtering
//! - `dml`: INSERT, UPDATE, DELETE executors and their failure modes
//! - `ddl`: CREATE/DROP TABLE, ADD COLUMN, CREATE SEQUENCE
//! - `dispatch`: request round-trips through the top-level entry point

mod ddl;
mod group_by_having;

use reefsql_request::{BinaryOperator, ColumnDef, CreateTableRequest, Expression, InsertValue};
use reefsql_storage::Database;
use reefsql_types::{DataType, SqlValue};

use crate::CreateTableExecutor;

/// A sailors table with a primary key on sid and a nullable rating and age.
pub(crate) fn sailors_db() -> Database {
    let db = Database::new();
    let request = CreateTableRequest {
        table_name: "sailors".to_string(),
        columns: vec![
            ColumnDef::new("sid", DataType::Integer, false),
            ColumnDef::new("sname", DataType::Text, true),
            ColumnDef::new("rating", DataType::Integer, true),
            ColumnDef::new("age", DataType::Integer, true),
        ],
        primary_key: vec!["sid".to_string()],
        unique: Vec::new(),
        foreign_keys: Vec::new(),
    };
    CreateTableExecutor::execute(&db, &request).unwrap();
    db
}

pub(crate) fn insert_row(db: &Database, table: &str, values: Vec<SqlValue>) {
    db.insert(table, values.into_iter().map(InsertValue::Value).collect()).unwrap();
}

pub(crate) fn insert_sailor(db: &Database, sid: i64, sname: &str, rating: SqlValue, age: SqlValue) {
    insert_row(
        db,
        "sailors",
        vec![SqlValue::Integer(sid), SqlValue::Text(sname.to_string()), rating, age],
    );
}

// Expression construction shorthand

pub(crate) fn col(name: &str) -> Expression {
    Expression::Column(name.to_string())
}

pub(crate) fn int_lit(n: i64) -> Expression {
    Expression::Literal(SqlValue::Integer(n))
}

pub(crate) fn text_lit(s: &str) -> Expression {
    Expression::Literal(SqlValue::Text(s.to_string()))
}

pub(crate) fn binop(left: Expression, op: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOp { op, left: Box::new(left), right: Box::new(right) }
}
