use crate::errors::ExecutorError;
use crate::{AddColumnExecutor, CreateSequenceExecutor, CreateTableExecutor, DropTableExecutor};
use reefsql_catalog::CatalogError;
use reefsql_request::{
    AddColumnRequest, ColumnDef, ColumnDefault, CreateSequenceRequest, CreateTableRequest,
    DropTableRequest, ForeignKeyDef,
};
use reefsql_storage::Database;
use reefsql_types::{DataType, SqlValue};

fn sailors_request() -> CreateTableRequest {
    CreateTableRequest {
        table_name: "sailors".to_string(),
        columns: vec![
            ColumnDef::new("sid", DataType::Integer, false),
            ColumnDef::new("sname", DataType::Text, true),
        ],
        primary_key: vec!["sid".to_string()],
        unique: Vec::new(),
        foreign_keys: Vec::new(),
    }
}

#[test]
fn test_create_table_registers_schema() {
    let db = Database::new();
    CreateTableExecutor::execute(&db, &sailors_request()).unwrap();

    let schema = db.get_schema("sailors").unwrap();
    assert_eq!(schema.column_count(), 2);
    assert_eq!(schema.primary_key, Some(vec!["sid".to_string()]));
    // Primary key columns are implicitly not-null
    assert!(!schema.get_column("sid").unwrap().nullable);
    assert_eq!(db.snapshot("sailors").unwrap().rows.len(), 0);
}

#[test]
fn test_create_table_duplicate_name() {
    let db = Database::new();
    CreateTableExecutor::execute(&db, &sailors_request()).unwrap();
    assert!(matches!(
        CreateTableExecutor::execute(&db, &sailors_request()).unwrap_err(),
        ExecutorError::Storage(reefsql_storage::StorageError::Catalog(
            CatalogError::TableAlreadyExists(_)
        ))
    ));
}

#[test]
fn test_create_table_foreign_key_target_checked_eagerly() {
    let db = Database::new();
    let request = CreateTableRequest {
        table_name: "reserves".to_string(),
        columns: vec![ColumnDef::new("sid", DataType::Integer, true)],
        primary_key: Vec::new(),
        unique: Vec::new(),
        foreign_keys: vec![ForeignKeyDef {
            columns: vec!["sid".to_string()],
            referenced_table: "sailors".to_string(),
            referenced_columns: vec!["sid".to_string()],
        }],
    };
    assert!(matches!(
        CreateTableExecutor::execute(&db, &request).unwrap_err(),
        ExecutorError::Storage(reefsql_storage::StorageError::Catalog(
            CatalogError::UnknownReferencedTable { .. }
        ))
    ));
    // The failed create left nothing behind
    assert!(db.get_schema("reserves").is_err());
}

#[test]
fn test_drop_table() {
    let db = Database::new();
    CreateTableExecutor::execute(&db, &sailors_request()).unwrap();
    DropTableExecutor::execute(&db, &DropTableRequest { table_name: "sailors".to_string() })
        .unwrap();
    assert!(db.get_schema("sailors").is_err());

    assert!(matches!(
        DropTableExecutor::execute(&db, &DropTableRequest { table_name: "sailors".to_string() })
            .unwrap_err(),
        ExecutorError::Storage(reefsql_storage::StorageError::TableNotFound(_))
    ));
}

#[test]
fn test_add_column_with_default() {
    let db = Database::new();
    CreateTableExecutor::execute(&db, &sailors_request()).unwrap();
    db.insert(
        "sailors",
        vec![
            reefsql_request::InsertValue::Value(SqlValue::Integer(1)),
            reefsql_request::InsertValue::Value(SqlValue::Text("dustin".to_string())),
        ],
    )
    .unwrap();

    let request = AddColumnRequest {
        table_name: "sailors".to_string(),
        column: ColumnDef::new("rating", DataType::Integer, true)
            .with_default(ColumnDefault::Literal(SqlValue::Integer(1))),
    };
    AddColumnExecutor::execute(&db, &request).unwrap();

    let snapshot = db.snapshot("sailors").unwrap();
    assert_eq!(snapshot.schema.column_count(), 3);
    assert_eq!(snapshot.rows[0].values[2], SqlValue::Integer(1));
}

#[test]
fn test_add_column_duplicate_name() {
    let db = Database::new();
    CreateTableExecutor::execute(&db, &sailors_request()).unwrap();

    let request = AddColumnRequest {
        table_name: "sailors".to_string(),
        column: ColumnDef::new("sname", DataType::Text, true),
    };
    assert!(matches!(
        AddColumnExecutor::execute(&db, &request).unwrap_err(),
        ExecutorError::Storage(reefsql_storage::StorageError::Catalog(
            CatalogError::ColumnAlreadyExists { .. }
        ))
    ));
}

#[test]
fn test_create_sequence_and_duplicate() {
    let db = Database::new();
    let request = CreateSequenceRequest { sequence_name: "sid_seq".to_string() };
    CreateSequenceExecutor::execute(&db, &request).unwrap();

    assert_eq!(db.sequences().next("sid_seq").unwrap(), 1);
    assert_eq!(db.sequences().next("sid_seq").unwrap(), 2);

    assert!(matches!(
        CreateSequenceExecutor::execute(&db, &request).unwrap_err(),
        ExecutorError::Storage(reefsql_storage::StorageError::Catalog(
            CatalogError::SequenceAlreadyExists(_)
        ))
    ));
}
