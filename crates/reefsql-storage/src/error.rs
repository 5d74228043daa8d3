use reefsql_catalog::CatalogError;
use reefsql_types::DataType;

/// Errors returned by table store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    TableNotFound(String),
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
    },
    TypeMismatch {
        table_name: String,
        column_name: String,
        expected: DataType,
        actual: DataType,
    },
    NotNullViolation {
        table_name: String,
        column_name: String,
    },
    UniqueViolation {
        table_name: String,
        columns: Vec<String>,
    },
    PrimaryKeyViolation {
        table_name: String,
        columns: Vec<String>,
    },
    ForeignKeyViolation {
        table_name: String,
        referenced_table: String,
    },
    /// Predicate or assignment evaluation failed inside a mutation closure
    Expression(String),
    Catalog(CatalogError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::TableNotFound(name) => write!(f, "Table '{}' not found", name),
            StorageError::ColumnCountMismatch { expected, actual } => {
                write!(f, "Column count mismatch: expected {}, got {}", expected, actual)
            }
            StorageError::TypeMismatch { table_name, column_name, expected, actual } => {
                write!(
                    f,
                    "Type mismatch for column '{}' of table '{}': expected {}, got {}",
                    column_name, table_name, expected, actual
                )
            }
            StorageError::NotNullViolation { table_name, column_name } => {
                write!(
                    f,
                    "NOT NULL constraint violation: column '{}' in table '{}' cannot be NULL",
                    column_name, table_name
                )
            }
            StorageError::UniqueViolation { table_name, columns } => {
                write!(
                    f,
                    "UNIQUE constraint violated on table '{}': duplicate value for ({})",
                    table_name,
                    columns.join(", ")
                )
            }
            StorageError::PrimaryKeyViolation { table_name, columns } => {
                write!(
                    f,
                    "PRIMARY KEY constraint violated on table '{}': duplicate key value for ({})",
                    table_name,
                    columns.join(", ")
                )
            }
            StorageError::ForeignKeyViolation { table_name, referenced_table } => {
                write!(
                    f,
                    "FOREIGN KEY constraint violated: row in table '{}' has no match in '{}'",
                    table_name, referenced_table
                )
            }
            StorageError::Expression(msg) => write!(f, "Expression error: {}", msg),
            StorageError::Catalog(err) => write!(f, "Catalog error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<CatalogError> for StorageError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TableNotFound(name) => StorageError::TableNotFound(name),
            other => StorageError::Catalog(other),
        }
    }
}
