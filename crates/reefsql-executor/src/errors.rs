use reefsql_catalog::CatalogError;
use reefsql_storage::StorageError;
use reefsql_types::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutorError {
    ColumnNotFound(String),
    TypeMismatch { left: SqlValue, op: String, right: SqlValue },
    DivisionByZero,
    InvalidPredicate(String),
    InvalidAggregateTarget(String),
    UnsupportedExpression(String),
    Catalog(CatalogError),
    Storage(StorageError),
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutorError::ColumnNotFound(name) => write!(f, "Column '{}' not found", name),
            ExecutorError::TypeMismatch { left, op, right } => {
                write!(f, "Type mismatch: {:?} {} {:?}", left, op, right)
            }
            ExecutorError::DivisionByZero => write!(f, "Division by zero"),
            ExecutorError::InvalidPredicate(msg) => write!(f, "Invalid predicate: {}", msg),
            ExecutorError::InvalidAggregateTarget(msg) => {
                write!(f, "Invalid aggregate target: {}", msg)
            }
            ExecutorError::UnsupportedExpression(msg) => {
                write!(f, "Unsupported expression: {}", msg)
            }
            ExecutorError::Catalog(err) => write!(f, "{}", err),
            ExecutorError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExecutorError {}

impl From<CatalogError> for ExecutorError {
    fn from(err: CatalogError) -> Self {
        ExecutorError::Catalog(err)
    }
}

impl From<StorageError> for ExecutorError {
    fn from(err: StorageError) -> Self {
        // Predicate evaluation failures cross the storage boundary as
        // strings; unwrap them back into executor terms.
        match err {
            StorageError::Expression(msg) => ExecutorError::InvalidPredicate(msg),
            other => ExecutorError::Storage(other),
        }
    }
}
