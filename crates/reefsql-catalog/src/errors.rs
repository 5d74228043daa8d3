/// Errors returned by catalog and sequence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    TableAlreadyExists(String),
    TableNotFound(String),
    ColumnAlreadyExists {
        table_name: String,
        column_name: String,
    },
    ColumnNotFound {
        table_name: String,
        column_name: String,
    },
    UnknownReferencedTable {
        table_name: String,
        referenced_table: String,
    },
    UnknownReferencedColumn {
        referenced_table: String,
        column_name: String,
    },
    SequenceAlreadyExists(String),
    SequenceNotFound(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::TableAlreadyExists(name) => {
                write!(f, "Table '{}' already exists", name)
            }
            CatalogError::TableNotFound(name) => write!(f, "Table '{}' not found", name),
            CatalogError::ColumnAlreadyExists { table_name, column_name } => {
                write!(f, "Column '{}' already exists in table '{}'", column_name, table_name)
            }
            CatalogError::ColumnNotFound { table_name, column_name } => {
                write!(f, "Column '{}' not found in table '{}'", column_name, table_name)
            }
            CatalogError::UnknownReferencedTable { table_name, referenced_table } => {
                write!(
                    f,
                    "Foreign key on table '{}' references unknown table '{}'",
                    table_name, referenced_table
                )
            }
            CatalogError::UnknownReferencedColumn { referenced_table, column_name } => {
                write!(
                    f,
                    "Foreign key references unknown column '{}' of table '{}'",
                    column_name, referenced_table
                )
            }
            CatalogError::SequenceAlreadyExists(name) => {
                write!(f, "Sequence '{}' already exists", name)
            }
            CatalogError::SequenceNotFound(name) => write!(f, "Sequence '{}' not found", name),
        }
    }
}

impl std::error::Error for CatalogError {}
