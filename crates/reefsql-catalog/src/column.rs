use reefsql_request::ColumnDefault;

/// Column definition in a table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: reefsql_types::DataType,
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, data_type: reefsql_types::DataType, nullable: bool) -> Self {
        ColumnSchema { name: name.into(), data_type, nullable, default: None }
    }

    /// Set the default generator
    pub fn with_default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }
}

impl From<reefsql_request::ColumnDef> for ColumnSchema {
    fn from(def: reefsql_request::ColumnDef) -> Self {
        ColumnSchema {
            name: def.name,
            data_type: def.data_type,
            nullable: def.nullable,
            default: def.default,
        }
    }
}
