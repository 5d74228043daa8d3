/// Foreign key constraint definition.
///
/// Local columns reference columns of another (possibly the same) table.
/// A row whose local tuple contains NULL always satisfies the constraint;
/// otherwise the tuple must match some row of the referenced table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

impl From<reefsql_request::ForeignKeyDef> for ForeignKey {
    fn from(def: reefsql_request::ForeignKeyDef) -> Self {
        ForeignKey {
            columns: def.columns,
            referenced_table: def.referenced_table,
            referenced_columns: def.referenced_columns,
        }
    }
}
