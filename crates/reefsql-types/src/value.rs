use crate::{DataType, Date};

/// Runtime representation of a stored or computed value, including NULL.
///
/// The derived `PartialEq` treats `Null == Null` as true; grouping relies
/// on that to collect unknown keys into one group. Uniqueness checks and
/// DISTINCT output must use [`SqlValue::strictly_equals`] instead, where
/// unknown is never equal to anything.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Date(Date),
    Boolean(bool),
    Null,
}

impl SqlValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Get the data type of this value, or `None` for NULL.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            SqlValue::Integer(_) => Some(DataType::Integer),
            SqlValue::Real(_) => Some(DataType::Real),
            SqlValue::Text(_) => Some(DataType::Text),
            SqlValue::Date(_) => Some(DataType::Date),
            SqlValue::Boolean(_) => Some(DataType::Boolean),
            SqlValue::Null => None,
        }
    }

    /// SQL equality: NULL is never equal to any value, including another
    /// NULL, and NaN is never equal to NaN.
    pub fn strictly_equals(&self, other: &SqlValue) -> bool {
        match (self, other) {
            (SqlValue::Null, _) | (_, SqlValue::Null) => false,
            // Derived equality already makes NaN != NaN
            (a, b) => a == b,
        }
    }
}
