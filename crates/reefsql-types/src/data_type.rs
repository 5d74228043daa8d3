/// Column data types.
///
/// A closed set: every column declares exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Real,
    Text,
    Date,
    Boolean,
}

impl DataType {
    /// Check whether a value of type `other` may be stored in a column of
    /// this type. NULL carries no type and is accepted by any column; the
    /// nullable flag is enforced separately by constraint validation.
    pub fn accepts(&self, other: Option<DataType>) -> bool {
        match other {
            None => true,
            Some(t) => *self == t,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Integer => write!(f, "INTEGER"),
            DataType::Real => write!(f, "REAL"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Date => write!(f, "DATE"),
            DataType::Boolean => write!(f, "BOOLEAN"),
        }
    }
}
