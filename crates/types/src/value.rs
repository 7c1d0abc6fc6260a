use crate::data_type::DataType;
use std::cmp::Ordering;
use std::fmt;

/// SQL Values - runtime representation of data
///
/// Represents actual values in SQL, including NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Bigint(i64),
    Double(f64),
    Varchar(String),
    Boolean(bool),
    Null,
}

impl SqlValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Get the data type of this value
    pub fn get_type(&self) -> DataType {
        match self {
            SqlValue::Integer(_) => DataType::Integer,
            SqlValue::Bigint(_) => DataType::Bigint,
            SqlValue::Double(_) => DataType::Double,
            SqlValue::Varchar(_) => DataType::Varchar { max_length: None },
            SqlValue::Boolean(_) => DataType::Boolean,
            SqlValue::Null => DataType::Null,
        }
    }

    /// Compare two values, yielding an ordering when they are comparable.
    ///
    /// NULL compares with nothing (not even another NULL), and values of
    /// unrelated types do not compare; both cases yield `None`, so a
    /// predicate built on this comparison never panics on mixed input.
    /// Exact and approximate numerics cross-compare as f64.
    pub fn compare(&self, other: &SqlValue) -> Option<Ordering> {
        use SqlValue::*;

        match (self, other) {
            (Null, _) | (_, Null) => None,
            (Integer(a) | Bigint(a), Integer(b) | Bigint(b)) => Some(a.cmp(b)),
            (Double(a), Double(b)) => a.partial_cmp(b),
            (Integer(a) | Bigint(a), Double(b)) => (*a as f64).partial_cmp(b),
            (Double(a), Integer(b) | Bigint(b)) => a.partial_cmp(&(*b as f64)),
            (Varchar(a), Varchar(b)) => Some(a.cmp(b)),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Display implementation for SqlValue (how values are shown to users)
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Bigint(i) => write!(f, "{}", i),
            SqlValue::Double(n) => write!(f, "{}", n),
            SqlValue::Varchar(s) => write!(f, "{}", s),
            SqlValue::Boolean(true) => write!(f, "TRUE"),
            SqlValue::Boolean(false) => write!(f, "FALSE"),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}
