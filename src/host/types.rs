//! Logical types and constant values as the host engine reports them.

use std::fmt;

/// Declared type of an argument expression or column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Null,
    Boolean,
    Integer,
    Double,
    Varchar,
    Json,
    List(Box<LogicalType>),
    /// Type of a placeholder that has not been resolved yet.
    Unknown,
    /// Accepts any type; used for varargs.
    Any,
}

impl LogicalType {
    pub fn list_of(child: LogicalType) -> Self {
        Self::List(Box::new(child))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Integer => f.write_str("INTEGER"),
            Self::Double => f.write_str("DOUBLE"),
            Self::Varchar => f.write_str("VARCHAR"),
            Self::Json => f.write_str("JSON"),
            Self::List(child) => write!(f, "{child}[]"),
            Self::Unknown => f.write_str("UNKNOWN"),
            Self::Any => f.write_str("ANY"),
        }
    }
}

/// A fully evaluated constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Varchar(String),
    List {
        child_type: LogicalType,
        items: Vec<Value>,
    },
}

impl Value {
    pub fn varchar(s: impl Into<String>) -> Self {
        Self::Varchar(s.into())
    }

    /// A list whose element type is taken from its first non-null item.
    pub fn list(items: Vec<Value>) -> Self {
        let child_type = items
            .iter()
            .map(Value::logical_type)
            .find(|t| *t != LogicalType::Null)
            .unwrap_or(LogicalType::Null);
        Self::List { child_type, items }
    }

    pub fn logical_type(&self) -> LogicalType {
        match self {
            Self::Null => LogicalType::Null,
            Self::Boolean(_) => LogicalType::Boolean,
            Self::Integer(_) => LogicalType::Integer,
            Self::Double(_) => LogicalType::Double,
            Self::Varchar(_) => LogicalType::Varchar,
            Self::List { child_type, .. } => LogicalType::list_of(child_type.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Varchar(s) => f.write_str(s),
            Self::List { items, .. } => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
