//! Columnar batch representation.

use super::argument::{ArgumentExpr, CallArgument};
use super::types::Value;
use crate::error::ExecutionError;

/// One column of nullable strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringVector {
    values: Vec<Option<String>>,
}

impl StringVector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.values.get(row).and_then(|v| v.as_deref())
    }

    pub fn push(&mut self, value: Option<String>) {
        self.values.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.values.iter().map(|v| v.as_deref())
    }

    /// The same constant in every row.
    pub fn repeat(value: Value, rows: usize) -> Self {
        let value = match value {
            Value::Null => None,
            other => Some(other.to_string()),
        };
        Self {
            values: vec![value; rows],
        }
    }

    pub fn into_inner(self) -> Vec<Option<String>> {
        self.values
    }
}

impl From<Vec<Option<String>>> for StringVector {
    fn from(values: Vec<Option<String>>) -> Self {
        Self { values }
    }
}

impl<'a> FromIterator<Option<&'a str>> for StringVector {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|v| v.map(str::to_string)).collect(),
        }
    }
}

/// A batch of rows: equal-length columns, one per call-site argument.
#[derive(Debug, Clone, Default)]
pub struct DataChunk {
    columns: Vec<StringVector>,
    size: usize,
}

impl DataChunk {
    pub fn new(columns: Vec<StringVector>) -> Result<Self, ExecutionError> {
        let size = columns.first().map_or(0, StringVector::len);
        if let Some((index, column)) = columns.iter().enumerate().find(|(_, c)| c.len() != size) {
            return Err(ExecutionError::RaggedChunk {
                column: index,
                expected: size,
                actual: column.len(),
            });
        }
        Ok(Self { columns, size })
    }

    /// Materialize one column per call-site argument.
    ///
    /// Column references are looked up through `columns`; constants are repeated for
    /// every row (a `NULL` constant becomes an absent value).
    pub fn from_call_site<'a>(
        arguments: &[CallArgument],
        rows: usize,
        columns: impl Fn(&str) -> Option<&'a StringVector>,
    ) -> Result<Self, ExecutionError> {
        let mut materialized = Vec::with_capacity(arguments.len());
        for (position, argument) in arguments.iter().enumerate() {
            let column = match &argument.expr {
                ArgumentExpr::Column(name) => columns(name)
                    .cloned()
                    .ok_or_else(|| ExecutionError::UnknownColumn(name.clone()))?,
                expr => {
                    let value = expr
                        .fold()
                        .ok_or(ExecutionError::UnresolvedArgument { position })?;
                    StringVector::repeat(value, rows)
                }
            };
            materialized.push(column);
        }
        Self::new(materialized)
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&StringVector> {
        self.columns.get(index)
    }

    /// Whether every column has a value at `row`.
    pub fn row_is_complete(&self, row: usize) -> bool {
        self.columns.iter().all(|column| column.get(row).is_some())
    }

    /// A chunk holding only `rows`, in the given order.
    pub fn select(&self, rows: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| rows.iter().map(|&row| column.get(row)).collect())
            .collect();
        Self {
            columns,
            size: rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_size_from_columns() {
        let chunk = DataChunk::new(vec![
            [Some("a"), None].into_iter().collect(),
            [Some("{}"), Some("{}")].into_iter().collect(),
        ])
        .unwrap();
        assert_eq!(chunk.size(), 2);
        assert_eq!(chunk.column_count(), 2);
        assert_eq!(chunk.column(0).unwrap().get(1), None);
    }

    #[test]
    fn test_from_call_site_broadcasts_constants() {
        let templates: StringVector = [Some("{{ a }}"), Some("{{ b }}")].into_iter().collect();
        let arguments = vec![
            CallArgument::column("tpl", crate::host::LogicalType::Varchar),
            CallArgument::constant(Value::Boolean(false)).named("autoescape"),
            CallArgument::constant(Value::Null),
        ];
        let chunk = DataChunk::from_call_site(&arguments, 2, |name| {
            (name == "tpl").then_some(&templates)
        })
        .unwrap();

        assert_eq!(chunk.column_count(), 3);
        assert_eq!(chunk.column(0).unwrap().get(1), Some("{{ b }}"));
        assert_eq!(chunk.column(1).unwrap().get(0), Some("false"));
        assert_eq!(chunk.column(2).unwrap().get(0), None);
    }

    #[test]
    fn test_from_call_site_unknown_column() {
        let arguments = vec![CallArgument::column("nope", crate::host::LogicalType::Varchar)];
        let err = DataChunk::from_call_site(&arguments, 1, |_| None).unwrap_err();
        assert!(matches!(err, ExecutionError::UnknownColumn(name) if name == "nope"));
    }

    #[test]
    fn test_select_complete_rows() {
        let chunk = DataChunk::new(vec![
            [Some("a"), None, Some("c")].into_iter().collect(),
            [Some("1"), Some("2"), Some("3")].into_iter().collect(),
        ])
        .unwrap();
        let complete: Vec<usize> = (0..chunk.size()).filter(|&r| chunk.row_is_complete(r)).collect();
        assert_eq!(complete, vec![0, 2]);

        let selected = chunk.select(&complete);
        assert_eq!(selected.size(), 2);
        assert_eq!(selected.column(0).unwrap().get(1), Some("c"));
        assert_eq!(selected.column(1).unwrap().get(1), Some("3"));
    }

    #[test]
    fn test_ragged_chunk_rejected() {
        let err = DataChunk::new(vec![
            [Some("a"), Some("b")].into_iter().collect(),
            [Some("{}")].into_iter().collect(),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ExecutionError::RaggedChunk {
                column: 1,
                expected: 2,
                actual: 1
            }
        ));
    }
}
