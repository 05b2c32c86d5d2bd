//! Row-wise execution helpers with null propagation.
//!
//! The callback only sees rows where every input is present. A row with any absent
//! input produces an absent output and no callback call. The first callback error
//! aborts the whole batch.

use super::vector::StringVector;

/// Applies a one-argument callback across a column.
#[derive(Debug)]
pub struct UnaryExecutor;

impl UnaryExecutor {
    pub fn execute<E, F>(input: &StringVector, mut f: F) -> Result<StringVector, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        let mut result = StringVector::with_capacity(input.len());
        for value in input.iter() {
            result.push(value.map(&mut f).transpose()?);
        }
        Ok(result)
    }
}

/// Applies a two-argument callback across a pair of columns, row by row.
#[derive(Debug)]
pub struct BinaryExecutor;

impl BinaryExecutor {
    pub fn execute<E, F>(left: &StringVector, right: &StringVector, mut f: F) -> Result<StringVector, E>
    where
        F: FnMut(&str, &str) -> Result<String, E>,
    {
        debug_assert_eq!(left.len(), right.len());
        let mut result = StringVector::with_capacity(left.len());
        for (l, r) in left.iter().zip(right.iter()) {
            let value = match (l, r) {
                (Some(l), Some(r)) => Some(f(l, r)?),
                _ => None,
            };
            result.push(value);
        }
        Ok(result)
    }
}
