//! In-memory row cursor
//!
//! Useful when results are already materialized (or for building fixtures). Rows are
//! handed out in insertion order and each one is consumed by `advance`, so the cursor
//! supports exactly one pass like any driver result set.

use std::collections::VecDeque;

use thiserror::Error;

use super::traits::RowCursor;
use crate::types::Value;

/// Errors raised by [`MemoryCursor::scan`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MemoryCursorError {
    /// `scan` was called before `advance` or after the rows ran out
    #[error("scan called without a current row")]
    NoCurrentRow,

    /// The stored row and the scan buffer have different widths
    #[error("row has {actual} values but {expected} were requested")]
    WidthMismatch {
        /// Length of the scan buffer
        expected: usize,
        /// Length of the stored row
        actual: usize,
    },
}

/// A [`RowCursor`] over owned rows
///
/// # Examples
///
/// ```
/// use sqlcsv::{MemoryCursor, Value};
///
/// let cursor = MemoryCursor::new(
///     vec!["name", "age"],
///     vec![vec![Value::from("Alice"), Value::from(1i64)]],
/// );
/// assert_eq!(sqlcsv::write_string(cursor).unwrap(), "name,age\nAlice,1\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl MemoryCursor {
    /// Create a cursor with the given column names and rows
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into(),
            current: None,
        }
    }

    /// Append a row after construction
    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push_back(row);
    }

    /// Number of rows not yet advanced past
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowCursor for MemoryCursor {
    type Error = MemoryCursorError;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    fn scan(&mut self, out: &mut [Value]) -> Result<(), Self::Error> {
        let row = self
            .current
            .as_mut()
            .ok_or(MemoryCursorError::NoCurrentRow)?;

        if row.len() != out.len() {
            return Err(MemoryCursorError::WidthMismatch {
                expected: out.len(),
                actual: row.len(),
            });
        }

        // Each row is scanned once, so move values out instead of cloning
        for (slot, value) in out.iter_mut().zip(row.iter_mut()) {
            *slot = std::mem::take(value);
        }
        Ok(())
    }

    fn err(&self) -> Option<&Self::Error> {
        None
    }
}
