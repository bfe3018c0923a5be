//! One-shot conversion with default settings
//!
//! Each function is equivalent to building a [`Converter`] around the cursor and
//! calling the matching write method. Use the converter directly to change headers,
//! delimiter, time format, or to install a row pre-processor.

use crate::core::{Converter, RowCursor};
use crate::types::CsvError;
use std::io::Write;
use std::path::Path;

/// Write the cursor's rows as CSV (with headers) into `sink`
pub fn write<W: Write, C: RowCursor>(sink: W, cursor: C) -> Result<(), CsvError> {
    Converter::new(cursor).write_to(sink)
}

/// Write the cursor's rows as CSV (with headers) to a new or truncated file
pub fn write_file<C: RowCursor>(path: impl AsRef<Path>, cursor: C) -> Result<(), CsvError> {
    Converter::new(cursor).write_to_file(path)
}

/// Return the cursor's rows as a CSV string (with headers)
///
/// The whole output is held in memory; prefer [`write`] for large results.
pub fn write_string<C: RowCursor>(cursor: C) -> Result<String, CsvError> {
    Converter::new(cursor).write_to_string()
}
