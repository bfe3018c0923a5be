//! Row-to-CSV conversion
//!
//! The [`Converter`] pulls rows from a [`RowCursor`] one at a time, normalizes each
//! cell to text, optionally hands the row to a user pre-processor, and streams the
//! result through a CSV encoder.
//!
//! # Design
//!
//! Conversion is synchronous and single-pass:
//! - Column names are discovered once, before any output
//! - One scan buffer is reused for the whole cursor
//! - The encoder is flushed before returning, so everything reaches the sink
//!
//! Configuration problems (bad delimiter, bad time format, header override of the
//! wrong width) are reported before the first byte is written. Failures after that
//! point leave partial output in the sink.
//!
//! # Examples
//!
//! ```
//! use sqlcsv::{Converter, MemoryCursor, Value};
//!
//! let cursor = MemoryCursor::new(
//!     vec!["name", "nickname", "age"],
//!     vec![vec![Value::from("Alice"), Value::Null, Value::from(1i64)]],
//! );
//!
//! let csv = Converter::new(cursor).delimiter('|').write_to_string().unwrap();
//! assert_eq!(csv, "name|nickname|age\nAlice||1\n");
//! ```

use crate::core::options::ConverterOptions;
use crate::core::traits::RowCursor;
use crate::io::csv_format::build_writer;
use crate::types::{CsvError, TimeFormat, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Row hook: receives the normalized row and the cursor's column names, returns
/// whether to keep the row and the row to write
pub type RowPreProcessor = Box<dyn FnMut(Vec<String>, &[String]) -> (bool, Vec<String>)>;

/// Converts the rows of one cursor into CSV
///
/// Settings are public fields and can also be set with the builder-style methods.
/// Defaults: headers are written, taken from the cursor's column names, separated by
/// commas, and timestamps use the default rendering.
pub struct Converter<C: RowCursor> {
    cursor: C,

    /// Header row override; empty means use the cursor's column names
    pub headers: Vec<String>,

    /// Whether to emit a header row at all
    pub write_headers: bool,

    /// Field separator; `None` or `'\0'` means comma
    pub delimiter: Option<char>,

    /// chrono strftime pattern applied to timestamp cells; `None` or `""` means the
    /// default rendering
    pub time_format: Option<String>,

    row_pre_processor: Option<RowPreProcessor>,
}

impl<C: RowCursor> Converter<C> {
    /// Create a converter with default settings. No I/O happens here.
    pub fn new(cursor: C) -> Self {
        Self::with_options(cursor, ConverterOptions::default())
    }

    /// Create a converter from a configuration record
    pub fn with_options(cursor: C, options: ConverterOptions) -> Self {
        Self {
            cursor,
            headers: options.headers,
            write_headers: options.write_headers,
            delimiter: options.delimiter,
            time_format: options.time_format,
            row_pre_processor: None,
        }
    }

    /// Set the header row override
    pub fn headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the header row
    pub fn write_headers(mut self, write_headers: bool) -> Self {
        self.write_headers = write_headers;
        self
    }

    /// Set the field separator
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the strftime pattern for timestamp cells
    pub fn time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = Some(time_format.into());
        self
    }

    /// Builder form of [`set_row_pre_processor`](Self::set_row_pre_processor)
    pub fn row_pre_processor<F>(mut self, processor: F) -> Self
    where
        F: FnMut(Vec<String>, &[String]) -> (bool, Vec<String>) + 'static,
    {
        self.set_row_pre_processor(processor);
        self
    }

    /// Install a hook that can rewrite or drop each normalized row
    ///
    /// Returning `false` omits the row. The returned row is written exactly as given,
    /// even if its width differs from the column count.
    pub fn set_row_pre_processor<F>(&mut self, processor: F)
    where
        F: FnMut(Vec<String>, &[String]) -> (bool, Vec<String>) + 'static,
    {
        self.row_pre_processor = Some(Box::new(processor));
    }

    /// Give the cursor back, e.g. to close it explicitly
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Stream the cursor's rows as CSV into `sink`
    ///
    /// The sink is flushed through the encoder but never closed.
    ///
    /// # Errors
    ///
    /// - `InvalidDelimiter`, `InvalidTimeFormat`, `HeaderMismatch`, `ColumnDiscovery`:
    ///   nothing was written
    /// - `Scan`, `Encode`: output stops mid-stream
    /// - `Cursor`: every row was written but the cursor stopped on an error, so the
    ///   output may be truncated
    pub fn write_to<W: Write>(&mut self, sink: W) -> Result<(), CsvError> {
        let time_format = self
            .time_format
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(TimeFormat::parse)
            .transpose()?;
        let mut writer = build_writer(sink, self.delimiter)?;

        let columns = self.cursor.columns().map_err(CsvError::column_discovery)?;
        debug!("Discovered {} columns: {:?}", columns.len(), columns);

        if self.write_headers {
            let header_row = if self.headers.is_empty() {
                &columns
            } else if self.headers.len() != columns.len() {
                return Err(CsvError::HeaderMismatch {
                    expected: columns.len(),
                    actual: self.headers.len(),
                });
            } else {
                &self.headers
            };
            writer.write_record(header_row)?;
            debug!("Wrote CSV headers: {} fields", header_row.len());
        }

        let mut values = vec![Value::Null; columns.len()];
        let mut scanned: u64 = 0;
        let mut written: u64 = 0;

        while self.cursor.advance() {
            scanned += 1;
            self.cursor
                .scan(&mut values)
                .map_err(|e| CsvError::scan(scanned, e))?;

            let mut row: Vec<String> = values
                .iter()
                .map(|value| value.normalize(time_format.as_ref()))
                .collect();

            if let Some(processor) = self.row_pre_processor.as_mut() {
                let (keep, processed) = processor(row, columns.as_slice());
                if !keep {
                    trace!("Row {} omitted by pre-processor", scanned);
                    continue;
                }
                row = processed;
            }

            writer.write_record(&row)?;
            written += 1;
        }

        // Flush even when the cursor failed so the rows already written reach the sink
        let terminal = self.cursor.err().map(|e| CsvError::cursor(written, e));
        let flushed = writer.flush().map_err(CsvError::encode);
        if let Some(error) = terminal {
            return Err(error);
        }
        flushed?;
        debug!("Wrote {} of {} rows to CSV", written, scanned);

        Ok(())
    }

    /// Write the CSV to `path`, creating or truncating the file
    ///
    /// The file handle is closed on every exit path.
    pub fn write_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), CsvError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CsvError::file(path, e))?;
        debug!("Created CSV file: {}", path.display());

        self.write_to(file)
    }

    /// Write the CSV into memory and return it
    ///
    /// An empty result set still yields the header line, so check the `Result`
    /// rather than the string's length to detect failure.
    pub fn write_to_string(&mut self) -> Result<String, CsvError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Like [`write_to_string`](Self::write_to_string), but returns an empty string
    /// on failure
    ///
    /// Only for contexts that cannot propagate an error, such as string interpolation.
    /// The swallowed error is logged at `warn` level.
    pub fn to_string_best_effort(&mut self) -> String {
        self.write_to_string().unwrap_or_else(|e| {
            warn!("Discarding CSV output after error: {}", e);
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryCursor;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn people() -> MemoryCursor {
        MemoryCursor::new(
            vec!["name", "age", "bdate"],
            vec![vec![
                Value::from("Alice"),
                Value::from(1i64),
                Value::from(Utc.timestamp_opt(123_456_789, 0).unwrap()),
            ]],
        )
    }

    #[test]
    fn test_defaults() {
        let converter = Converter::new(people());
        assert!(converter.headers.is_empty());
        assert!(converter.write_headers);
        assert_eq!(converter.delimiter, None);
        assert_eq!(converter.time_format, None);
        assert!(converter.row_pre_processor.is_none());
    }

    #[test]
    fn test_end_to_end_default() {
        let csv = Converter::new(people()).write_to_string().unwrap();
        assert_eq!(csv, "name,age,bdate\nAlice,1,1973-11-29 21:33:09 +0000 UTC\n");
    }

    #[rstest]
    #[case::override_headers(
        Converter::new(people()).headers(["Name", "Age", "Birthday"]),
        "Name,Age,Birthday\nAlice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::no_headers(
        Converter::new(people()).write_headers(false),
        "Alice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::no_headers_ignores_override(
        Converter::new(people()).headers(["x", "y", "z"]).write_headers(false),
        "Alice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::kitchen_time(
        Converter::new(people()).time_format("%-I:%M%p"),
        "name,age,bdate\nAlice,1,9:33PM\n"
    )]
    #[case::pipe_delimiter(
        Converter::new(people()).delimiter('|'),
        "name|age|bdate\nAlice|1|1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::zero_delimiter(
        Converter::new(people()).delimiter('\0'),
        "name,age,bdate\nAlice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::empty_time_format(
        Converter::new(people()).time_format(""),
        "name,age,bdate\nAlice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    #[case::no_headers_ignores_mismatched_override(
        Converter::new(people()).headers(["only", "two"]).write_headers(false),
        "Alice,1,1973-11-29 21:33:09 +0000 UTC\n"
    )]
    fn test_configuration(#[case] converter: Converter<MemoryCursor>, #[case] expected: &str) {
        let mut converter = converter;
        assert_eq!(converter.write_to_string().unwrap(), expected);
    }

    #[test]
    fn test_pre_processor_sees_normalized_row_and_columns() {
        let mut converter = Converter::new(people()).time_format("%Y");
        converter.set_row_pre_processor(|row, columns| {
            assert_eq!(row, vec!["Alice", "1", "1973"]);
            assert_eq!(columns, ["name", "age", "bdate"]);
            (true, row)
        });

        assert_eq!(
            converter.write_to_string().unwrap(),
            "name,age,bdate\nAlice,1,1973\n"
        );
    }

    #[test]
    fn test_header_mismatch_writes_nothing() {
        let mut output = Vec::new();
        let result = Converter::new(people())
            .headers(["only", "two"])
            .write_to(&mut output);

        assert_eq!(
            result,
            Err(CsvError::HeaderMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(output.is_empty());
    }

    #[rstest]
    #[case::delimiter(
        Converter::new(people()).delimiter('"'),
        CsvError::InvalidDelimiter { delimiter: '"' }
    )]
    #[case::time_format(
        Converter::new(people()).time_format("%Q"),
        CsvError::InvalidTimeFormat { format: "%Q".to_string() }
    )]
    fn test_invalid_configuration(
        #[case] converter: Converter<MemoryCursor>,
        #[case] expected: CsvError,
    ) {
        let mut converter = converter;
        let mut output = Vec::new();
        assert_eq!(converter.write_to(&mut output), Err(expected));
        assert!(output.is_empty());
    }

    #[test]
    fn test_best_effort_swallows_errors() {
        let mut converter = Converter::new(people()).delimiter('\n');
        assert_eq!(converter.to_string_best_effort(), "");
    }

    #[test]
    fn test_with_options() {
        let options = ConverterOptions {
            delimiter: Some(';'),
            write_headers: false,
            ..ConverterOptions::default()
        };
        let csv = Converter::with_options(people(), options)
            .write_to_string()
            .unwrap();
        assert_eq!(csv, "Alice;1;1973-11-29 21:33:09 +0000 UTC\n");
    }

    #[test]
    fn test_borrowed_cursor_is_consumed() {
        let mut cursor = people();
        Converter::new(&mut cursor).write_to_string().unwrap();
        assert_eq!(cursor.remaining(), 0);
    }
}
