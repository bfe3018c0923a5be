//! Error types for the SQL-to-CSV converter
//!
//! Every variant is fatal to the write operation that produced it. Nothing is
//! retried: a failed scan or encode will not succeed again without the caller
//! changing something.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: invalid delimiter, invalid time format, header override
//!   of the wrong width. Raised before any output is written.
//! - **Cursor Errors**: column discovery, row scanning, terminal cursor state
//! - **Output Errors**: CSV encoding/sink failures, output file creation

use thiserror::Error;

/// Main error type for CSV conversion
///
/// Once any of these is returned the caller must assume the output written so far
/// is incomplete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    /// The cursor could not report its column list
    ///
    /// Nothing has been written when this is returned.
    #[error("Failed to discover columns: {message}")]
    ColumnDiscovery {
        /// Error reported by the cursor
        message: String,
    },

    /// A row's values could not be fetched from the cursor
    ///
    /// Rows before this one have already reached the encoder.
    #[error("Failed to scan row {row}: {message}")]
    Scan {
        /// 1-based index of the row being scanned
        row: u64,
        /// Error reported by the cursor
        message: String,
    },

    /// The cursor finished with an error
    ///
    /// Surfaced after every row was written because the cursor may have stopped
    /// early, so the output can be truncated.
    #[error("Cursor failed after {rows_written} rows: {message}")]
    Cursor {
        /// Number of data rows written before the failure was observed
        rows_written: u64,
        /// Error reported by the cursor
        message: String,
    },

    /// The CSV encoder failed to write a row or flush to the sink
    #[error("CSV encode error: {message}")]
    Encode {
        /// Description of the encoder failure
        message: String,
    },

    /// The output file could not be created or truncated
    #[error("Failed to create '{path}': {message}")]
    File {
        /// Target path
        path: String,
        /// Description of the I/O failure
        message: String,
    },

    /// The header override does not match the cursor's column count
    #[error("Header override has {actual} entries but the cursor has {expected} columns")]
    HeaderMismatch {
        /// Column count reported by the cursor
        expected: usize,
        /// Length of the header override
        actual: usize,
    },

    /// The delimiter cannot be used as a CSV field separator
    #[error("Invalid delimiter {delimiter:?}: must be an ASCII character other than '\"', '\\r' or '\\n'")]
    InvalidDelimiter {
        /// The rejected delimiter
        delimiter: char,
    },

    /// The time format is not a valid strftime pattern
    #[error("Invalid time format '{format}'")]
    InvalidTimeFormat {
        /// The rejected pattern
        format: String,
    },
}

// Conversion from csv::Error to CsvError
impl From<csv::Error> for CsvError {
    fn from(error: csv::Error) -> Self {
        CsvError::Encode {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CsvError {
    /// Create a ColumnDiscovery error
    pub fn column_discovery(error: impl std::fmt::Display) -> Self {
        CsvError::ColumnDiscovery {
            message: error.to_string(),
        }
    }

    /// Create a Scan error
    pub fn scan(row: u64, error: impl std::fmt::Display) -> Self {
        CsvError::Scan {
            row,
            message: error.to_string(),
        }
    }

    /// Create a Cursor error
    pub fn cursor(rows_written: u64, error: impl std::fmt::Display) -> Self {
        CsvError::Cursor {
            rows_written,
            message: error.to_string(),
        }
    }

    /// Create an Encode error
    pub fn encode(error: impl std::fmt::Display) -> Self {
        CsvError::Encode {
            message: error.to_string(),
        }
    }

    /// Create a File error
    pub fn file(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        CsvError::File {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
