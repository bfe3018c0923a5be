//! SQL result to CSV conversion
//! # Overview
//!
//! This library turns a forward-only query result cursor into CSV text, streamed to any
//! `std::io::Write` sink, a file, or an in-memory string.
//!
//! # Architecture
//!
//! - [`types`] - Cell values, their text normalization, and error types
//! - [`core`] - Conversion logic:
//!   - [`core::traits`] - The `RowCursor` trait drivers implement
//!   - [`core::converter`] - Column discovery, normalization, pre-processing, encoding
//!   - [`core::options`] - Serializable converter settings
//!   - [`core::memory_cursor`] - In-memory cursor over owned rows
//! - [`io`] - CSV encoder setup and one-shot helper functions
//!
//! # Value Normalization
//!
//! - **Null**: empty field
//! - **Bytes**: the bytes as text, verbatim
//! - **Timestamp**: the configured strftime pattern, or `1973-11-29 21:33:09 +0000 UTC`
//! - **Anything else**: its natural `Display` form
//!
//! # Example
//!
//! ```
//! use sqlcsv::{MemoryCursor, Value};
//!
//! let cursor = MemoryCursor::new(
//!     vec!["name", "nickname", "age"],
//!     vec![vec![Value::from("Alice"), Value::Null, Value::from(1i64)]],
//! );
//! assert_eq!(sqlcsv::write_string(cursor).unwrap(), "name,nickname,age\nAlice,,1\n");
//! ```

// Module declarations
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    Converter, ConverterOptions, MemoryCursor, MemoryCursorError, RowCursor, RowPreProcessor,
};
pub use io::{write, write_file, write_string};
pub use types::{CsvError, TimeFormat, Value};
