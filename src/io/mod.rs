//! I/O module
//!
//! Handles CSV encoder setup and one-shot conversion helpers.
//!
//! # Components
//!
//! - `csv_format` - CSV writer construction and delimiter validation
//! - `shorthand` - Package-level functions converting a cursor with default settings

pub mod csv_format;
pub mod shorthand;

pub use csv_format::{build_writer, resolve_delimiter};
pub use shorthand::{write, write_file, write_string};
