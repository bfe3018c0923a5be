//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `value`: Cell values and their text normalization
//! - `error`: Error types for CSV conversion

pub mod error;
pub mod value;

pub use error::CsvError;
pub use value::{TimeFormat, Value};
