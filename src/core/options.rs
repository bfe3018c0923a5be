//! Serializable converter configuration
//!
//! Lets applications keep CSV output settings in their own config files. Any serde
//! format works; missing fields fall back to the converter defaults.

use serde::{Deserialize, Serialize};

/// Scalar converter settings
///
/// The row pre-processor is a closure and cannot be serialized, so it is set on the
/// [`Converter`](super::Converter) directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Header row override; empty means use the cursor's column names
    pub headers: Vec<String>,

    /// Whether to emit a header row at all
    pub write_headers: bool,

    /// Field separator; `None` means the encoder default (comma)
    pub delimiter: Option<char>,

    /// chrono strftime pattern for timestamp cells; empty means the default rendering
    pub time_format: Option<String>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            write_headers: true,
            delimiter: None,
            time_format: None,
        }
    }
}
