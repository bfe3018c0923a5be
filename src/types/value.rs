//! Cell values produced by a row cursor
//!
//! Query results are dynamically typed per column, so a cursor hands back each cell
//! as a [`Value`]. This module also holds the normalization rules that turn a value
//! into the text placed in a CSV field:
//!
//! - `Null` → empty string
//! - `Bytes` → the bytes read as UTF-8 text, verbatim
//! - `Timestamp` → the configured [`TimeFormat`], or the default
//!   `YYYY-MM-DD HH:MM:SS ±HHMM ZONE` form
//! - everything else → its natural `Display` form

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use rust_decimal::Decimal;
use std::fmt::Write;

use super::error::CsvError;

/// A single cell fetched from a cursor
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// SQL NULL
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Exact numeric (NUMERIC/DECIMAL columns)
    Decimal(Decimal),
    Text(String),
    /// Binary or text blob, rendered as text
    Bytes(Vec<u8>),
    /// Date/time instant with the offset it was stored with
    Timestamp(DateTime<FixedOffset>),
}

impl Value {
    /// Returns true for SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render this value as CSV field text
    ///
    /// `time_format` applies to `Timestamp` values only.
    pub fn normalize(&self, time_format: Option<&TimeFormat<'_>>) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::Timestamp(ts) => match time_format {
                Some(format) => format.render(ts),
                None => default_timestamp(ts),
            },
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

/// Default timestamp rendering, e.g. `1973-11-29 21:33:09 +0000 UTC`
///
/// Fractional seconds appear only when non-zero, with trailing zeros trimmed.
/// The zone name is `UTC` for a zero offset and the numeric offset otherwise.
fn default_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let mut out = ts.format("%Y-%m-%d %H:%M:%S").to_string();

    // nanosecond() exceeds 1e9 during a leap second
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    let offset = ts.format("%z").to_string();
    let zone = if ts.offset().local_minus_utc() == 0 {
        "UTC"
    } else {
        offset.as_str()
    };
    out.push(' ');
    out.push_str(&offset);
    out.push(' ');
    out.push_str(zone);
    out
}

/// A validated strftime pattern for rendering timestamps
///
/// Parsed once per write so a bad pattern is rejected before any output.
#[derive(Debug, Clone)]
pub struct TimeFormat<'a> {
    items: Vec<Item<'a>>,
}

impl<'a> TimeFormat<'a> {
    /// Parse a chrono strftime pattern such as `%-I:%M%p`
    pub fn parse(pattern: &'a str) -> Result<Self, CsvError> {
        let items: Vec<Item<'a>> = StrftimeItems::new(pattern).collect();
        let invalid = || CsvError::InvalidTimeFormat {
            format: pattern.to_string(),
        };

        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        // Some specifiers parse but cannot be rendered; probe once with a real instant
        let probe = Utc.timestamp_opt(0, 0).single().ok_or_else(invalid)?.fixed_offset();
        let mut scratch = String::new();
        write!(scratch, "{}", probe.format_with_items(items.iter())).map_err(|_| invalid())?;

        Ok(Self { items })
    }

    fn render(&self, ts: &DateTime<FixedOffset>) -> String {
        ts.format_with_items(self.items.iter()).to_string()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value.fixed_offset())
    }
}

/// Naive date/times are taken to be UTC
impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(value.and_utc().fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
