//! CSV encoder construction
//!
//! Quoting and escaping are left entirely to the `csv` crate. This module only
//! decides how the writer is configured:
//! - the configured delimiter, validated up front
//! - `\n` line terminator (the crate default)
//! - flexible record lengths, so rows rewritten by a pre-processor are written as
//!   returned rather than rejected

use crate::types::CsvError;
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// Resolve a configured delimiter to the byte handed to the encoder
///
/// `None` and the zero character both mean "use the encoder default".
///
/// # Returns
///
/// * `Ok(None)` - use the default (comma)
/// * `Ok(Some(byte))` - a usable delimiter
/// * `Err(CsvError::InvalidDelimiter)` - non-ASCII, or a character the encoder
///   reserves for quoting or line breaks
pub fn resolve_delimiter(delimiter: Option<char>) -> Result<Option<u8>, CsvError> {
    match delimiter {
        None | Some('\0') => Ok(None),
        Some(c) if !c.is_ascii() || matches!(c, '"' | '\r' | '\n') => {
            Err(CsvError::InvalidDelimiter { delimiter: c })
        }
        Some(c) => Ok(Some(c as u8)),
    }
}

/// Build a CSV writer over `sink`
///
/// The sink is wrapped, not owned beyond the writer's lifetime; dropping the
/// writer never closes a caller-supplied handle.
pub fn build_writer<W: Write>(sink: W, delimiter: Option<char>) -> Result<Writer<W>, CsvError> {
    let mut builder = WriterBuilder::new();
    builder.flexible(true);

    if let Some(byte) = resolve_delimiter(delimiter)? {
        builder.delimiter(byte);
    }

    Ok(builder.from_writer(sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, None)]
    #[case::zero(Some('\0'), None)]
    #[case::pipe(Some('|'), Some(b'|'))]
    #[case::tab(Some('\t'), Some(b'\t'))]
    #[case::semicolon(Some(';'), Some(b';'))]
    fn test_resolve_delimiter_valid(#[case] input: Option<char>, #[case] expected: Option<u8>) {
        assert_eq!(resolve_delimiter(input), Ok(expected));
    }

    #[rstest]
    #[case::quote('"')]
    #[case::carriage_return('\r')]
    #[case::newline('\n')]
    #[case::non_ascii('§')]
    fn test_resolve_delimiter_invalid(#[case] input: char) {
        assert_eq!(
            resolve_delimiter(Some(input)),
            Err(CsvError::InvalidDelimiter { delimiter: input })
        );
    }

    #[rstest]
    #[case::default_comma(None, "a,b\n1,\"x,y\"\n")]
    #[case::pipe(Some('|'), "a|b\n1|x,y\n")]
    fn test_build_writer_output(#[case] delimiter: Option<char>, #[case] expected: &str) {
        let mut output = Vec::new();
        {
            let mut writer = build_writer(&mut output, delimiter).unwrap();
            writer.write_record(["a", "b"]).unwrap();
            writer.write_record(["1", "x,y"]).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_build_writer_accepts_ragged_rows() {
        let mut output = Vec::new();
        {
            let mut writer = build_writer(&mut output, None).unwrap();
            writer.write_record(["a", "b"]).unwrap();
            writer.write_record(["1", "2", "3"]).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "a,b\n1,2,3\n");
    }
}
