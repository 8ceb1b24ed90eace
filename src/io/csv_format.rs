//! CSV format handling for Koinly output
//!
//! This module renders target records into the Koinly universal CSV layout:
//! - Header line built from [`TARGET_FIELDS`]
//! - One line per record, fields in the same order
//! - Lines joined by `\n`, with no trailing newline
//!
//! A field is quoted, with inner quotes doubled, when it contains a comma,
//! a double quote, or a line break. Everything else is written raw. The
//! rendering functions are pure; [`write_csv`] is the only one touching I/O.

use crate::types::{ConvertError, TargetRecord, TARGET_FIELDS};
use std::borrow::Cow;
use std::io::Write;

/// Suggested file name for the converted export
pub const OUTPUT_FILE_NAME: &str = "koinly_export.csv";

/// MIME type of the converted export
pub const OUTPUT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// The header line, without a line terminator
pub fn header_line() -> String {
    TARGET_FIELDS
        .iter()
        .map(|field| escape_field(field.name))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape a single field value
///
/// # Examples
///
/// ```
/// use koinly_export_converter::io::csv_format::escape_field;
///
/// assert_eq!(escape_field("Buy"), "Buy");
/// assert_eq!(escape_field(r#"Tom, "Bones""#), r#""Tom, ""Bones""""#);
/// ```
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Render one record as a CSV line, without a line terminator
pub fn render_row(record: &TargetRecord) -> String {
    record.values().map(escape_field).collect::<Vec<_>>().join(",")
}

/// Render records into a complete CSV document
///
/// Never fails; an empty slice yields just the header line.
pub fn render_csv(records: &[TargetRecord]) -> String {
    std::iter::once(header_line())
        .chain(records.iter().map(render_row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write records as a CSV document to `output`
///
/// # Arguments
///
/// * `records` - Converted rows, in output order
/// * `output` - Destination writer (file or stdout)
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ConvertError::IoError)` if a write error occurred
pub fn write_csv(records: &[TargetRecord], output: &mut dyn Write) -> Result<(), ConvertError> {
    output.write_all(render_csv(records).as_bytes())?;
    output.flush()?;
    Ok(())
}
