//! Error types for the converter
//!
//! This module defines all error types that can occur during a conversion run.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Row Errors**: An order date that does not match the expected pattern
//! - **Configuration Errors**: A UTC offset outside a day
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Input that is not well-formed tabular text
//! - **Runtime Errors**: Async runtime or worker task failures
//!
//! Every error is fatal for the file being converted: the first one halts the run.

use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Order date does not match `YYYY-MM-DD HH:mm:ss`
    ///
    /// The row is never emitted with a guessed date.
    #[error("Malformed timestamp '{value}'{}", row.map(|r| format!(" in data row {}", r)).unwrap_or_default())]
    MalformedTimestamp {
        /// The offending order date as delivered
        value: String,
        /// 1-based data row index (header excluded), when known
        row: Option<usize>,
    },

    /// Configured UTC offset is not within (-24, 24) hours
    #[error("Invalid UTC offset: {hours} hours")]
    InvalidOffset {
        /// The rejected offset, in hours east of UTC
        hours: i32,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input file is not well-formed CSV
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Async runtime could not be built or a worker task failed
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ConvertError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for ConvertError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ConvertError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl ConvertError {
    /// Create a MalformedTimestamp error without row context
    pub fn malformed_timestamp(value: &str) -> Self {
        ConvertError::MalformedTimestamp {
            value: value.to_string(),
            row: None,
        }
    }

    /// Attach a 1-based data row index to a row-level error
    ///
    /// Errors that already carry a row, and errors that are not row-level,
    /// are returned unchanged.
    pub fn at_row(self, index: usize) -> Self {
        match self {
            ConvertError::MalformedTimestamp { value, row: None } => {
                ConvertError::MalformedTimestamp {
                    value,
                    row: Some(index),
                }
            }
            other => other,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ConvertError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl Into<String>) -> Self {
        ConvertError::Runtime {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::malformed_timestamp_with_row(
        ConvertError::MalformedTimestamp { value: "yesterday".to_string(), row: Some(3) },
        "Malformed timestamp 'yesterday' in data row 3"
    )]
    #[case::malformed_timestamp_without_row(
        ConvertError::MalformedTimestamp { value: "".to_string(), row: None },
        "Malformed timestamp ''"
    )]
    #[case::invalid_offset(
        ConvertError::InvalidOffset { hours: 30 },
        "Invalid UTC offset: 30 hours"
    )]
    #[case::file_not_found(
        ConvertError::FileNotFound { path: "export.csv".to_string() },
        "File not found: export.csv"
    )]
    #[case::io_error(
        ConvertError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        ConvertError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        ConvertError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::runtime(
        ConvertError::Runtime { message: "task panicked".to_string() },
        "Runtime error: task panicked"
    )]
    fn test_error_display(#[case] error: ConvertError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::adds_row(
        ConvertError::malformed_timestamp("x").at_row(7),
        ConvertError::MalformedTimestamp { value: "x".to_string(), row: Some(7) }
    )]
    #[case::keeps_existing_row(
        ConvertError::MalformedTimestamp { value: "x".to_string(), row: Some(2) }.at_row(7),
        ConvertError::MalformedTimestamp { value: "x".to_string(), row: Some(2) }
    )]
    #[case::ignores_other_errors(
        ConvertError::file_not_found("a.csv").at_row(7),
        ConvertError::FileNotFound { path: "a.csv".to_string() }
    )]
    fn test_at_row(#[case] result: ConvertError, #[case] expected: ConvertError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ConvertError = io_error.into();
        assert!(matches!(error, ConvertError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
