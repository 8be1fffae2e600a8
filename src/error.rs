//! Crate error type.
//!
//! The schedulers themselves never fail; errors come from loading,
//! validating and rendering process data.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised around a simulation run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Wrong invocation shape (e.g. no input given).
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The process file could not be opened.
    #[error("error opening scheduling file {}: {source}", .path.display())]
    FileOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed into a process.
    #[error("malformed process record on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source.
        line: u64,
        /// What was wrong with the record.
        message: String,
    },

    /// The CSV reader failed.
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The process list failed validation.
    #[error("invalid process list: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates an invalid-arguments error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Creates a parse error for the given line.
    pub fn parse(line: u64, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_display() {
        let err = Error::parse(3, "burst \"x\" is not an integer");
        assert_eq!(
            err.to_string(),
            "malformed process record on line 3: burst \"x\" is not an integer"
        );
    }

    #[test]
    fn test_validation_display_joins_errors() {
        let err = Error::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NegativeBurst, "Process 2 has negative burst -1"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process list: Duplicate process ID: 1; Process 2 has negative burst -1"
        );
    }

    #[test]
    fn test_file_open_display() {
        let err = Error::FileOpen {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("error opening scheduling file missing.csv"));
    }
}
