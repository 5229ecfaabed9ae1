//! Error types for catalog and coordinate handling.
//!
//! This module provides a unified error type [`SurveyError`] covering the
//! failure modes of the survey pipeline: coordinate text that does not
//! parse, numeric catalog fields that do not parse, and catalog rows
//! missing a required column.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`CoordinateParse`](SurveyError::CoordinateParse) | Sexagesimal text rejected by the parser |
//! | [`FieldParse`](SurveyError::FieldParse) | Non-empty catalog cell with non-numeric content |
//! | [`MissingColumn`](SurveyError::MissingColumn) | Required column absent from an input row |
//!
//! # Usage
//!
//! Fallible functions return [`SurveyResult<T>`], which is
//! `Result<T, SurveyError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use kepler_core::SurveyError;
//!
//! let err = SurveyError::field_parse("KEP Mag", "bright", "not a number");
//! assert!(err.to_string().contains("KEP Mag"));
//! ```

use thiserror::Error;

/// Unified error type for the survey pipeline.
///
/// Covers coordinate parsing, numeric field parsing, and input-row
/// structure. Use the constructor methods
/// ([`coordinate_parse`](Self::coordinate_parse),
/// [`field_parse`](Self::field_parse),
/// [`missing_column`](Self::missing_column)) for consistent creation.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Coordinate text that is not a valid sexagesimal triple.
    #[error("Cannot parse coordinate '{input}': {message}")]
    CoordinateParse { input: String, message: String },

    /// A catalog cell that should hold a number but does not.
    #[error("Cannot parse column '{column}' value '{value}': {message}")]
    FieldParse {
        column: String,
        value: String,
        message: String,
    },

    /// A required column missing from an input row.
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },
}

/// Convenience alias for `Result<T, SurveyError>`.
pub type SurveyResult<T> = Result<T, SurveyError>;

impl SurveyError {
    /// Creates a [`CoordinateParse`](Self::CoordinateParse) error.
    pub fn coordinate_parse(input: &str, reason: &str) -> Self {
        Self::CoordinateParse {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`FieldParse`](Self::FieldParse) error.
    pub fn field_parse(column: &str, value: &str, reason: &str) -> Self {
        Self::FieldParse {
            column: column.to_string(),
            value: value.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`MissingColumn`](Self::MissingColumn) error.
    pub fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_parse_error() {
        let err = SurveyError::coordinate_parse("xx yy zz", "non-numeric content");
        assert_eq!(
            err.to_string(),
            "Cannot parse coordinate 'xx yy zz': non-numeric content"
        );
    }

    #[test]
    fn test_field_parse_error() {
        let err = SurveyError::field_parse("E(B-V)", "n/a", "not a number");
        assert!(err.to_string().contains("E(B-V)"));
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn test_missing_column_error() {
        let err = SurveyError::missing_column("Kepler ID");
        assert_eq!(err.to_string(), "Missing required column 'Kepler ID'");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SurveyError>();
        _assert_sync::<SurveyError>();
    }
}
