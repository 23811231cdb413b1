use thiserror::Error;

use crate::field::Field;

/// Errors raised while compiling a cron expression.
///
/// Every variant carries the offending fragment so callers can point the
/// user at the exact piece of text that was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cron expression is empty")]
    EmptyExpression,

    #[error("alternative {index} of '{expression}' is empty")]
    EmptyAlternative { expression: String, index: usize },

    #[error("expected 5, 6 or 7 fields, got {count} in '{alternative}'")]
    InvalidFieldCount { alternative: String, count: usize },

    #[error("empty value in {field} field: '{part}'")]
    InvalidPartValue { field: Field, part: String },

    #[error("unknown alias '{alias}' for {field} field")]
    InvalidAlias { field: Field, alias: String },

    #[error("step must be a positive integer in {field} field: '{part}'")]
    NonPositiveStep { field: Field, part: String },

    #[error("invalid syntax in {field} field: '{part}'")]
    InvalidSyntax { field: Field, part: String },

    #[error("malformed range in {field} field: '{part}'")]
    MalformedRange { field: Field, part: String },

    #[error("value {value} out of range [{min}, {max}] for {field} field")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i32,
        max: i32,
    },
}

impl ParseError {
    /// The field the error was raised for, if it is field-level.
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::EmptyExpression
            | ParseError::EmptyAlternative { .. }
            | ParseError::InvalidFieldCount { .. } => None,
            ParseError::InvalidPartValue { field, .. }
            | ParseError::InvalidAlias { field, .. }
            | ParseError::NonPositiveStep { field, .. }
            | ParseError::InvalidSyntax { field, .. }
            | ParseError::MalformedRange { field, .. }
            | ParseError::OutOfRange { field, .. } => Some(*field),
        }
    }
}

/// Result alias for expression compilation.
pub type Result<T> = std::result::Result<T, ParseError>;
