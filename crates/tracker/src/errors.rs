use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid data format: expected {expected} fields, got {found}")]
    Format { expected: usize, found: usize },

    #[error("failed to parse {field}: {reason}")]
    Parse { field: RecordField, reason: String },

    #[error("{field} must be greater than 0")]
    Range { field: RecordField },

    #[error("invalid input: {0} must be > 0")]
    InvalidInput(Parameter),

    #[error("unknown activity type: {0:?}")]
    UnknownActivity(String),
}

impl TrackerError {
    pub(crate) fn parse(field: RecordField, reason: impl fmt::Display) -> Self {
        TrackerError::Parse {
            field,
            reason: reason.to_string(),
        }
    }
}

/// A field of a delimited activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Steps,
    Duration,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Steps => f.write_str("steps"),
            RecordField::Duration => f.write_str("duration"),
        }
    }
}

/// An input of the calorie computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Steps,
    Weight,
    Height,
    Duration,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Steps => f.write_str("steps"),
            Parameter::Weight => f.write_str("weight"),
            Parameter::Height => f.write_str("height"),
            Parameter::Duration => f.write_str("duration"),
        }
    }
}
