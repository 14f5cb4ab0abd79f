//! Field-level validation errors.
//!
//! Validation reports every failing field at once, so callers can show all messages next to
//! their inputs. Each [`FieldError`] carries the field name, a machine readable
//! [`ErrorCode`] and a human readable message.

use std::fmt;

use thiserror::Error;

/// Machine readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Value does not match the expected pattern or constraint.
    Invalid,
    /// Value is not one of the allowed choices.
    InvalidChoice,
    /// Required value is blank.
    Required,
    /// Value is longer than the column allows.
    MaxLength,
    /// Value is already used by another record.
    Unique,
    /// Value is identical to the current one.
    Unchanged,
    /// A configured limit has been reached.
    Limit,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Invalid => "invalid",
            Self::InvalidChoice => "invalid_choice",
            Self::Required => "required",
            Self::MaxLength => "max_length",
            Self::Unique => "unique",
            Self::Unchanged => "unchanged",
            Self::Limit => "limit",
        };

        f.write_str(code)
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the rejected field.
    pub field: &'static str,
    /// Reason the field was rejected.
    pub code: ErrorCode,
    /// Message shown to the user.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: &'static str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collection of field errors produced by a validation pass.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates an empty error list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error of a failed check and returns the value of a passing one.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }

    /// Records a field error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded field errors, in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns true if `field` failed with `code`.
    pub fn has(&self, field: &str, code: ErrorCode) -> bool {
        self.errors
            .iter()
            .any(|err| err.field == field && err.code == code)
    }

    /// Returns true if `field` failed for any reason.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|err| err.field == field)
    }

    /// Converts the collected errors into a result, `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed: ")?;

        for (index, err) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }

        Ok(())
    }
}
