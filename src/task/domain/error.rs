//! Error types for task field validation and parsing.

use std::fmt;
use thiserror::Error;

/// Input fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The activity label.
    Activity,
    /// The scheduled date and time.
    Schedule,
    /// The priority tier.
    Priority,
}

impl TaskField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Schedule => "schedule",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field is empty or whitespace-only.
    Required,
    /// The field holds a value that cannot be interpreted.
    Invalid(String),
}

/// A rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {}", describe(.kind))]
pub struct FieldError {
    /// The offending field.
    pub field: TaskField,
    /// The reason it was rejected.
    pub kind: FieldErrorKind,
}

fn describe(kind: &FieldErrorKind) -> String {
    match kind {
        FieldErrorKind::Required => "is required".to_owned(),
        FieldErrorKind::Invalid(value) => format!("has invalid value '{value}'"),
    }
}

impl FieldError {
    /// Creates an error for a missing field.
    #[must_use]
    pub const fn required(field: TaskField) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    /// Creates an error for an uninterpretable field value.
    #[must_use]
    pub fn invalid(field: TaskField, value: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Invalid(value.into()),
        }
    }
}

/// One or more rejected fields from a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task validation failed: {}", format_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Wraps the collected field errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Returns every rejected field in input order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: TaskField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

/// Error returned while parsing a priority tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
