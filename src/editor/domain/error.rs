//! Error types for editor domain construction and form validation.

use std::fmt;
use thiserror::Error;

/// Errors returned while constructing domain editor values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task type value is not one of the supported types.
    #[error("unsupported task type: {0}")]
    InvalidTaskType(String),

    /// The priority is outside the inclusive `0..=9` range.
    #[error("invalid priority {0}, expected a value between 0 and 9")]
    PriorityOutOfRange(u8),

    /// The task identifier is empty or whitespace-only.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The target list name is empty after trimming.
    #[error("target list name must not be empty")]
    EmptyTargetList,
}

/// Form fields subject to pre-submit validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Task title.
    Title,
    /// Task body, sent as `task` on the wire.
    Body,
}

impl FormField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "task",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single per-field validation failure.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is empty or whitespace-only.
    #[error("{0} is required")]
    Required(FormField),
}

impl FieldError {
    /// Returns the field the error is attached to.
    #[must_use]
    pub const fn field(self) -> FormField {
        match self {
            Self::Required(field) => field,
        }
    }
}

/// Form validation failure carrying every offending field.
///
/// Raised before any network call; callers surface each entry inline next
/// to its field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task form is invalid: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a validation error from collected field errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Returns every collected field error.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<FieldError> {
        self.errors.iter().copied().find(|err| err.field() == field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
