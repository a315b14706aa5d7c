//! Task entity and its editable form fields.

use super::{FieldError, FormField, TargetList, TaskDomainError, TaskId, TaskType, ValidationError};
use serde::Serialize;
use std::fmt;

/// Task priority in the inclusive range `0..=9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Lowest priority.
    pub const MIN: Self = Self(0);
    /// Highest priority.
    pub const MAX: Self = Self(9);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOutOfRange`] when the value
    /// exceeds 9.
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > Self::MAX.0 {
            return Err(TaskDomainError::PriorityOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable content of the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Required task title.
    pub title: String,
    /// Required task body.
    pub body: String,
    /// Optional free-text description; empty when unset.
    pub description: String,
    /// Task priority.
    pub priority: Priority,
}

impl TaskFields {
    /// Creates form fields with the required title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            description: String::new(),
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Checks that every required field is filled in.
    ///
    /// All failures are collected so each field can show its own message.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let errors: Vec<FieldError> = [(FormField::Title, &self.title), (FormField::Body, &self.body)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| FieldError::Required(field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

/// A task the service has accepted, as mirrored in the local store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    task_type: TaskType,
    target: TargetList,
    fields: TaskFields,
}

impl Task {
    /// Creates a task record.
    #[must_use]
    pub const fn new(id: TaskId, task_type: TaskType, target: TargetList, fields: TaskFields) -> Self {
        Self {
            id,
            task_type,
            target,
            fields,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the list the task belongs to.
    #[must_use]
    pub const fn target(&self) -> &TargetList {
        &self.target
    }

    /// Returns the task's form fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }
}
