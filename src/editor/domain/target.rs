//! Target list names.

use super::TaskDomainError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Named list a task belongs to.
///
/// The set of lists is defined by the task service; only the three lists the
/// editor reasons about have dedicated constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TargetList(Cow<'static, str>);

impl TargetList {
    /// List of open tasks; the only list offering the mark-done toggle.
    pub const TODO: Self = Self(Cow::Borrowed("TODO"));
    /// Destination of finished DSA tasks.
    pub const QUESTION: Self = Self(Cow::Borrowed("QUESTION"));
    /// Destination of every other finished task.
    pub const WORK: Self = Self(Cow::Borrowed("WORK"));

    /// Creates a target list from a service-defined name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTargetList`] when the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTargetList);
        }
        Ok(Self(Cow::Owned(trimmed.to_owned())))
    }

    /// Returns `true` for the TODO list.
    #[must_use]
    pub fn is_todo(&self) -> bool {
        *self == Self::TODO
    }

    /// Returns the list name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TargetList {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TargetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
