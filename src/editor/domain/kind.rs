//! Task type classification.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a task, fixed once the task exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskType {
    /// Data structures and algorithms practice.
    #[default]
    Dsa,
    /// Project work.
    Project,
    /// Theory study.
    Theory,
    /// Anything else.
    Others,
}

impl TaskType {
    /// Every task type in display order.
    pub const ALL: [Self; 4] = [Self::Dsa, Self::Project, Self::Theory, Self::Others];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dsa => "DSA",
            Self::Project => "PROJECT",
            Self::Theory => "THEORY",
            Self::Others => "OTHERS",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "DSA" => Ok(Self::Dsa),
            "PROJECT" => Ok(Self::Project),
            "THEORY" => Ok(Self::Theory),
            "OTHERS" => Ok(Self::Others),
            _ => Err(TaskDomainError::InvalidTaskType(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
