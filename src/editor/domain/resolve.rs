//! Destination rules for tasks flagged as done.

use super::{TargetList, TaskType};

/// List a finished task of `task_type` moves to.
#[must_use]
pub const fn done_destination(task_type: TaskType) -> TargetList {
    match task_type {
        TaskType::Dsa => TargetList::QUESTION,
        TaskType::Project | TaskType::Theory | TaskType::Others => TargetList::WORK,
    }
}

/// List a task should be sent to given the mark-done toggle.
#[must_use]
pub fn destination(current: &TargetList, task_type: TaskType, mark_done: bool) -> TargetList {
    if mark_done {
        done_destination(task_type)
    } else {
        current.clone()
    }
}

/// Store placement change implied by an accepted mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMove {
    moved_from: Option<TargetList>,
    moved_to: TargetList,
}

impl TargetMove {
    /// Placement for a task that stays in (or is first added to) `target`.
    #[must_use]
    pub const fn stay(target: TargetList) -> Self {
        Self {
            moved_from: None,
            moved_to: target,
        }
    }

    /// List the task must be removed from, when it changes lists.
    #[must_use]
    pub const fn moved_from(&self) -> Option<&TargetList> {
        self.moved_from.as_ref()
    }

    /// List the task ends up in.
    #[must_use]
    pub const fn moved_to(&self) -> &TargetList {
        &self.moved_to
    }

    /// Returns `true` when the task changes lists.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        self.moved_from.is_some()
    }
}

/// Compares the task's original list with the list sent to the service.
#[must_use]
pub fn resolve(original: &TargetList, payload_target: &TargetList) -> TargetMove {
    if original == payload_target {
        TargetMove::stay(payload_target.clone())
    } else {
        TargetMove {
            moved_from: Some(original.clone()),
            moved_to: payload_target.clone(),
        }
    }
}
