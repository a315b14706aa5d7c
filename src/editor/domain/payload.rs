//! Outbound mutation payloads.
//!
//! Builders here are pure: they read form values, editor toggles, and the
//! session context and never touch the network or the store.

use super::{
    Priority, SessionContext, TargetList, Task, TaskFields, TaskId, TaskType, resolve::destination,
};
use serde::Serialize;

/// Editor values the payload builder reads.
#[derive(Debug, Clone, Copy)]
pub struct PayloadInput<'a> {
    /// Identifier of an existing task; `None` while creating.
    pub id: Option<&'a TaskId>,
    /// List the task currently belongs to.
    pub target: &'a TargetList,
    /// Type chosen in the editor.
    pub selected_type: TaskType,
    /// State of the mark-done toggle.
    pub mark_done: bool,
    /// Current form values.
    pub fields: &'a TaskFields,
}

/// Create or update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,
    #[serde(flatten)]
    session: SessionContext,
    target: TargetList,
    #[serde(rename = "type")]
    task_type: TaskType,
    title: String,
    task: String,
    description: String,
    priority: Priority,
}

impl TaskPayload {
    /// Returns the identifier of the task being updated.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Returns the session context attached to the request.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Returns the list the task is sent to, after the done override.
    #[must_use]
    pub const fn target(&self) -> &TargetList {
        &self.target
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the form fields carried by the payload.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            body: self.task.clone(),
            description: self.description.clone(),
            priority: self.priority,
        }
    }

    /// Materializes the task the service now holds under `id`.
    #[must_use]
    pub fn to_task(&self, id: TaskId) -> Task {
        Task::new(id, self.task_type, self.target.clone(), self.fields())
    }
}

/// Delete request body with only the identifying fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePayload {
    id: TaskId,
    #[serde(flatten)]
    session: SessionContext,
}

impl DeletePayload {
    /// Returns the identifier of the task to delete.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }
}

/// Assembles a create or update payload.
///
/// When the mark-done toggle is set, the target is replaced with the done
/// destination for the selected type.
#[must_use]
pub fn build_payload(input: PayloadInput<'_>, session: &SessionContext) -> TaskPayload {
    TaskPayload {
        id: input.id.cloned(),
        session: session.clone(),
        target: destination(input.target, input.selected_type, input.mark_done),
        task_type: input.selected_type,
        title: input.fields.title.clone(),
        task: input.fields.body.clone(),
        description: input.fields.description.clone(),
        priority: input.fields.priority,
    }
}

/// Assembles the minimal delete payload.
#[must_use]
pub fn build_delete_payload(id: &TaskId, session: &SessionContext) -> DeletePayload {
    DeletePayload {
        id: id.clone(),
        session: session.clone(),
    }
}
