//! Local task store port.

use crate::editor::domain::{TargetList, Task, TaskId};

/// Client-side store of tasks grouped by target list.
///
/// Both operations are synchronous and idempotent: adding an existing id
/// replaces its data, and removing an absent id does nothing.
pub trait TaskStore: Send + Sync {
    /// Adds or replaces `id` in `list`.
    fn add_item(&self, list: &TargetList, id: &TaskId, data: &Task);

    /// Removes `id` from `list`.
    fn remove_item(&self, list: &TargetList, id: &TaskId);
}
