//! Applies accepted mutations to the local task store.

use std::sync::Arc;

use tracing::debug;

use crate::editor::{
    domain::{TargetList, TargetMove, Task, TaskId, TaskPayload, resolve},
    ports::TaskStore,
};

/// Task state after a reconciliation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    task: Task,
    placement: TargetMove,
}

impl Reconciled {
    /// Returns the task as now held by the store.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the placement change applied to the store.
    #[must_use]
    pub const fn placement(&self) -> &TargetMove {
        &self.placement
    }

    /// Consumes the result and returns the task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }

    /// Splits the result into the task and its placement.
    #[must_use]
    pub fn into_parts(self) -> (Task, TargetMove) {
        (self.task, self.placement)
    }
}

/// Mirrors server-accepted mutations into the local store.
///
/// Callers invoke it only after the service has accepted the request, so a
/// failed request never reaches the store.
#[derive(Debug)]
pub struct StoreReconciler<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> Clone for StoreReconciler<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> StoreReconciler<S>
where
    S: TaskStore,
{
    /// Creates a reconciler over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Adds a newly created task under its destination list, keyed by the
    /// identifier the service issued.
    #[must_use = "the reconciled task reports what the store now holds"]
    pub fn apply_created(&self, issued_id: TaskId, payload: &TaskPayload) -> Reconciled {
        let task = payload.to_task(issued_id);
        self.store.add_item(task.target(), task.id(), &task);
        debug!(id = %task.id(), list = %task.target(), "created task added to store");
        Reconciled {
            placement: TargetMove::stay(task.target().clone()),
            task,
        }
    }

    /// Refreshes an updated task, moving it when its list changed.
    #[must_use = "the reconciled task reports what the store now holds"]
    pub fn apply_updated(
        &self,
        original_target: &TargetList,
        id: TaskId,
        payload: &TaskPayload,
    ) -> Reconciled {
        let placement = resolve(original_target, payload.target());
        let task = payload.to_task(id);
        if let Some(from) = placement.moved_from() {
            self.store.remove_item(from, task.id());
        }
        self.store.add_item(placement.moved_to(), task.id(), &task);
        debug!(
            id = %task.id(),
            from = ?placement.moved_from().map(TargetList::as_str),
            to = %placement.moved_to(),
            "updated task reconciled"
        );
        Reconciled { task, placement }
    }

    /// Removes a deleted task from its current list.
    pub fn apply_deleted(&self, target: &TargetList, id: &TaskId) {
        self.store.remove_item(target, id);
        debug!(id = %id, list = %target, "deleted task removed from store");
    }
}
