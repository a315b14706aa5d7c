//! In-memory task store grouped by target list.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::editor::{
    domain::{TargetList, Task, TaskId},
    ports::TaskStore,
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    lists: HashMap<TargetList, BTreeMap<TaskId, Task>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `tasks`, each under its own target.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let store = Self::new();
        for task in tasks {
            store.add_item(task.target(), task.id(), &task);
        }
        store
    }

    /// Returns the tasks stored under `list`, ordered by identifier.
    #[must_use]
    pub fn items(&self, list: &TargetList) -> Vec<Task> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .lists
            .get(list)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the task stored under `list` with `id`.
    #[must_use]
    pub fn get(&self, list: &TargetList, id: &TaskId) -> Option<Task> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.lists.get(list).and_then(|items| items.get(id)).cloned()
    }

    /// Returns every list currently holding `id`.
    #[must_use]
    pub fn lists_containing(&self, id: &TaskId) -> Vec<TargetList> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut lists: Vec<TargetList> = state
            .lists
            .iter()
            .filter(|(_, items)| items.contains_key(id))
            .map(|(list, _)| list.clone())
            .collect();
        lists.sort();
        lists
    }

    /// Returns a deterministic copy of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<TargetList, Vec<Task>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .lists
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(list, items)| (list.clone(), items.values().cloned().collect()))
            .collect()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add_item(&self, list: &TargetList, id: &TaskId, data: &Task) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        trace!(list = %list, id = %id, "store add");
        state
            .lists
            .entry(list.clone())
            .or_default()
            .insert(id.clone(), data.clone());
    }

    fn remove_item(&self, list: &TargetList, id: &TaskId) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        trace!(list = %list, id = %id, "store remove");
        if let Some(items) = state.lists.get_mut(list) {
            items.remove(id);
            if items.is_empty() {
                state.lists.remove(list);
            }
        }
    }
}
