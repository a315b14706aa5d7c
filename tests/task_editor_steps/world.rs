//! Shared world state for task editor BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::ScriptedTransport;
use rstest::fixture;
use taskdesk::editor::{
    adapters::memory::InMemoryTaskStore,
    domain::{SessionContext, Task, TaskId},
    services::{EditorContext, EditorOutcome, EditorResult, TaskEditor},
};

/// Editor type used by the BDD world.
pub type TestEditor = TaskEditor<InMemoryTaskStore, ScriptedTransport>;

/// Scenario world for task editor behaviour tests.
pub struct EditorWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub transport: Arc<ScriptedTransport>,
    pub context: EditorContext<InMemoryTaskStore, ScriptedTransport>,
    pub editor: Option<TestEditor>,
    pub last_result: Option<EditorResult<EditorOutcome>>,
}

impl EditorWorld {
    /// Creates a world with an empty store and no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let transport = Arc::new(ScriptedTransport::with_replies([]));
        let context = EditorContext::new(
            SessionContext::new("project-1", "document-1", "token-abc"),
            Arc::clone(&store),
            Arc::clone(&transport),
        );

        Self {
            store,
            transport,
            context,
            editor: None,
            last_result: None,
        }
    }

    /// Returns the open editor.
    ///
    /// # Errors
    ///
    /// Returns an error when no editor has been opened in the scenario.
    pub fn editor_mut(&mut self) -> Result<&mut TestEditor, eyre::Report> {
        self.editor
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no editor opened in scenario world"))
    }

    /// Finds the stored task with `id` in whichever list holds it.
    ///
    /// # Errors
    ///
    /// Returns an error when the id is invalid or no list holds the task.
    pub fn stored_task(&self, id: &str) -> Result<Task, eyre::Report> {
        let task_id = TaskId::new(id)?;
        self.store
            .lists_containing(&task_id)
            .first()
            .and_then(|list| self.store.get(list, &task_id))
            .ok_or_else(|| eyre::eyre!("task {id} is not in the store"))
    }
}

impl Default for EditorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EditorWorld {
    EditorWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
