//! Editor state machine for a single task.
//!
//! An editor is opened for one task (or for a new one), accepts toggles and
//! form edits according to its mode, and closes after one successful save or
//! delete. Failed requests leave it open with the input untouched.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use super::{MutationAction, MutationClient, MutationError, StoreReconciler};
use crate::editor::{
    domain::{
        EditorSessionId, PayloadInput, SessionContext, TargetList, TargetMove, Task, TaskFields,
        TaskId, TaskPayload, TaskType, ValidationError, build_delete_payload, build_payload,
    },
    ports::{MutationTransport, TaskStore},
};

/// Whether the task under edit already exists on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSubject {
    /// A task not yet created; its type may still be chosen.
    Draft {
        /// Type currently selected in the editor.
        selected_type: TaskType,
    },
    /// A task the service already holds; its type is fixed.
    Existing {
        /// Server-issued identifier.
        id: TaskId,
        /// Immutable task type.
        task_type: TaskType,
    },
}

impl EditorSubject {
    /// Returns the task identifier for an existing task.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        match self {
            Self::Draft { .. } => None,
            Self::Existing { id, .. } => Some(id),
        }
    }

    /// Returns the selected or fixed task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self {
            Self::Draft { selected_type } => *selected_type,
            Self::Existing { task_type, .. } => *task_type,
        }
    }
}

/// Interaction mode of an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Fields are shown read-only.
    Viewing,
    /// Fields accept input and the form can be saved.
    Editing,
    /// The editor finished; every further action is rejected.
    Closed,
}

/// Result of a successful editor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// A new task was created and added to the store.
    Created(Task),
    /// An existing task was updated, possibly moving lists.
    Updated {
        /// The task as now held by the store.
        task: Task,
        /// The placement change applied to the store.
        placement: TargetMove,
    },
    /// An existing task was deleted and removed from the store.
    Deleted {
        /// Identifier of the deleted task.
        id: TaskId,
        /// List it was removed from.
        target: TargetList,
    },
}

/// Errors returned by editor actions.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Required form fields are empty; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task service request failed; the store is unchanged.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// The task type cannot change once the task exists.
    #[error("task type is fixed once the task exists")]
    TypeLocked,

    /// The editor is in view mode.
    #[error("the editor is in view mode")]
    ReadOnly,

    /// The mark-done toggle is only offered for TODO tasks.
    #[error("mark-done is only available for tasks in the TODO list")]
    MarkDoneUnavailable,

    /// The action needs a task that already exists.
    #[error("the task has not been created yet")]
    NotYetCreated,

    /// The editor has already been closed.
    #[error("the editor has been closed")]
    Closed,
}

/// Result type for editor actions.
pub type EditorResult<T> = Result<T, EditorError>;

/// Shared collaborators used to open editors.
///
/// Hosts build one context per session and open an editor per task.
#[derive(Debug)]
pub struct EditorContext<S, T>
where
    S: TaskStore,
    T: MutationTransport,
{
    session: SessionContext,
    store: Arc<S>,
    transport: Arc<T>,
}

impl<S, T> Clone for EditorContext<S, T>
where
    S: TaskStore,
    T: MutationTransport,
{
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            store: Arc::clone(&self.store),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<S, T> EditorContext<S, T>
where
    S: TaskStore,
    T: MutationTransport,
{
    /// Creates a context from the session identifiers and injected ports.
    #[must_use]
    pub const fn new(session: SessionContext, store: Arc<S>, transport: Arc<T>) -> Self {
        Self {
            session,
            store,
            transport,
        }
    }

    /// Returns the session context attached to every request.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Opens an editor for a new task destined for `target`.
    #[must_use]
    pub fn open_new(&self, target: TargetList, task_type: TaskType) -> TaskEditor<S, T> {
        self.open(
            EditorSubject::Draft {
                selected_type: task_type,
            },
            target,
            TaskFields::default(),
            EditorMode::Editing,
        )
    }

    /// Opens an editor for an existing task, in view mode.
    #[must_use]
    pub fn open_existing(&self, task: &Task) -> TaskEditor<S, T> {
        self.open(
            EditorSubject::Existing {
                id: task.id().clone(),
                task_type: task.task_type(),
            },
            task.target().clone(),
            task.fields().clone(),
            EditorMode::Viewing,
        )
    }

    fn open(
        &self,
        subject: EditorSubject,
        target: TargetList,
        fields: TaskFields,
        mode: EditorMode,
    ) -> TaskEditor<S, T> {
        let editor = TaskEditor {
            session_id: EditorSessionId::new(),
            mark_done: target.is_todo().then_some(false),
            subject,
            target,
            fields,
            mode,
            session: self.session.clone(),
            client: MutationClient::new(Arc::clone(&self.transport)),
            reconciler: StoreReconciler::new(Arc::clone(&self.store)),
        };
        debug!(
            session = %editor.session_id,
            task_id = ?editor.subject.id().map(TaskId::as_str),
            target = %editor.target,
            "task editor opened"
        );
        editor
    }
}

/// Editor for exactly one task.
///
/// Actions take `&mut self`, so a second save cannot start while one is in
/// flight. Dropping a pending action future abandons the request without
/// touching the store.
#[derive(Debug)]
pub struct TaskEditor<S, T>
where
    S: TaskStore,
    T: MutationTransport,
{
    session_id: EditorSessionId,
    subject: EditorSubject,
    target: TargetList,
    fields: TaskFields,
    mode: EditorMode,
    mark_done: Option<bool>,
    session: SessionContext,
    client: MutationClient<T>,
    reconciler: StoreReconciler<S>,
}

impl<S, T> TaskEditor<S, T>
where
    S: TaskStore,
    T: MutationTransport,
{
    /// Returns the identifier correlating this session's log records.
    #[must_use]
    pub const fn session_id(&self) -> EditorSessionId {
        self.session_id
    }

    /// Returns the task subject.
    #[must_use]
    pub const fn subject(&self) -> &EditorSubject {
        &self.subject
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Returns `true` while fields accept input.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self.mode, EditorMode::Editing)
    }

    /// Returns `true` once the editor has closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.mode, EditorMode::Closed)
    }

    /// Returns the selected or fixed task type.
    #[must_use]
    pub const fn selected_type(&self) -> TaskType {
        self.subject.task_type()
    }

    /// Returns the list the task currently belongs to.
    #[must_use]
    pub const fn target(&self) -> &TargetList {
        &self.target
    }

    /// Returns the mark-done toggle, or `None` when it is not offered.
    #[must_use]
    pub const fn mark_done(&self) -> Option<bool> {
        self.mark_done
    }

    /// Returns the current form values.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns `true` when the type toggle is enabled.
    #[must_use]
    pub const fn can_select_type(&self) -> bool {
        self.is_editable() && matches!(self.subject, EditorSubject::Draft { .. })
    }

    /// Returns `true` when the delete control is enabled.
    #[must_use]
    pub const fn can_delete(&self) -> bool {
        !self.is_closed() && self.subject.id().is_some()
    }

    /// Gives mutable access to the form values while editing.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ReadOnly`] in view mode and
    /// [`EditorError::Closed`] after close.
    pub fn fields_mut(&mut self) -> EditorResult<&mut TaskFields> {
        self.ensure_editing()?;
        Ok(&mut self.fields)
    }

    /// Switches an existing task from view mode to edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Closed`] after close.
    pub fn begin_edit(&mut self) -> EditorResult<()> {
        self.ensure_open()?;
        self.mode = EditorMode::Editing;
        Ok(())
    }

    /// Returns an existing task to view mode without saving.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotYetCreated`] for a new task and
    /// [`EditorError::Closed`] after close.
    pub fn finish_edit(&mut self) -> EditorResult<()> {
        self.ensure_open()?;
        if self.subject.id().is_none() {
            return Err(EditorError::NotYetCreated);
        }
        self.mode = EditorMode::Viewing;
        Ok(())
    }

    /// Flips between view and edit mode for an existing task.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_edit`] and [`Self::finish_edit`].
    pub fn toggle_editable(&mut self) -> EditorResult<()> {
        match self.mode {
            EditorMode::Viewing => self.begin_edit(),
            EditorMode::Editing => self.finish_edit(),
            EditorMode::Closed => Err(EditorError::Closed),
        }
    }

    /// Chooses the type of a task that does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TypeLocked`] for an existing task,
    /// [`EditorError::ReadOnly`] in view mode, and [`EditorError::Closed`]
    /// after close.
    pub fn select_type(&mut self, task_type: TaskType) -> EditorResult<()> {
        self.ensure_editing()?;
        match &mut self.subject {
            EditorSubject::Draft { selected_type } => {
                *selected_type = task_type;
                Ok(())
            }
            EditorSubject::Existing { .. } => Err(EditorError::TypeLocked),
        }
    }

    /// Sets the mark-done toggle.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MarkDoneUnavailable`] unless the task is in
    /// the TODO list, [`EditorError::ReadOnly`] in view mode, and
    /// [`EditorError::Closed`] after close.
    pub fn set_mark_done(&mut self, done: bool) -> EditorResult<()> {
        self.ensure_editing()?;
        let toggle = self
            .mark_done
            .as_mut()
            .ok_or(EditorError::MarkDoneUnavailable)?;
        *toggle = done;
        Ok(())
    }

    /// Builds the payload a save would send right now.
    #[must_use]
    pub fn payload(&self) -> TaskPayload {
        build_payload(
            PayloadInput {
                id: self.subject.id(),
                target: &self.target,
                selected_type: self.subject.task_type(),
                mark_done: self.mark_done.unwrap_or(false),
                fields: &self.fields,
            },
            &self.session,
        )
    }

    /// Validates and saves the task, then mirrors the result locally.
    ///
    /// On success the store is reconciled and the editor closes. On failure
    /// the editor stays in edit mode with its input intact.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] without contacting the service,
    /// [`EditorError::Mutation`] when the request fails, or a mode error.
    #[instrument(skip_all, fields(session = %self.session_id))]
    pub async fn submit(&mut self) -> EditorResult<EditorOutcome> {
        self.ensure_editing()?;
        self.fields.validate()?;

        let payload = self.payload();
        let (action, outcome) = match self.subject {
            EditorSubject::Draft { .. } => {
                let accepted = self.client.create(&payload).await?;
                let task = self
                    .reconciler
                    .apply_created(accepted.into_id(), &payload)
                    .into_task();
                (MutationAction::Create, EditorOutcome::Created(task))
            }
            EditorSubject::Existing { .. } => {
                let accepted = self.client.update(&payload).await?;
                let (task, placement) = self
                    .reconciler
                    .apply_updated(&self.target, accepted.into_id(), &payload)
                    .into_parts();
                (
                    MutationAction::Update,
                    EditorOutcome::Updated { task, placement },
                )
            }
        };
        self.mode = EditorMode::Closed;
        info!(action = %action, "task saved");
        Ok(outcome)
    }

    /// Deletes the task and removes it from its current list.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotYetCreated`] for a new task,
    /// [`EditorError::Mutation`] when the request fails, or
    /// [`EditorError::Closed`] after close.
    #[instrument(skip_all, fields(session = %self.session_id))]
    pub async fn delete(&mut self) -> EditorResult<EditorOutcome> {
        self.ensure_open()?;
        let id = self
            .subject
            .id()
            .cloned()
            .ok_or(EditorError::NotYetCreated)?;

        self.client
            .delete(&build_delete_payload(&id, &self.session))
            .await?;
        self.reconciler.apply_deleted(&self.target, &id);
        self.mode = EditorMode::Closed;
        info!(id = %id, "task deleted");
        Ok(EditorOutcome::Deleted {
            id,
            target: self.target.clone(),
        })
    }

    /// Closes the editor without sending anything.
    pub fn close(&mut self) {
        if !self.is_closed() {
            debug!(session = %self.session_id, "task editor closed without saving");
        }
        self.mode = EditorMode::Closed;
    }

    fn ensure_open(&self) -> EditorResult<()> {
        if self.is_closed() {
            return Err(EditorError::Closed);
        }
        Ok(())
    }

    fn ensure_editing(&self) -> EditorResult<()> {
        match self.mode {
            EditorMode::Editing => Ok(()),
            EditorMode::Viewing => Err(EditorError::ReadOnly),
            EditorMode::Closed => Err(EditorError::Closed),
        }
    }
}
