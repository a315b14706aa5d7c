//! Mutation client for the remote task service.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::editor::{
    domain::{DeletePayload, TaskId, TaskPayload, build_delete_payload},
    ports::{MutationMethod, MutationTransport, TransportError},
};

/// Kind of mutation sent to the task service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationAction {
    /// Creates a new task.
    Create,
    /// Modifies an existing task.
    Update,
    /// Removes an existing task.
    Delete,
}

impl MutationAction {
    /// Returns the HTTP method used for the action.
    #[must_use]
    pub const fn method(self) -> MutationMethod {
        match self {
            Self::Create => MutationMethod::Post,
            Self::Update => MutationMethod::Patch,
            Self::Delete => MutationMethod::Delete,
        }
    }

    /// Returns the lowercase action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutation accepted by the task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedMutation {
    id: TaskId,
}

impl AcceptedMutation {
    /// Identifier of the affected task; server-issued for creations.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Consumes the acceptance and returns the task identifier.
    #[must_use]
    pub fn into_id(self) -> TaskId {
        self.id
    }
}

/// Failure of a mutation request.
///
/// Every variant leaves local state untouched.
#[derive(Debug, Error)]
pub enum MutationError {
    /// The request could not be sent or its reply could not be decoded.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service replied without `success: true`.
    #[error("task service rejected the {0} request")]
    Rejected(MutationAction),

    /// The service accepted a creation without issuing an identifier.
    #[error("task service accepted the create request without an identifier")]
    MissingIssuedId,

    /// The action needs an existing task identifier the payload lacks.
    #[error("{0} request requires an existing task identifier")]
    MissingTaskId(MutationAction),
}

/// Result type for mutation client operations.
pub type MutationResult<T> = Result<T, MutationError>;

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    id: Option<Value>,
}

impl MutationResponse {
    fn issued_id(self) -> Option<TaskId> {
        let raw = match self.id? {
            Value::String(raw) => raw,
            Value::Number(raw) => raw.to_string(),
            _ => return None,
        };
        TaskId::new(raw).ok()
    }
}

/// Sends one create, update, or delete request per call.
///
/// Transport failures and rejections collapse into [`MutationError`]; there
/// are no retries.
#[derive(Debug)]
pub struct MutationClient<T>
where
    T: MutationTransport,
{
    transport: Arc<T>,
}

impl<T> Clone for MutationClient<T>
where
    T: MutationTransport,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> MutationClient<T>
where
    T: MutationTransport,
{
    /// Creates a client over `transport`.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Sends `payload` as the given action.
    ///
    /// Delete sends only the identifying fields of `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError`] when the request fails, the service rejects
    /// it, or an update/delete payload has no task identifier.
    pub async fn submit(
        &self,
        action: MutationAction,
        payload: &TaskPayload,
    ) -> MutationResult<AcceptedMutation> {
        match action {
            MutationAction::Create => self.create(payload).await,
            MutationAction::Update => self.update(payload).await,
            MutationAction::Delete => {
                let id = payload.id().ok_or(MutationError::MissingTaskId(action))?;
                self.delete(&build_delete_payload(id, payload.session()))
                    .await
            }
        }
    }

    /// Creates a task and returns the server-issued identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::MissingIssuedId`] when the service accepts
    /// the request without an identifier, or any dispatch failure.
    pub async fn create(&self, payload: &TaskPayload) -> MutationResult<AcceptedMutation> {
        let response = self.dispatch(MutationAction::Create, payload).await?;
        let id = response.issued_id().ok_or_else(|| {
            warn!("task service accepted create without an identifier");
            MutationError::MissingIssuedId
        })?;
        Ok(AcceptedMutation { id })
    }

    /// Updates the task identified by the payload.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::MissingTaskId`] without sending anything when
    /// the payload has no identifier, or any dispatch failure.
    pub async fn update(&self, payload: &TaskPayload) -> MutationResult<AcceptedMutation> {
        let id = payload
            .id()
            .cloned()
            .ok_or(MutationError::MissingTaskId(MutationAction::Update))?;
        self.dispatch(MutationAction::Update, payload).await?;
        Ok(AcceptedMutation { id })
    }

    /// Deletes the task identified by the payload.
    ///
    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn delete(&self, payload: &DeletePayload) -> MutationResult<AcceptedMutation> {
        self.dispatch(MutationAction::Delete, payload).await?;
        Ok(AcceptedMutation {
            id: payload.id().clone(),
        })
    }

    async fn dispatch<B>(&self, action: MutationAction, body: &B) -> MutationResult<MutationResponse>
    where
        B: Serialize + Sync,
    {
        let result = self.exchange(action, body).await;
        match &result {
            Ok(_) => debug!(action = %action, "task mutation accepted"),
            Err(err) => warn!(action = %action, error = %err, "task mutation failed"),
        }
        result
    }

    async fn exchange<B>(&self, action: MutationAction, body: &B) -> MutationResult<MutationResponse>
    where
        B: Serialize + Sync,
    {
        let encoded = serde_json::to_value(body).map_err(TransportError::request)?;
        let raw = self.transport.send(action.method(), encoded).await?;
        let response: MutationResponse =
            serde_json::from_value(raw).map_err(TransportError::decode)?;
        if response.success != Some(true) {
            return Err(MutationError::Rejected(action));
        }
        Ok(response)
    }
}
