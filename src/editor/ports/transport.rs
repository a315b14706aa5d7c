//! Transport port for the remote task service.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// HTTP method of a mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationMethod {
    /// Creates a task.
    Post,
    /// Modifies a task.
    Patch,
    /// Removes a task.
    Delete,
}

impl MutationMethod {
    /// Returns the HTTP method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for MutationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends one JSON request to the task service and returns its JSON reply.
#[async_trait]
pub trait MutationTransport: Send + Sync {
    /// Sends `body` with `method` to the task endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] when the request cannot be sent
    /// and [`TransportError::Decode`] when the reply is not JSON.
    async fn send(&self, method: MutationMethod, body: Value) -> TransportResult<Value>;
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("task service request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// The response could not be decoded.
    #[error("task service response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a request failure.
    #[must_use]
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    #[must_use]
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
