//! Ambient session identifiers attached to every mutation request.

use serde::Serialize;
use std::fmt;

/// Read-only identifiers supplied by the surrounding application.
///
/// Values are passed through to the task service untouched. The auth token
/// is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    project_id: String,
    document_id: String,
    auth_token: String,
}

impl SessionContext {
    /// Creates a session context.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        document_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            document_id: document_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the document identifier.
    #[must_use]
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Returns the opaque auth token.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("project_id", &self.project_id)
            .field("document_id", &self.document_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
