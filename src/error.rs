use thiserror::Error;

/// Fatal pre-flight error: the run cannot start.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigurationError(pub String);

impl ConfigurationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors returned by a backend session.
///
/// Resource-specific variants carry the name of the thing that was being
/// looked up so the failure can be reported without extra context.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{method} {endpoint} returned {status}: {body}")]
    Status {
        method: &'static str,
        endpoint: String,
        status: u16,
        body: String,
    },

    /// A project with this name already exists and the policy forbids reuse
    #[error("project '{0}' already exists")]
    ProjectExists(String),

    #[error("template '{0}' not found on backend")]
    TemplateNotFound(String),

    #[error("node '{0}' not found in project")]
    NodeNotFound(String),

    #[error("node '{0}' already exists in project")]
    DuplicateNode(String),

    #[error("port '{port}' not found on node '{node}'")]
    PortNotFound { node: String, port: String },

    /// A link endpoint was not created by this build
    #[error("link endpoint '{0}' was not created")]
    EndpointMissing(String),
}

impl BackendError {
    /// True when the backend reported a 409 Conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, BackendError::Status { status: 409, .. })
    }
}
