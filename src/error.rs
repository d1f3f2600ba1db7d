//! Error types for the Bedrock agent tester

use thiserror::Error;

/// Category used for payloads that are not valid UTF-8
pub const DECODE_ERROR_CATEGORY: &str = "UnicodeDecodeError";

/// Coarse failure classification used for user-facing messaging
///
/// All kinds are behaviourally equivalent: the invocation fails and no
/// response text is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The agent or alias does not exist
    NotFound,
    /// The caller identity is not allowed to invoke the agent
    AccessDenied,
    /// Anything else
    Other,
}

/// Main error type for agent invocations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Remote agent identity does not exist
    #[error("Agent not found: {0}")]
    NotFound(String),

    /// Caller lacks permission to invoke the agent
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Any other failure, tagged with its category name
    #[error("{category}: {message}")]
    Other {
        /// Error category (service error code or SDK failure class)
        category: String,
        /// Error message
        message: String,
    },
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

impl AgentError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an access-denied error
    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }

    /// Create an uncategorised error
    pub fn other(category: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Other {
            category: category.into(),
            message: msg.into(),
        }
    }

    /// Create a UTF-8 decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::other(DECODE_ERROR_CATEGORY, msg)
    }

    /// Classify a failure from its service error code
    ///
    /// `code` is the remote error code when the service produced one,
    /// `fallback` names the failure class otherwise.
    pub fn from_code(code: Option<&str>, fallback: &str, msg: impl Into<String>) -> Self {
        match code {
            Some("ResourceNotFoundException") => Self::not_found(msg),
            Some("AccessDeniedException") => Self::access_denied(msg),
            Some(code) => Self::other(code, msg),
            None => Self::other(fallback, msg),
        }
    }

    /// The failure classification
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Human-readable heading for the failure
    #[must_use]
    pub fn headline(&self) -> &str {
        match self {
            Self::NotFound(_) => "Agent not found",
            Self::AccessDenied(_) => "Access denied",
            Self::Other { category, .. } => category,
        }
    }

    /// Detail message without the category prefix
    #[must_use]
    pub fn details(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::AccessDenied(msg) => msg,
            Self::Other { message, .. } => message,
        }
    }
}
