//! Request and response types exchanged with the remote agent

use super::identifiers::{AgentAliasId, AgentId, SessionId};

/// One invocation of the remote agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeAgentRequest {
    /// Target agent
    pub agent_id: AgentId,
    /// Target alias
    pub agent_alias_id: AgentAliasId,
    /// Correlation token for this call
    pub session_id: SessionId,
    /// Query text, passed through unchanged
    pub input_text: String,
}

/// One unit of a streamed response
///
/// Fragment boundaries carry no meaning; a single character may be split
/// across two fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFragment {
    /// Raw payload bytes, if the fragment carries any
    pub payload: Option<Vec<u8>>,
}

impl ResponseFragment {
    /// Fragment carrying a payload
    pub fn chunk(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Some(bytes.into()),
        }
    }

    /// Fragment without a payload
    #[must_use]
    pub const fn empty() -> Self {
        Self { payload: None }
    }
}

/// Result of the identity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// ARN of the calling principal
    pub arn: String,
}
