//! Per-invocation results and the suite summary
//!
//! Both live only for the duration of a run.

use super::identifiers::SessionId;
use crate::error::AgentError;

/// Outcome of a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Query text as sent
    pub query: String,
    /// Session ID used for the call
    pub session_id: SessionId,
    /// Full response text, or the failure
    pub outcome: Result<String, AgentError>,
}

impl InvocationResult {
    /// Whether the invocation succeeded
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Response text, absent on failure
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    /// Response length in characters, 0 on failure
    #[must_use]
    pub fn response_length(&self) -> usize {
        self.response_text().map_or(0, |text| text.chars().count())
    }

    /// The failure, if any
    #[must_use]
    pub fn error(&self) -> Option<&AgentError> {
        self.outcome.as_ref().err()
    }
}

/// Ordered results of a suite run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Results in query order
    pub results: Vec<InvocationResult>,
}

impl SuiteSummary {
    /// Number of successful queries
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success()).count()
    }

    /// Number of queries run
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// True iff every query succeeded; vacuously true for an empty run
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(InvocationResult::success)
    }
}
