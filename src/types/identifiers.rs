//! Newtype wrappers for type safety
//!
//! This module contains newtype wrappers that keep the agent identifiers and
//! the per-call session token from being mixed up with each other or with
//! query text.

use chrono::{DateTime, TimeZone};

// ============================================================================
// Newtype Wrappers for Type Safety
// ============================================================================

/// Prefix of every generated session ID
pub const SESSION_ID_PREFIX: &str = "test-session-";

/// Session ID newtype
///
/// Only a correlation token sent along with an invocation; nothing is keyed
/// on it locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a session ID from the current local time
    #[must_use]
    pub fn generate() -> Self {
        Self::at(&chrono::Local::now())
    }

    /// Session ID for a given instant, `test-session-YYYYMMDD-HHMMSS`
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self(format!("{SESSION_ID_PREFIX}{}", now.format("%Y%m%d-%H%M%S")))
    }

    /// Get the session ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Agent ID newtype
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentId(String);

impl AgentId {
    /// Create a new agent ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the agent ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Agent alias ID newtype
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentAliasId(String);

impl AgentAliasId {
    /// Create a new agent alias ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the alias ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentAliasId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentAliasId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
