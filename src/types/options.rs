//! Agent configuration
//!
//! The target agent is fixed at compile time; only the credentials profile
//! can be overridden from the environment. Tests build their own
//! configuration through [`AgentConfig::builder`].

use std::time::Duration;

use super::identifiers::{AgentAliasId, AgentId};

/// Agent the tester talks to
pub const DEFAULT_AGENT_ID: &str = "NVWOHTF4ZZ";

/// Alias of the agent deployment
pub const DEFAULT_AGENT_ALIAS_ID: &str = "YIQDRAV17J";

/// Region the agent is deployed in
pub const DEFAULT_REGION: &str = "us-east-1";

/// Credentials profile used when `AWS_PROFILE` is unset
pub const DEFAULT_PROFILE: &str = "bedrock-test";

/// Environment variable overriding the credentials profile
pub const PROFILE_ENV_VAR: &str = "AWS_PROFILE";

/// Pause between consecutive suite queries
pub const DEFAULT_INTER_QUERY_DELAY: Duration = Duration::from_secs(2);

// ============================================================================
// Agent Configuration
// ============================================================================

/// Immutable configuration for the invocation runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Remote agent identifier
    pub agent_id: AgentId,
    /// Agent alias identifier
    pub agent_alias_id: AgentAliasId,
    /// AWS region
    pub region: String,
    /// Credentials profile name
    pub profile: String,
    /// Pause between suite queries
    pub inter_query_delay: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_id: AgentId::new(DEFAULT_AGENT_ID),
            agent_alias_id: AgentAliasId::new(DEFAULT_AGENT_ALIAS_ID),
            region: DEFAULT_REGION.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            inter_query_delay: DEFAULT_INTER_QUERY_DELAY,
        }
    }
}

impl AgentConfig {
    /// Create a new builder for `AgentConfig`
    #[must_use]
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }

    /// Built-in configuration with the profile taken from `AWS_PROFILE`
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_profile_override(std::env::var(PROFILE_ENV_VAR).ok())
    }

    /// Built-in configuration, optionally replacing the profile
    ///
    /// An empty override counts as unset.
    #[must_use]
    pub fn with_profile_override(profile: Option<String>) -> Self {
        let mut builder = Self::builder();
        if let Some(profile) = profile.filter(|p| !p.is_empty()) {
            builder = builder.profile(profile);
        }
        builder.build()
    }
}

// ============================================================================
// Builder for AgentConfig
// ============================================================================

/// Builder for `AgentConfig`
#[derive(Debug, Default)]
pub struct AgentConfigBuilder {
    config: AgentConfig,
}

impl AgentConfigBuilder {
    /// Set the agent ID
    #[must_use]
    pub fn agent_id(mut self, id: impl Into<AgentId>) -> Self {
        self.config.agent_id = id.into();
        self
    }

    /// Set the agent alias ID
    #[must_use]
    pub fn agent_alias_id(mut self, id: impl Into<AgentAliasId>) -> Self {
        self.config.agent_alias_id = id.into();
        self
    }

    /// Set the region
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the credentials profile
    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.profile = profile.into();
        self
    }

    /// Set the pause between suite queries
    #[must_use]
    pub const fn inter_query_delay(mut self, delay: Duration) -> Self {
        self.config.inter_query_delay = delay;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> AgentConfig {
        self.config
    }
}
