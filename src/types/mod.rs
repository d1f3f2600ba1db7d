//! Type definitions for the Bedrock agent tester
//!
//! - [`identifiers`] - Type-safe ID wrappers (`SessionId`, `AgentId`, `AgentAliasId`)
//! - [`options`] - Agent configuration and its builder
//! - [`messages`] - Request, fragment and identity types
//! - [`results`] - Invocation results and the suite summary

pub mod identifiers;
pub mod messages;
pub mod options;
pub mod results;

pub use identifiers::{AgentAliasId, AgentId, SessionId};
pub use messages::{CallerIdentity, InvokeAgentRequest, ResponseFragment};
pub use options::{AgentConfig, AgentConfigBuilder};
pub use results::{InvocationResult, SuiteSummary};
