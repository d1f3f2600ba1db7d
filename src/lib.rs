//! # Bedrock Agent Tester
//!
//! A small integration-test harness for a deployed Amazon Bedrock Agent. It
//! sends fixed or user-supplied queries to the agent, streams the response
//! text to the terminal and prints a pass/fail summary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bedrock_agent_tester::{AgentConfig, BedrockTransport, InvocationRunner};
//! use bedrock_agent_tester::suite::{DEFAULT_QUERIES, run_suite};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AgentConfig::from_env();
//!     let transport = BedrockTransport::connect(&config).await;
//!     let mut runner = InvocationRunner::new(config, transport);
//!
//!     let summary = run_suite(&mut runner, &DEFAULT_QUERIES).await;
//!     std::process::exit(if summary.all_passed() { 0 } else { 1 });
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`]: Identifiers, configuration, fragments and results
//! - [`transport`]: The [`AgentTransport`] capability and its Bedrock implementation
//! - [`message`]: Incremental UTF-8 assembly of streamed payloads
//! - [`client`]: The [`InvocationRunner`] and its report console
//! - [`suite`]: Sequential suite driver and summary
//! - [`cli`]: Command-line mode selection and exit codes
//! - [`error`]: Error types and handling
//!
//! ## Error Handling
//!
//! Transport operations return [`Result<T, AgentError>`](Result). The runner
//! never propagates them: a failed query becomes an [`InvocationResult`] whose
//! outcome holds the error, classified as not-found, access-denied or other.
//!
//! ```no_run
//! # use bedrock_agent_tester::{AgentError, InvocationResult};
//! # fn example(result: InvocationResult) {
//! match result.error() {
//!     None => log::info!("{} characters", result.response_length()),
//!     Some(AgentError::AccessDenied(msg)) => log::error!("Not allowed: {msg}"),
//!     Some(e) => log::error!("Error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod client;
pub mod error;
pub mod message;
pub mod suite;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use client::{Console, InvocationRunner};
pub use error::{AgentError, ErrorKind, Result};
pub use message::ResponseAccumulator;
pub use transport::{AgentTransport, BedrockTransport, FragmentStream};

pub use types::identifiers::{AgentAliasId, AgentId, SessionId};
pub use types::messages::{CallerIdentity, InvokeAgentRequest, ResponseFragment};
pub use types::options::{AgentConfig, AgentConfigBuilder};
pub use types::results::{InvocationResult, SuiteSummary};
