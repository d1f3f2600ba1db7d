//! Transport layer for communicating with the remote agent
//!
//! This module provides the transport abstraction and the Bedrock
//! implementation. The runner only sees [`AgentTransport`]; the wire protocol
//! stays inside the SDK.

pub mod bedrock;

use std::pin::Pin;

use futures::Stream;

use crate::error::Result;
use crate::types::messages::{CallerIdentity, InvokeAgentRequest, ResponseFragment};

/// Single-pass stream of response fragments
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<ResponseFragment>> + Send>>;

/// Transport trait for talking to a remote agent
pub trait AgentTransport: Send + Sync {
    /// Resolve the identity the transport authenticates as
    ///
    /// # Errors
    /// Returns error if credentials cannot be resolved or are rejected
    fn caller_identity(&self) -> impl std::future::Future<Output = Result<CallerIdentity>> + Send;

    /// Start one invocation and return its response stream
    ///
    /// Errors raised after the call is accepted arrive as items of the
    /// returned stream.
    ///
    /// # Errors
    /// Returns error if the invocation is rejected
    fn invoke_agent(
        &self,
        request: &InvokeAgentRequest,
    ) -> impl std::future::Future<Output = Result<FragmentStream>> + Send;
}

pub use bedrock::BedrockTransport;
