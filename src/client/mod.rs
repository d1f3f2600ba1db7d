//! `InvocationRunner` for single agent invocations
//!
//! The runner performs one query end to end:
//! - checks which identity the transport authenticates as
//! - invokes the agent with a fresh session ID
//! - streams the decoded response to the console while accumulating it
//! - converts every failure into a failed [`InvocationResult`]
//!
//! # Example
//!
//! ```no_run
//! use bedrock_agent_tester::{AgentConfig, BedrockTransport, InvocationRunner};
//!
//! # async fn example() {
//! let config = AgentConfig::from_env();
//! let transport = BedrockTransport::connect(&config).await;
//! let mut runner = InvocationRunner::new(config, transport);
//!
//! let result = runner.invoke("What can you help me with?").await;
//! if let Some(text) = result.response_text() {
//!     log::info!("Agent answered with {} characters", text.chars().count());
//! }
//! # }
//! ```

mod console;

pub use console::{Console, RULE_WIDTH};

use std::io::{self, Write};

use futures::StreamExt;

use crate::error::{AgentError, ErrorKind, Result};
use crate::message::ResponseAccumulator;
use crate::transport::AgentTransport;
use crate::types::identifiers::SessionId;
use crate::types::messages::InvokeAgentRequest;
use crate::types::options::AgentConfig;
use crate::types::results::InvocationResult;

/// IAM action that must be granted to the caller
pub const INVOKE_AGENT_ACTION: &str = "bedrock-agent-runtime:InvokeAgent";

/// Runs queries against a remote agent and reports them on a console
pub struct InvocationRunner<T, W = io::Stdout> {
    /// Immutable target configuration
    config: AgentConfig,
    /// Remote agent capability
    transport: T,
    /// Report output
    console: Console<W>,
}

impl<T: AgentTransport> InvocationRunner<T> {
    /// Create a runner reporting to standard output
    pub fn new(config: AgentConfig, transport: T) -> Self {
        Self::with_console(config, transport, Console::stdout())
    }
}

impl<T: AgentTransport, W: Write> InvocationRunner<T, W> {
    /// Create a runner reporting to the given console
    pub const fn with_console(config: AgentConfig, transport: T, console: Console<W>) -> Self {
        Self {
            config,
            transport,
            console,
        }
    }

    /// The runner's configuration
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The report console
    pub const fn console(&self) -> &Console<W> {
        &self.console
    }

    /// Mutable access to the report console
    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    /// Invoke the agent once with `query`
    ///
    /// Never fails: errors are reported on the console and returned inside the
    /// result. Partial response text is discarded on error. Empty queries are
    /// sent as-is.
    pub async fn invoke(&mut self, query: &str) -> InvocationResult {
        self.print_banner();

        let session_id = SessionId::generate();
        let outcome = self.try_invoke(query, &session_id).await;
        match &outcome {
            Ok(text) => self.print_metadata(&session_id, text),
            Err(e) => self.print_failure(e),
        }

        InvocationResult {
            query: query.to_string(),
            session_id,
            outcome,
        }
    }

    async fn try_invoke(&mut self, query: &str, session_id: &SessionId) -> Result<String> {
        let identity = self.transport.caller_identity().await?;
        log::debug!("Authenticated as {}", identity.arn);
        self.console.line(format_args!("Using AWS Identity: {}", identity.arn));
        self.console.blank();

        self.console.line(format_args!("Query: {query}"));
        self.console.line(format_args!("Session ID: {session_id}"));
        self.console.blank();
        self.console.line(format_args!("Agent Response:"));
        self.console.rule('-');

        let request = InvokeAgentRequest {
            agent_id: self.config.agent_id.clone(),
            agent_alias_id: self.config.agent_alias_id.clone(),
            session_id: session_id.clone(),
            input_text: query.to_string(),
        };
        let mut stream = self.transport.invoke_agent(&request).await?;

        let mut accumulator = ResponseAccumulator::new();
        while let Some(fragment) = stream.next().await {
            let Some(payload) = fragment?.payload else {
                log::trace!("Fragment without payload");
                continue;
            };
            let text = accumulator.push(&payload)?;
            self.console.stream(text);
        }
        log::debug!(
            "Stream for {session_id} finished after {} payload fragments",
            accumulator.fragments()
        );
        let text = accumulator.finish()?;

        self.console.blank();
        self.console.rule('-');
        Ok(text)
    }

    fn print_banner(&mut self) {
        self.console.blank();
        self.console.rule('=');
        self.console.line(format_args!("Testing Bedrock Agent: {}", self.config.agent_id));
        self.console.line(format_args!("Agent Alias: {}", self.config.agent_alias_id));
        self.console.line(format_args!("Region: {}", self.config.region));
        self.console.line(format_args!("AWS Profile: {}", self.config.profile));
        self.console.rule('=');
        self.console.blank();
    }

    fn print_metadata(&mut self, session_id: &SessionId, text: &str) {
        self.console.blank();
        self.console.heading('=', format_args!("Response Metadata:"));
        self.console.line(format_args!("Session ID: {session_id}"));
        self.console.line(format_args!(
            "Response Length: {} characters",
            text.chars().count()
        ));
        self.console.line(format_args!("Status: Success"));
    }

    fn print_failure(&mut self, error: &AgentError) {
        log::error!("Agent invocation failed: {error}");
        self.console.blank();
        self.console.line(format_args!("❌ ERROR: {}", error.headline()));
        self.console.line(format_args!("Details: {}", error.details()));
        if error.kind() == ErrorKind::AccessDenied {
            self.console.blank();
            self.console.line(format_args!(
                "Check IAM permissions for {INVOKE_AGENT_ACTION}"
            ));
        }
    }
}
