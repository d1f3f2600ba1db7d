//! Scripted in-memory transport shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use bedrock_agent_tester::{
    AgentConfig, AgentError, AgentTransport, CallerIdentity, Console, FragmentStream,
    InvocationRunner, InvokeAgentRequest, ResponseFragment, Result,
};

pub const TEST_ARN: &str = "arn:aws:iam::123456789012:user/tester";

/// What the transport does for one invocation
pub enum Script {
    /// Reject the call before any fragment arrives
    Reject(AgentError),
    /// Accept the call and yield these items in order
    Stream(Vec<Result<ResponseFragment>>),
}

impl Script {
    /// Stream of text chunks
    pub fn chunks(parts: &[&str]) -> Self {
        Self::Stream(
            parts
                .iter()
                .map(|p| Ok(ResponseFragment::chunk(p.as_bytes())))
                .collect(),
        )
    }
}

/// Transport replaying one script per invocation and recording requests
pub struct ScriptedTransport {
    identity: Result<CallerIdentity>,
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<InvokeAgentRequest>>,
}

impl ScriptedTransport {
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            identity: Ok(CallerIdentity {
                arn: TEST_ARN.to_string(),
            }),
            scripts: Mutex::new(scripts.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_identity_error(mut self, error: AgentError) -> Self {
        self.identity = Err(error);
        self
    }

    pub fn requests(&self) -> Vec<InvokeAgentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl AgentTransport for ScriptedTransport {
    async fn caller_identity(&self) -> Result<CallerIdentity> {
        self.identity.clone()
    }

    async fn invoke_agent(&self, request: &InvokeAgentRequest) -> Result<FragmentStream> {
        self.requests.lock().unwrap().push(request.clone());
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Script::Stream(Vec::new()));
        match script {
            Script::Reject(error) => Err(error),
            Script::Stream(items) => Ok(Box::pin(futures::stream::iter(items))),
        }
    }
}

/// Configuration with test identifiers and no inter-query pause
pub fn test_config() -> AgentConfig {
    AgentConfig::builder()
        .agent_id("TESTAGENT1")
        .agent_alias_id("TESTALIAS1")
        .region("eu-west-1")
        .profile("unit-test")
        .inter_query_delay(std::time::Duration::ZERO)
        .build()
}

/// Runner over a scripted transport, capturing its report in memory
pub fn runner(scripts: Vec<Script>) -> InvocationRunner<ScriptedTransport, Vec<u8>> {
    runner_with(ScriptedTransport::new(scripts))
}

pub fn runner_with(transport: ScriptedTransport) -> InvocationRunner<ScriptedTransport, Vec<u8>> {
    runner_with_config(test_config(), transport)
}

pub fn runner_with_config(
    config: AgentConfig,
    transport: ScriptedTransport,
) -> InvocationRunner<ScriptedTransport, Vec<u8>> {
    let _ = env_logger::builder().is_test(true).try_init();
    InvocationRunner::with_console(config, transport, Console::new(Vec::new()))
}

/// Everything the runner printed so far
pub fn output(runner: &InvocationRunner<ScriptedTransport, Vec<u8>>) -> String {
    String::from_utf8_lossy(runner.console().get_ref()).into_owned()
}
