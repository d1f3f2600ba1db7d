//! Amazon Bedrock Agent Runtime transport
//!
//! Wraps the AWS SDK clients for the agent runtime and STS behind
//! [`AgentTransport`]. Credentials come from the configured profile; the SDK
//! owns retries, timeouts and event-stream framing.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockagentruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockagentruntime::types::ResponseStream;

use super::{AgentTransport, FragmentStream};
use crate::error::{AgentError, Result};
use crate::types::messages::{CallerIdentity, InvokeAgentRequest, ResponseFragment};
use crate::types::options::AgentConfig;

/// Transport backed by the Bedrock Agent Runtime service
#[derive(Debug, Clone)]
pub struct BedrockTransport {
    agent: aws_sdk_bedrockagentruntime::Client,
    sts: aws_sdk_sts::Client,
}

impl BedrockTransport {
    /// Build the SDK clients for the configured profile and region
    ///
    /// Credential problems surface on the first call, not here.
    pub async fn connect(config: &AgentConfig) -> Self {
        log::debug!(
            "Loading AWS config: profile={} region={}",
            config.profile,
            config.region
        );
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&config.profile)
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            agent: aws_sdk_bedrockagentruntime::Client::new(&shared_config),
            sts: aws_sdk_sts::Client::new(&shared_config),
        }
    }
}

impl AgentTransport for BedrockTransport {
    async fn caller_identity(&self) -> Result<CallerIdentity> {
        let output = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))?;

        let arn = output
            .arn()
            .ok_or_else(|| AgentError::other("MissingArn", "identity response carried no ARN"))?;
        Ok(CallerIdentity {
            arn: arn.to_string(),
        })
    }

    async fn invoke_agent(&self, request: &InvokeAgentRequest) -> Result<FragmentStream> {
        let output = self
            .agent
            .invoke_agent()
            .agent_id(request.agent_id.as_str())
            .agent_alias_id(request.agent_alias_id.as_str())
            .session_id(request.session_id.as_str())
            .input_text(&request.input_text)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))?;

        let mut completion = output.completion;
        let stream = async_stream::try_stream! {
            while let Some(event) = completion.recv().await.map_err(|e| classify_sdk_error(&e))? {
                yield fragment_from_event(event);
            }
        };
        Ok(Box::pin(stream))
    }
}

/// Map a stream event to a fragment; only chunks carry text
fn fragment_from_event(event: ResponseStream) -> ResponseFragment {
    match event {
        ResponseStream::Chunk(part) => ResponseFragment {
            payload: part.bytes().map(|blob| blob.as_ref().to_vec()),
        },
        other => {
            log::trace!("Ignoring non-chunk event: {other:?}");
            ResponseFragment::empty()
        }
    }
}

/// Classify an SDK failure by its service error code
///
/// Works for any operation's error type, so the identity check and the
/// response stream share it with the invocation itself.
fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> AgentError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let fallback = match err {
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::TimeoutError(_) => "TimeoutError",
        SdkError::DispatchFailure(_) => "DispatchFailure",
        SdkError::ResponseError(_) => "ResponseError",
        SdkError::ServiceError(_) => "ServiceError",
        _ => "SdkError",
    };
    let service_error = err.as_service_error();
    let message = service_error
        .and_then(ProvideErrorMetadata::message)
        .map_or_else(|| DisplayErrorContext(err).to_string(), str::to_string);

    AgentError::from_code(
        service_error.and_then(ProvideErrorMetadata::code),
        fallback,
        message,
    )
}
