// Bedrock Agent test harness
//
// No arguments runs the built-in suite; any arguments are joined into a single
// custom query. Exits non-zero if any query fails.

use std::process::ExitCode;

use bedrock_agent_tester::cli::{self, Cli};
use bedrock_agent_tester::{AgentConfig, BedrockTransport, InvocationRunner};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let config = AgentConfig::from_env();
    log::debug!("Using {config:?}");

    let transport = BedrockTransport::connect(&config).await;
    let mut runner = InvocationRunner::new(config, transport);

    let success = cli::run(args.mode(), &mut runner).await;
    cli::exit_code(success)
}
