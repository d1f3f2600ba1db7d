//! Command-line surface
//!
//! Trailing arguments, if any, are joined with single spaces into one custom
//! query. Without arguments the built-in suite runs. There are no flags:
//! `--help` or `-V` are query words like any other. A leading `--` is the
//! usual end-of-options marker and is not sent.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::client::InvocationRunner;
use crate::suite::{DEFAULT_QUERIES, run_suite};
use crate::transport::AgentTransport;

/// Test a deployed Bedrock Agent with built-in or custom queries
#[derive(Debug, Parser)]
#[command(
    name = "bedrock-agent-tester",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Custom query; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

/// What a run does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the built-in suite
    Suite,
    /// Run one custom query
    Single(String),
}

impl Cli {
    /// Select the run mode from the trailing arguments
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.query.is_empty() {
            Mode::Suite
        } else {
            Mode::Single(self.query.join(" "))
        }
    }
}

/// Execute `mode` and report whether everything passed
pub async fn run<T, W>(mode: Mode, runner: &mut InvocationRunner<T, W>) -> bool
where
    T: AgentTransport,
    W: Write,
{
    match mode {
        Mode::Single(query) => runner.invoke(&query).await.success(),
        Mode::Suite => run_suite(runner, &DEFAULT_QUERIES).await.all_passed(),
    }
}

/// Process exit code for an overall outcome
#[must_use]
pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
