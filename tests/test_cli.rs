//! Integration tests for the command-line surface

mod common;

use bedrock_agent_tester::cli::{self, Cli, Mode};
use clap::Parser;
use common::{Script, runner};
use std::process::ExitCode;

#[test]
fn test_no_arguments_selects_suite() {
    let args = Cli::try_parse_from(["bedrock-agent-tester"]).unwrap();
    assert_eq!(args.mode(), Mode::Suite);
}

#[test]
fn test_arguments_are_joined_with_spaces() {
    let args = Cli::try_parse_from(["bedrock-agent-tester", "hello", "world"]).unwrap();
    assert_eq!(args.mode(), Mode::Single("hello world".to_string()));
}

#[test]
fn test_hyphenated_words_belong_to_the_query() {
    let args = Cli::try_parse_from(["bedrock-agent-tester", "explain", "-v", "flags"]).unwrap();
    assert_eq!(args.mode(), Mode::Single("explain -v flags".to_string()));

    for word in ["--help", "-h", "--version", "-V"] {
        let args = Cli::try_parse_from(["bedrock-agent-tester", word, "me"]).unwrap();
        assert_eq!(args.mode(), Mode::Single(format!("{word} me")));
    }
}

#[test]
fn test_leading_double_dash_ends_options() {
    let args = Cli::try_parse_from(["bedrock-agent-tester", "--", "me"]).unwrap();
    assert_eq!(args.mode(), Mode::Single("me".to_string()));
}

#[tokio::test]
async fn test_single_mode_invokes_once() {
    let mut runner = runner(vec![Script::chunks(&["hi"]), Script::chunks(&["extra"])]);
    let args = Cli::try_parse_from(["bedrock-agent-tester", "hello", "world"]).unwrap();

    let success = cli::run(args.mode(), &mut runner).await;

    assert!(success);
    let requests = runner.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].input_text, "hello world");
}

#[tokio::test]
async fn test_single_mode_failure() {
    let mut runner = runner(vec![Script::Reject(
        bedrock_agent_tester::AgentError::not_found("missing"),
    )]);

    let success = cli::run(Mode::Single("hello".to_string()), &mut runner).await;

    assert!(!success);
}

#[tokio::test]
async fn test_suite_mode_runs_builtin_queries() {
    let mut runner = runner(vec![
        Script::chunks(&["1"]),
        Script::chunks(&["2"]),
        Script::chunks(&["3"]),
    ]);

    let success = cli::run(Mode::Suite, &mut runner).await;

    assert!(success);
    let inputs: Vec<_> = runner
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.input_text)
        .collect();
    assert_eq!(inputs, bedrock_agent_tester::suite::DEFAULT_QUERIES);
}

#[test]
fn test_exit_codes() {
    assert_eq!(cli::exit_code(true), ExitCode::SUCCESS);
    assert_eq!(cli::exit_code(false), ExitCode::FAILURE);
}
