//! Suite driver: runs queries in order and prints a pass/fail summary

use std::io::Write;

use crate::client::{Console, InvocationRunner};
use crate::transport::AgentTransport;
use crate::types::results::SuiteSummary;

/// Built-in queries run when no custom query is given
pub const DEFAULT_QUERIES: [&str; 3] = [
    "What is your purpose and what can you help me with?",
    "What types of synthetic data can you generate?",
    "Explain your capabilities for QA testing.",
];

/// Characters of each query shown in the summary
pub const SUMMARY_QUERY_WIDTH: usize = 60;

/// Run `queries` one after another through `runner`
///
/// Sleeps for the configured inter-query delay between queries, never after
/// the last one. Returns one result per query, in order.
pub async fn run_suite<T, W, Q>(
    runner: &mut InvocationRunner<T, W>,
    queries: &[Q],
) -> SuiteSummary
where
    T: AgentTransport,
    W: Write,
    Q: AsRef<str>,
{
    let console = runner.console_mut();
    console.blank();
    console.heading('=', format_args!("BEDROCK AGENT TEST SUITE"));

    let total = queries.len();
    let delay = runner.config().inter_query_delay;
    let mut summary = SuiteSummary::default();

    for (index, query) in queries.iter().enumerate() {
        let number = index + 1;
        let console = runner.console_mut();
        console.blank();
        console.blank();
        console.heading('#', format_args!("TEST {number} of {total}"));

        log::debug!("Running suite query {number}/{total}");
        let result = runner.invoke(query.as_ref()).await;
        summary.results.push(result);

        if number < total {
            runner.console_mut().blank();
            runner.console_mut().line(format_args!("Waiting before next test..."));
            tokio::time::sleep(delay).await;
        }
    }

    print_summary(runner.console_mut(), &summary);
    summary
}

/// Print per-query status lines and the overall pass count
pub fn print_summary<W: Write>(console: &mut Console<W>, summary: &SuiteSummary) {
    console.blank();
    console.blank();
    console.heading('=', format_args!("TEST SUMMARY"));

    for (index, result) in summary.results.iter().enumerate() {
        let status = if result.success() {
            "✅ PASS"
        } else {
            "❌ FAIL"
        };
        console.blank();
        console.line(format_args!("Test {}: {status}", index + 1));
        console.line(format_args!("  Query: {}...", truncate_query(&result.query)));
        if result.success() {
            console.line(format_args!(
                "  Response Length: {} characters",
                result.response_length()
            ));
        }
    }

    console.blank();
    console.rule('=');
    console.line(format_args!(
        "RESULTS: {}/{} tests passed",
        summary.passed(),
        summary.total()
    ));
    console.rule('=');
    console.blank();
}

/// First [`SUMMARY_QUERY_WIDTH`] characters of a query
#[must_use]
pub fn truncate_query(query: &str) -> &str {
    match query.char_indices().nth(SUMMARY_QUERY_WIDTH) {
        Some((end, _)) => &query[..end],
        None => query,
    }
}
