//! Human-readable report output
//!
//! The report is the tool's only product, but a closed or broken stdout must
//! not turn a passing invocation into a failing one. Write errors are logged
//! and otherwise ignored.

use std::fmt;
use std::io::{self, Write};

/// Width of separator rules
pub const RULE_WIDTH: usize = 80;

/// Line-oriented writer for the test report
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl Console<io::Stdout> {
    /// Console writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Wrap a writer
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one line
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            log::warn!("Failed to write report line: {e}");
        }
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.line(format_args!(""));
    }

    /// Write a separator rule made of `ch`
    pub fn rule(&mut self, ch: char) {
        let rule: String = std::iter::repeat_n(ch, RULE_WIDTH).collect();
        self.line(format_args!("{rule}"));
    }

    /// Write a rule-framed heading
    pub fn heading(&mut self, ch: char, title: fmt::Arguments<'_>) {
        self.rule(ch);
        self.line(title);
        self.rule(ch);
    }

    /// Write streamed text without a newline and flush it immediately
    pub fn stream(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            log::warn!("Failed to write streamed response: {e}");
        }
    }

    /// Get a reference to the underlying writer
    pub const fn get_ref(&self) -> &W {
        &self.out
    }
}
