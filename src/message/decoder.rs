//! Incremental UTF-8 assembly of streamed payloads

use crate::error::{AgentError, Result};

/// Accumulates fragment payloads into the response text
///
/// A multi-byte sequence cut by a fragment boundary is held back until the
/// rest of it arrives.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    text: String,
    pending: Vec<u8>,
    fragments: usize,
}

impl ResponseAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            pending: Vec::new(),
            fragments: 0,
        }
    }

    /// Append a payload, returning the text it completed
    ///
    /// # Errors
    /// Returns a decode error if the bytes are not valid UTF-8
    pub fn push(&mut self, bytes: &[u8]) -> Result<&str> {
        self.fragments += 1;
        self.pending.extend_from_slice(bytes);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // Truncated sequence at the end: keep it for the next fragment
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => {
                return Err(AgentError::decode(format!(
                    "invalid utf-8 in fragment {}: {e}",
                    self.fragments
                )));
            }
        };

        let start = self.text.len();
        let tail = self.pending.split_off(valid);
        let complete = std::mem::replace(&mut self.pending, tail);
        let decoded = String::from_utf8(complete)
            .map_err(|e| AgentError::decode(format!("invalid utf-8: {e}")))?;
        self.text.push_str(&decoded);
        Ok(&self.text[start..])
    }

    /// Number of payloads pushed so far
    #[must_use]
    pub const fn fragments(&self) -> usize {
        self.fragments
    }

    /// Finish the stream and return the complete text
    ///
    /// # Errors
    /// Returns a decode error if the stream ended inside a multi-byte sequence
    pub fn finish(self) -> Result<String> {
        if self.pending.is_empty() {
            Ok(self.text)
        } else {
            Err(AgentError::decode(format!(
                "stream ended inside a utf-8 sequence ({} dangling bytes)",
                self.pending.len()
            )))
        }
    }
}
