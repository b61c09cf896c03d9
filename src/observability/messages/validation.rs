// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for input validation outcomes.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Input failed validation.
///
/// # Log Level
/// `debug!` - Rejections are an expected outcome, not a failure
///
/// # Example
/// ```
/// use text_helpers::observability::messages::validation::InputRejected;
///
/// let msg = InputRejected {
///     processor_id: "input_validator",
///     reason: "missing '@' marker",
///     input_size: 9,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct InputRejected<'a> {
    pub processor_id: &'a str,
    pub reason: &'a str,
    pub input_size: usize,
}

impl Display for InputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' rejected input ({} bytes): {}",
            self.processor_id, self.input_size, self.reason
        )
    }
}

impl StructuredLog for InputRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            reason = self.reason,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "validation",
            span_name = name,
            processor_id = self.processor_id,
            reason = self.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_rejected_message_text() {
        let msg = InputRejected {
            processor_id: "input_validator",
            reason: "input is empty",
            input_size: 0,
        };
        assert_eq!(
            msg.to_string(),
            "Processor 'input_validator' rejected input (0 bytes): input is empty"
        );
    }
}
