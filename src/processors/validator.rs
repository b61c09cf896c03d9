// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::INPUT_MARKER;
use crate::observability::messages::{validation::InputRejected, StructuredLog};
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::processors::execute_text;
use crate::traits::{Processor, ProcessorIntent};

/// Validate input data.
///
/// Input is valid when it is non-empty and contains the `@` marker.
/// The marker is necessary, not sufficient: this is not an address check.
///
/// # Example
/// ```
/// use text_helpers::validate_input;
///
/// assert!(validate_input("user@example.com"));
/// assert!(!validate_input(""));
/// assert!(!validate_input("no-marker"));
/// ```
pub fn validate_input(data: &str) -> bool {
    rejection_reason(data).is_none()
}

/// Why `data` fails validation, or `None` if it passes.
///
/// Emptiness is checked first.
fn rejection_reason(data: &str) -> Option<&'static str> {
    if data.is_empty() {
        return Some("input is empty");
    }
    if !data.contains(INPUT_MARKER) {
        return Some("missing '@' marker");
    }
    None
}

/// Input Validator processor - reports validity in metadata, payload unchanged
pub struct InputValidatorProcessor;

impl InputValidatorProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InputValidatorProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for InputValidatorProcessor {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        execute_text(self.name(), req, |input| {
            let reason = rejection_reason(&input);

            if let Some(reason) = reason {
                InputRejected {
                    processor_id: self.name(),
                    reason,
                    input_size: input.len(),
                }
                .log();
            }

            let valid = reason.is_none();
            let response = ProcessorResponse::next_payload(input.into_bytes())
                .with_metadata("valid", valid.to_string());

            match reason {
                Some(reason) => response.with_metadata("reason", reason),
                None => response,
            }
        })
    }

    fn name(&self) -> &'static str {
        "input_validator"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}
