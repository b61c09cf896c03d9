// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod data_processor;
pub mod factory;
pub mod formatter;
pub mod validator;


pub use data_processor::DataProcessor;
pub use factory::LocalProcessorFactory;
pub use formatter::{format_output, OutputFormatterProcessor};
pub use validator::{validate_input, InputValidatorProcessor};

use std::time::Instant;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::payload::{decode_payload, Outcome, ProcessorRequest, ProcessorResponse};

/// Run a text operation behind the byte-payload boundary.
///
/// Decodes the payload, hands the text to `op`, and logs the execution
/// lifecycle. A payload that is not UTF-8 never reaches `op`; it becomes
/// an error response instead.
pub(crate) fn execute_text<F>(processor_id: &str, req: ProcessorRequest, op: F) -> ProcessorResponse
where
    F: FnOnce(String) -> ProcessorResponse,
{
    let start_msg = ProcessorExecutionStarted {
        processor_id,
        input_size: req.payload.len(),
    };

    let span = start_msg.span("processor_execution");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();

    let input = match decode_payload(req.payload) {
        Ok(text) => text,
        Err(e) => {
            ProcessorExecutionFailed {
                processor_id,
                error: &e,
            }
            .log();
            return ProcessorResponse::from_error(&e);
        }
    };

    let response = op(input);

    let output_size = match &response.outcome {
        Some(Outcome::NextPayload(payload)) => payload.len(),
        _ => 0,
    };

    ProcessorExecutionCompleted {
        processor_id,
        input_size: start_msg.input_size,
        output_size,
        duration: start_time.elapsed(),
    }
    .log();

    response
}
