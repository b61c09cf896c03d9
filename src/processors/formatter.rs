// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::OUTPUT_PREFIX;
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::processors::execute_text;
use crate::traits::{Processor, ProcessorIntent};

/// Format a message for output by prefixing it with the `[OUTPUT] ` tag.
///
/// # Example
/// ```
/// use text_helpers::format_output;
///
/// assert_eq!(format_output("hello"), "[OUTPUT] hello");
/// assert_eq!(format_output(""), "[OUTPUT] ");
/// ```
pub fn format_output(message: &str) -> String {
    let mut formatted = String::with_capacity(OUTPUT_PREFIX.len() + message.len());
    formatted.push_str(OUTPUT_PREFIX);
    formatted.push_str(message);
    formatted
}

/// Output Formatter processor - tags the payload with the output prefix
pub struct OutputFormatterProcessor;

impl OutputFormatterProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OutputFormatterProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for OutputFormatterProcessor {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        execute_text(self.name(), req, |input| {
            ProcessorResponse::next_payload(format_output(&input).into_bytes())
        })
    }

    fn name(&self) -> &'static str {
        "output_formatter"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_output_prefixes_message() {
        assert_eq!(format_output("hello"), "[OUTPUT] hello");
    }

    #[test]
    fn test_format_output_empty_message() {
        assert_eq!(format_output(""), "[OUTPUT] ");
    }

    #[test]
    fn test_format_output_is_plain_concatenation() {
        let cases = vec!["[OUTPUT] already tagged", "multi\nline", "ünïcödé ✓", "  spaced  "];

        for message in cases {
            assert_eq!(format_output(message), format!("[OUTPUT] {}", message));
        }
    }

    #[test]
    fn test_formatter_processor_payload() {
        let processor = OutputFormatterProcessor::new();
        let response = processor.process(ProcessorRequest::from_text("ready"));

        assert_eq!(response.payload_text(), Some("[OUTPUT] ready"));
        assert_eq!(processor.declared_intent(), ProcessorIntent::Transform);
    }

    #[test]
    fn test_formatter_processor_invalid_utf8() {
        let processor = OutputFormatterProcessor::new();
        let response = processor.process(ProcessorRequest {
            payload: vec![0xff, 0xfe, 0xfd],
            ..Default::default()
        });

        let detail = response.error().expect("expected error outcome");
        assert_eq!(detail.code, 400);
        assert!(detail.message.contains("Invalid UTF-8 input"));
    }
}
