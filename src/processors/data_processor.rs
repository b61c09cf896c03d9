// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Configuration;
use crate::payload::{ProcessorRequest, ProcessorResponse};
use crate::processors::execute_text;
use crate::traits::{Processor, ProcessorIntent};

/// Data processor - holds its configuration and uppercases text
///
/// The configuration is stored verbatim at construction and never
/// inspected by [`DataProcessor::process`].
///
/// # Example
/// ```
/// use text_helpers::{Configuration, DataProcessor};
///
/// let processor = DataProcessor::new(Configuration::new());
/// assert_eq!(processor.process("abc"), "ABC");
/// ```
#[derive(Debug, Clone)]
pub struct DataProcessor {
    configuration: Configuration,
}

impl DataProcessor {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// Convert `data` to uppercase using full Unicode case mapping.
    ///
    /// A character may expand (`ß` becomes `SS`), so the output can be
    /// longer than the input. Applying this twice gives the same result
    /// as applying it once.
    pub fn process(&self, data: &str) -> String {
        self.internal_hook();
        data.to_uppercase()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Extension point for crate-internal collaborators. Does nothing.
    pub(crate) fn internal_hook(&self) {}
}

impl Processor for DataProcessor {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        execute_text(self.name(), req, |input| {
            ProcessorResponse::next_payload(DataProcessor::process(self, &input).into_bytes())
        })
    }

    fn name(&self) -> &'static str {
        "data_processor"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
