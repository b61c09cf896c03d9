// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::{DataProcessor, InputValidatorProcessor, OutputFormatterProcessor};
use crate::config::Configuration;
use crate::errors::{HelperError, HelperResult};
use crate::observability::messages::{processor::ProcessorInstantiationFailed, StructuredLog};
use crate::traits::Processor;

/// Factory for creating local (in-process) processor instances by name
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from its name
    ///
    /// - "output_formatter" -> OutputFormatterProcessor
    /// - "input_validator" -> InputValidatorProcessor
    /// - "data_processor" -> DataProcessor (takes ownership of `configuration`)
    ///
    /// The stateless processors ignore `configuration`.
    pub fn create_processor(
        name: &str,
        configuration: Configuration,
    ) -> HelperResult<Arc<dyn Processor>> {
        match name {
            "output_formatter" => Ok(Arc::new(OutputFormatterProcessor::new())),
            "input_validator" => Ok(Arc::new(InputValidatorProcessor::new())),
            "data_processor" => Ok(Arc::new(DataProcessor::new(configuration))),
            _ => {
                ProcessorInstantiationFailed {
                    processor_name: name,
                    reason: "no local implementation with that name",
                }
                .log();
                Err(HelperError::UnknownProcessor {
                    name: name.to_string(),
                })
            }
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["output_formatter", "input_validator", "data_processor"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}
