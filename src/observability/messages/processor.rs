// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Processor instantiation through the factory
//! * Processor execution lifecycle (start, completion, failure)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use text_helpers::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "data_processor",
///     input_size: 1024,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution started: input_size={} bytes",
            self.processor_id, self.input_size
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor",
            span_name = name,
            processor_id = self.processor_id,
            input_size = self.input_size,
        )
    }
}

/// Processor execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use text_helpers::observability::messages::processor::ProcessorExecutionCompleted;
/// use std::time::Duration;
///
/// let msg = ProcessorExecutionCompleted {
///     processor_id: "data_processor",
///     input_size: 1024,
///     output_size: 1024,
///     duration: Duration::from_millis(10),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.processor_id, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor",
            span_name = name,
            processor_id = self.processor_id,
            output_size = self.output_size,
        )
    }
}

/// Processor execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution failed: {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}

/// Processor instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use text_helpers::observability::messages::processor::ProcessorInstantiationFailed;
///
/// let msg = ProcessorInstantiationFailed {
///     processor_name: "unknown_processor",
///     reason: "Unknown processor implementation",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorInstantiationFailed<'a> {
    pub processor_name: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate processor '{}': {}",
            self.processor_name, self.reason
        )
    }
}

impl StructuredLog for ProcessorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_name = self.processor_name,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "factory",
            span_name = name,
            processor_name = self.processor_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_started_message_text() {
        let msg = ProcessorExecutionStarted {
            processor_id: "output_formatter",
            input_size: 5,
        };
        assert_eq!(
            msg.to_string(),
            "Processor 'output_formatter' execution started: input_size=5 bytes"
        );
    }

    #[test]
    fn test_completed_message_text() {
        let msg = ProcessorExecutionCompleted {
            processor_id: "data_processor",
            input_size: 3,
            output_size: 3,
            duration: Duration::from_millis(1),
        };
        let text = msg.to_string();
        assert!(text.starts_with("Processor 'data_processor' completed: input=3 bytes, output=3 bytes"));
    }

    #[test]
    fn test_failed_message_text() {
        let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let msg = ProcessorExecutionFailed {
            processor_id: "input_validator",
            error: &error,
        };
        assert_eq!(
            msg.to_string(),
            "Processor 'input_validator' execution failed: bad bytes"
        );
    }

    #[test]
    fn test_instantiation_failed_message_text() {
        let msg = ProcessorInstantiationFailed {
            processor_name: "shouty",
            reason: "not registered",
        };
        assert_eq!(
            msg.to_string(),
            "Failed to instantiate processor 'shouty': not registered"
        );
    }
}
