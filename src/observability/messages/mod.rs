// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event with typed fields attached.
//!
//! # Usage Pattern
//!
//! ```rust
//! use text_helpers::observability::messages::StructuredLog;
//! use text_helpers::observability::messages::processor::ProcessorExecutionStarted;
//!
//! let msg = ProcessorExecutionStarted {
//!     processor_id: "output_formatter",
//!     input_size: 5,
//! };
//!
//! let span = msg.span("processor_execution");
//! let _guard = span.enter();
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod processor;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message at its level with fields attached
    fn log(&self);

    /// Open a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
