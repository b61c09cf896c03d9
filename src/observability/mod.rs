// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through message structs that implement
//! `Display`, so log text is defined in one place instead of being
//! scattered through the processors as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - Processor execution and instantiation events
//! * `messages::validation` - Input validation outcomes
//!
//! # Usage
//!
//! ```rust
//! use text_helpers::observability::messages::processor::ProcessorExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "data_processor",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
