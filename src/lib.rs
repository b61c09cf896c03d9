// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // opaque configuration + constants
pub mod errors;        // error handling
pub mod observability;
pub mod payload;       // byte-payload request/response types
pub mod processors;    // formatter, validator, data processor
pub mod traits;        // processor abstraction

pub use config::Configuration;
pub use errors::{HelperError, HelperResult};
pub use processors::{format_output, validate_input, DataProcessor, LocalProcessorFactory};
