// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised at the boundaries of the helper library.
//!
//! The text helpers themselves are total. Errors only appear where raw
//! input enters the crate: byte payloads, settings text, and processor
//! names handed to the factory.

use std::string::FromUtf8Error;
use thiserror::Error;

use crate::config::consts::{
    INVALID_CONFIGURATION_CODE, INVALID_INPUT_CODE, UNKNOWN_PROCESSOR_CODE,
};

pub type HelperResult<T> = Result<T, HelperError>;

#[derive(Debug, Error)]
pub enum HelperError {
    /// A byte payload could not be read as UTF-8 text
    #[error("Invalid UTF-8 input: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// Settings text did not describe a name-to-value mapping
    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    /// The factory was asked for a processor it does not provide
    #[error("Unknown local processor implementation: '{name}'")]
    UnknownProcessor { name: String },
}

impl HelperError {
    /// Response code reported when this error is turned into an error outcome
    pub fn code(&self) -> u32 {
        match self {
            HelperError::Encoding(_) => INVALID_INPUT_CODE,
            HelperError::UnknownProcessor { .. } => UNKNOWN_PROCESSOR_CODE,
            HelperError::Configuration { .. } => INVALID_CONFIGURATION_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoding_error() -> HelperError {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        HelperError::from(bad)
    }

    #[test]
    fn test_encoding_error_display_and_code() {
        let error = encoding_error();
        assert!(error.to_string().starts_with("Invalid UTF-8 input:"));
        assert_eq!(error.code(), 400);
    }

    #[test]
    fn test_unknown_processor_display_and_code() {
        let error = HelperError::UnknownProcessor {
            name: "shouty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown local processor implementation: 'shouty'"
        );
        assert_eq!(error.code(), 404);
    }

    #[test]
    fn test_configuration_error_code() {
        let error = HelperError::Configuration {
            reason: "not a mapping".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid configuration: not a mapping");
        assert_eq!(error.code(), 422);
    }
}
