// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response types for the byte-payload processor interface.
//!
//! Text helpers work on `&str`. Callers that hold raw bytes go through
//! these types instead, and the UTF-8 check happens exactly once, in
//! [`decode_payload`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{HelperError, HelperResult};

/// Input to a processor: raw bytes plus string metadata from upstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessorRequest {
    pub payload: Vec<u8>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ProcessorRequest {
    pub fn from_text(text: &str) -> Self {
        Self {
            payload: text.as_bytes().to_vec(),
            metadata: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NextPayload(Vec<u8>),
    Error(ErrorDetail),
}

/// Output of a processor: the next payload or an error, plus metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessorResponse {
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ProcessorResponse {
    pub fn next_payload(payload: Vec<u8>) -> Self {
        Self {
            outcome: Some(Outcome::NextPayload(payload)),
            metadata: HashMap::new(),
        }
    }

    pub fn from_error(error: &HelperError) -> Self {
        Self {
            outcome: Some(Outcome::Error(ErrorDetail {
                code: error.code(),
                message: error.to_string(),
            })),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// The next payload as text, if the outcome is a UTF-8 payload
    pub fn payload_text(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::NextPayload(payload)) => std::str::from_utf8(payload).ok(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        match &self.outcome {
            Some(Outcome::Error(detail)) => Some(detail),
            _ => None,
        }
    }
}

/// Read a request payload as text.
///
/// Bytes that are not valid UTF-8 become [`HelperError::Encoding`]; they
/// are never lossily repaired.
pub fn decode_payload(payload: Vec<u8>) -> HelperResult<String> {
    Ok(String::from_utf8(payload)?)
}
