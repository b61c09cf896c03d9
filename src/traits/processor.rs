// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::payload::{ProcessorRequest, ProcessorResponse};

/// What a processor does to the payload it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorIntent {
    /// Produces a new payload
    Transform,
    /// Passes the payload through and reports findings in metadata
    Analyze,
}

pub trait Processor: Send + Sync {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse;

    fn name(&self) -> &'static str;

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
