// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Tag prepended to every formatted output message
pub const OUTPUT_PREFIX: &str = "[OUTPUT] ";
/// Character an input must contain to pass validation
pub const INPUT_MARKER: char = '@';
/// Response code for payloads that are not valid UTF-8
pub const INVALID_INPUT_CODE: u32 = 400;
/// Response code for processor names the factory does not know
pub const UNKNOWN_PROCESSOR_CODE: u32 = 404;
/// Response code for settings text that is not a mapping
pub const INVALID_CONFIGURATION_CODE: u32 = 422;
