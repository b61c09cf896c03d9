// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod helper;

pub use helper::{HelperError, HelperResult};
