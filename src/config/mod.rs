// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod configuration;
pub mod consts;

pub use configuration::Configuration;
