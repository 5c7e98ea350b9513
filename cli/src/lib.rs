// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for `DTSTART` / `DTEND` content lines.

mod cli;
mod cmd_convert;
mod cmd_generate_completion;
mod cmd_now;
mod cmd_parse;
mod config;
mod report;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
