// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of daylist, a to-do list kept per day.

mod arg;
mod cli;
mod cmd_day;
mod cmd_generate_completion;
mod cmd_task;
mod config;
mod day_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
