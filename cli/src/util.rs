// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use daylist_core::Timestamp;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Formats a timestamp for table cells, `HH:MM` when on `day`.
pub fn format_timestamp(t: Option<Timestamp>, day: chrono::NaiveDate) -> String {
    match t {
        Some(t) if t.naive().date() == day => t.naive().format("%H:%M").to_string(),
        Some(t) => t.naive().format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}
