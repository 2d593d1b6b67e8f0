// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Daylist core: per-day JSON task lists on disk and the operations on them.

mod config;
mod day;
mod daylist;
mod error;
mod store;
mod task;

pub use crate::config::{APP_NAME, Config, DEFAULT_TITLE};
pub use crate::day::{DAY_KEY_FORMAT, DayContent, DayKey, DayRecord, Section};
pub use crate::daylist::Daylist;
pub use crate::error::{Error, Result};
pub use crate::store::DayStore;
pub use crate::task::{TIMESTAMP_FORMAT, Task, Timestamp};
