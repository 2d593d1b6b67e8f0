// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use crate::{DayKey, Section};

/// Result type used throughout the daylist core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the day-file store and the list operations.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No day file exists for the date.
    #[error("No daily list found for {0}")]
    NotFound(DayKey),

    /// A day file already exists for the date.
    #[error("Daily list for {0} already exists")]
    AlreadyExists(DayKey),

    /// The 1-based index does not address a task in the section.
    #[error("Invalid index {index}: {section} list has {len} task(s)")]
    InvalidIndex {
        /// The section the index was applied to
        section: Section,
        /// The requested 1-based index
        index: usize,
        /// Number of tasks in the section
        len: usize,
    },

    /// Task content is empty or whitespace only.
    #[error("Task content must not be empty")]
    EmptyContent,

    /// A date string is not in `YYYY_MM_DD` form or is not a real date.
    #[error("Invalid date '{0}', expected format: YYYY_MM_DD")]
    InvalidDateFormat(String),

    /// Reading, writing or deleting a file failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// A day file does not hold a valid day record.
    #[error("Malformed daily list at {}: {source}", path.display())]
    Json {
        /// The day file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
