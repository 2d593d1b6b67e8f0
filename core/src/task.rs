// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// The on-disk format of task timestamps, e.g. `2024/01/01 09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A local wall-clock time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp, dropping sub-second precision.
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// The timestamp as a naive local datetime.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt)
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Self::new(dt.naive_local())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map(Self::new)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl de::Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a timestamp like "2024/01/01 09:30:00""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(|e| {
                    de::Error::custom(format!("invalid timestamp '{value}': {e}"))
                })
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// A single to-do entry with its lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs to be done.
    pub content: String,

    /// When the task was added.
    pub create_time: Timestamp,

    /// When the task was last rewritten, completed or reopened.
    pub last_modify_time: Timestamp,

    /// When the task was completed, stored as `""` while it is open.
    #[serde(default, with = "complete_time")]
    pub complete_time: Option<Timestamp>,
}

impl Task {
    /// Creates an open task stamped with `now`.
    pub fn new(content: impl Into<String>, now: Timestamp) -> Self {
        Self {
            content: content.into(),
            create_time: now,
            last_modify_time: now,
            complete_time: None,
        }
    }

    /// Whether the task carries a completion time.
    pub fn is_completed(&self) -> bool {
        self.complete_time.is_some()
    }

    /// Replaces the content.
    pub fn rewrite(&mut self, content: impl Into<String>, now: Timestamp) {
        self.content = content.into();
        self.last_modify_time = now;
    }

    /// Marks the task as completed at `now`.
    pub fn complete(&mut self, now: Timestamp) {
        self.last_modify_time = now;
        self.complete_time = Some(now);
    }

    /// Reopens the task, clearing its completion time.
    pub fn uncomplete(&mut self, now: Timestamp) {
        self.last_modify_time = now;
        self.complete_time = None;
    }
}

mod complete_time {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Timestamp;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => t.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if s.trim().is_empty() {
            return Ok(None);
        }

        s.parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{s}': {e}")))
    }
}
