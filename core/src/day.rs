// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result, Task, Timestamp};

/// The format of day keys, which also name the day files.
pub const DAY_KEY_FORMAT: &str = "%Y_%m_%d";

/// A calendar date naming one day file, written as `YYYY_MM_DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// The calendar date of this key.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        const RE: &str = r"^\d{4}_\d{2}_\d{2}$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        if !re.is_match(s) {
            return Err(Error::InvalidDateFormat(s.to_string()));
        }

        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDateFormat(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One of the two task sequences of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Tasks still to be done.
    Uncompleted,

    /// Tasks already done.
    Completed,
}

impl AsRef<str> for Section {
    fn as_ref(&self) -> &str {
        match self {
            Section::Uncompleted => "uncompleted",
            Section::Completed => "completed",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The task lists of a day. A task lives in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContent {
    /// Done tasks, in completion order.
    #[serde(default)]
    pub completed: Vec<Task>,

    /// Open tasks, in list order.
    #[serde(default)]
    pub uncompleted: Vec<Task>,
}

/// The full task state of one day, as stored in its day file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Heading shown above the list.
    pub title: String,

    /// The day this record belongs to.
    pub time: DayKey,

    /// Both task lists.
    pub content: DayContent,
}

impl DayRecord {
    /// Creates an empty record for `day`.
    pub fn new(title: impl Into<String>, day: DayKey) -> Self {
        Self {
            title: title.into(),
            time: day,
            content: DayContent::default(),
        }
    }

    /// The tasks of a section, in order.
    pub fn tasks(&self, section: Section) -> &[Task] {
        match section {
            Section::Uncompleted => &self.content.uncompleted,
            Section::Completed => &self.content.completed,
        }
    }

    fn tasks_mut(&mut self, section: Section) -> &mut Vec<Task> {
        match section {
            Section::Uncompleted => &mut self.content.uncompleted,
            Section::Completed => &mut self.content.completed,
        }
    }

    /// Whether the day holds no task at all.
    pub fn is_empty(&self) -> bool {
        self.content.completed.is_empty() && self.content.uncompleted.is_empty()
    }

    /// Inserts an open task at the 1-based `priority` position, or appends it.
    ///
    /// A priority past the end appends; a priority of 0 is rejected.
    pub fn insert(&mut self, task: Task, priority: Option<usize>) -> Result<&Task> {
        let tasks = &mut self.content.uncompleted;
        let at = match priority {
            Some(0) => {
                return Err(Error::InvalidIndex {
                    section: Section::Uncompleted,
                    index: 0,
                    len: tasks.len(),
                });
            }
            Some(p) => (p - 1).min(tasks.len()),
            None => tasks.len(),
        };

        tasks.insert(at, task);
        Ok(&tasks[at])
    }

    /// Rewrites the content of the open task at `index`.
    pub fn modify(&mut self, index: usize, content: &str, now: Timestamp) -> Result<&Task> {
        let content = checked_content(content)?;
        let i = self.position(Section::Uncompleted, index)?;
        let task = &mut self.content.uncompleted[i];
        task.rewrite(content, now);
        Ok(task)
    }

    /// Moves the open task at `index` to the end of the completed list.
    pub fn complete(&mut self, index: usize, now: Timestamp) -> Result<&Task> {
        let i = self.position(Section::Uncompleted, index)?;
        let mut task = self.content.uncompleted.remove(i);
        task.complete(now);
        self.content.completed.push(task);
        Ok(&self.content.completed[self.content.completed.len() - 1])
    }

    /// Moves the completed task at `index` to the end of the open list.
    pub fn redo(&mut self, index: usize, now: Timestamp) -> Result<&Task> {
        let i = self.position(Section::Completed, index)?;
        let mut task = self.content.completed.remove(i);
        task.uncomplete(now);
        self.content.uncompleted.push(task);
        Ok(&self.content.uncompleted[self.content.uncompleted.len() - 1])
    }

    /// Takes the task at `index` out of `section`.
    pub fn remove(&mut self, section: Section, index: usize) -> Result<Task> {
        let i = self.position(section, index)?;
        Ok(self.tasks_mut(section).remove(i))
    }

    /// Maps a 1-based index onto a position in `section`.
    fn position(&self, section: Section, index: usize) -> Result<usize> {
        let len = self.tasks(section).len();
        if index == 0 || index > len {
            return Err(Error::InvalidIndex {
                section,
                index,
                len,
            });
        }
        Ok(index - 1)
    }
}

/// Rejects blank task content.
pub(crate) fn checked_content(content: &str) -> Result<&str> {
    if content.trim().is_empty() {
        Err(Error::EmptyContent)
    } else {
        Ok(content)
    }
}
