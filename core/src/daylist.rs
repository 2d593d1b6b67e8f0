// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Local};

use crate::day::checked_content;
use crate::{Config, DayKey, DayRecord, DayStore, Result, Section, Task, Timestamp};

/// Daylist application core: the list operations over the day files.
///
/// Every operation loads the whole day file, mutates it in memory and writes
/// it back, so a failed operation never leaves a partially written file.
#[derive(Debug, Clone)]
pub struct Daylist {
    now: DateTime<Local>,
    config: Config,
    store: DayStore,
}

impl Daylist {
    /// Creates a new daylist instance with the given configuration.
    ///
    /// Nothing is touched on disk until a day is created.
    pub fn new(mut config: Config) -> Result<Self> {
        config.normalize()?;
        let store = DayStore::new(&config.data_dir);

        Ok(Self {
            now: Local::now(),
            config,
            store,
        })
    }

    /// The current time in the daylist instance.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// The day of the current time.
    pub fn today(&self) -> DayKey {
        self.now.date_naive().into()
    }

    /// The underlying day-file store.
    pub fn store(&self) -> &DayStore {
        &self.store
    }

    fn stamp(&self) -> Timestamp {
        self.now.into()
    }

    /// Creates an empty list for `day`, leaving an existing one untouched.
    pub async fn create(&self, day: DayKey) -> Result<DayRecord> {
        tracing::debug!(%day, "creating daily list");
        let record = DayRecord::new(&self.config.title, day);
        self.store.prepare().await?;
        self.store.create(day, &record).await?;
        Ok(record)
    }

    /// The list of `day`.
    pub async fn show(&self, day: DayKey) -> Result<DayRecord> {
        self.store.load(day).await
    }

    /// The days that have a list, oldest first.
    pub async fn days(&self) -> Result<Vec<DayKey>> {
        self.store.list().await
    }

    /// Adds an open task, at the 1-based `priority` position if given.
    pub async fn add(&self, day: DayKey, content: &str, priority: Option<usize>) -> Result<Task> {
        let content = checked_content(content)?;
        tracing::debug!(%day, ?priority, "adding task");
        self.update(day, |record, now| record.insert(Task::new(content, now), priority).cloned())
            .await
    }

    /// Rewrites the content of the open task at the 1-based `index`.
    pub async fn modify(&self, day: DayKey, index: usize, content: &str) -> Result<Task> {
        let content = checked_content(content)?;
        tracing::debug!(%day, index, "modifying task");
        self.update(day, |record, now| record.modify(index, content, now).cloned())
            .await
    }

    /// Completes the open task at the 1-based `index`.
    pub async fn complete(&self, day: DayKey, index: usize) -> Result<Task> {
        tracing::debug!(%day, index, "completing task");
        self.update(day, |record, now| record.complete(index, now).cloned())
            .await
    }

    /// Reopens the completed task at the 1-based `index`.
    pub async fn redo(&self, day: DayKey, index: usize) -> Result<Task> {
        tracing::debug!(%day, index, "reopening task");
        self.update(day, |record, now| record.redo(index, now).cloned())
            .await
    }

    /// Removes the task at the 1-based `index` of `section`.
    pub async fn remove(&self, day: DayKey, index: usize, section: Section) -> Result<Task> {
        tracing::debug!(%day, index, %section, "removing task");
        self.update(day, |record, _| record.remove(section, index))
            .await
    }

    /// Deletes the day file of `day`.
    pub async fn delete(&self, day: DayKey) -> Result<()> {
        tracing::debug!(%day, "deleting daily list");
        self.store.delete(day).await
    }

    /// Loads `day`, applies `f` and saves the result if `f` succeeded.
    async fn update<T, F>(&self, day: DayKey, f: F) -> Result<T>
    where
        F: FnOnce(&mut DayRecord, Timestamp) -> Result<T>,
    {
        let mut record = self.store.load(day).await?;
        let value = f(&mut record, self.stamp())?;
        self.store.save(day, &record).await?;
        Ok(value)
    }
}
