// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{DayKey, DayRecord, Error, Result};

/// Day files on disk, one JSON file per date named `YYYY_MM_DD`.
#[derive(Debug, Clone)]
pub struct DayStore {
    dir: PathBuf,
}

impl DayStore {
    /// Creates a store over the files in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the day files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file of a day, whether or not it exists.
    pub fn path(&self, day: DayKey) -> PathBuf {
        self.dir.join(day.to_string())
    }

    /// Creates the data directory if it is missing.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn prepare(&self) -> Result<()> {
        if fs::try_exists(&self.dir).await.unwrap_or(false) {
            return Ok(());
        }

        tracing::info!("creating data directory");
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::io(&self.dir, e))
    }

    /// Whether a day file exists.
    pub async fn exists(&self, day: DayKey) -> Result<bool> {
        let path = self.path(day);
        fs::try_exists(&path).await.map_err(|e| Error::io(path, e))
    }

    /// Reads and decodes the record of a day.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, day: DayKey) -> Result<DayRecord> {
        let path = self.path(day);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NotFound(day)),
            Err(e) => return Err(Error::io(path, e)),
        };

        let mut record: DayRecord =
            serde_json::from_str(&content).map_err(|e| Error::json(&path, e))?;
        if record.time != day {
            tracing::warn!(
                path = %path.display(),
                time = %record.time,
                "day file records another date, using its file name"
            );
            record.time = day;
        }

        tracing::debug!(path = %path.display(), "loaded day file");
        Ok(record)
    }

    /// Overwrites the file of a day with `record`.
    #[tracing::instrument(skip(self, record))]
    pub async fn save(&self, day: DayKey, record: &DayRecord) -> Result<()> {
        let path = self.path(day);
        let content = serde_json::to_string_pretty(record).map_err(|e| Error::json(&path, e))?;
        fs::write(&path, content)
            .await
            .map_err(|e| Error::io(&path, e))?;

        tracing::debug!(path = %path.display(), "saved day file");
        Ok(())
    }

    /// Writes `record` as a new day file, leaving an existing one untouched.
    #[tracing::instrument(skip(self, record))]
    pub async fn create(&self, day: DayKey, record: &DayRecord) -> Result<()> {
        if self.exists(day).await? {
            tracing::info!("day file already exists, not overwriting");
            return Err(Error::AlreadyExists(day));
        }
        self.save(day, record).await
    }

    /// Removes the file of a day.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, day: DayKey) -> Result<()> {
        let path = self.path(day);
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "deleted day file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound(day)),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// The days that have a file, oldest first.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn list(&self) -> Result<Vec<DayKey>> {
        let mut reader = match fs::read_dir(&self.dir).await {
            Ok(reader) => reader,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(Error::io(&self.dir, e)),
        };

        let mut days = vec![];
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| Error::io(&self.dir, e))?
        {
            let name = entry.file_name();
            match name.to_str().map(str::parse::<DayKey>) {
                Some(Ok(day)) => days.push(day),
                _ => tracing::debug!(?name, "skipping non day file"),
            }
        }

        days.sort();
        Ok(days)
    }
}
