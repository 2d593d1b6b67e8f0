// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A temporary data directory, removed when dropped.
#[derive(Debug)]
pub struct TempDataDir {
    _base: TempDir,
    /// Directory handed to the store as `data_dir`.
    pub data_dir: PathBuf,
}

impl TempDataDir {
    /// Creates a base directory; `data_dir` is a child that does not exist yet.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let data_dir = base.path().join("data");
        Ok(Self {
            _base: base,
            data_dir,
        })
    }

    /// The path of a day file inside the data directory.
    #[must_use]
    pub fn day_file(&self, day: &str) -> PathBuf {
        self.data_dir.join(day)
    }

    /// Writes a raw day file, creating the data directory as needed.
    pub async fn write_day_file(
        &self,
        day: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.day_file(day);
        fs::write(&path, content).await?;
        Ok(path)
    }

    /// Names of all entries in the data directory, sorted.
    pub async fn entries(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut reader = fs::read_dir(&self.data_dir).await?;
        let mut names = vec![];
        while let Some(entry) = reader.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

/// Sets up a temporary data directory for integration tests.
pub fn setup_temp_data_dir() -> TempDataDir {
    TempDataDir::new().expect("failed to create temp dir")
}
