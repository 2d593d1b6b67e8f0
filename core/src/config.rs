// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// The name of the daylist application.
pub const APP_NAME: &str = "daylist";

/// Title written into newly created day files.
pub const DEFAULT_TITLE: &str = "Daily List";

const DEFAULT_DATA_DIR: &str = "data";

/// Configuration for the daylist core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Directory holding the day files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Title of newly created day files.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<()> {
        self.data_dir = expand_path(&self.data_dir)
            .map_err(|e| Error::Config(format!("Failed to expand data directory path: {e}")))?;

        if self.title.trim().is_empty() {
            tracing::warn!("empty title in config, falling back to default");
            self.title = default_title();
        }

        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle data directories
    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".to_string())
}

fn get_data_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_local_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".to_string())
}
