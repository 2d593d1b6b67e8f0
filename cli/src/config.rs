// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use daylist_core::{APP_NAME, Config as CoreConfig};

const DAYLIST_CONFIG_ENV: &str = "DAYLIST_CONFIG";
const DAYLIST_DATA_DIR_ENV: &str = "DAYLIST_DATA_DIR";

/// Resolves the core configuration.
///
/// Looks at `path`, then `$DAYLIST_CONFIG`, then the user config directory,
/// and falls back to the defaults when none of them names a file.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(DAYLIST_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        match get_config_dir() {
            Ok(dir) => Some(dir.join(format!("{APP_NAME}/config.toml"))).filter(|p| p.exists()),
            Err(e) => {
                tracing::warn!("{e}, using default configuration");
                None
            }
        }
    };

    let mut config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config file");
            fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
                .parse::<ConfigRaw>()?
                .core
        }
        None => CoreConfig::default(),
    };

    if let Ok(data_dir) = std::env::var(DAYLIST_DATA_DIR_ENV) {
        tracing::debug!(data_dir, "data directory overridden by environment");
        config.data_dir = PathBuf::from(data_dir);
    }

    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
