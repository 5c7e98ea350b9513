// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use calprop_ical::{FormatOptions, ParseOptions};
use jiff::tz::TimeZone;

use crate::cli::APP_NAME;

const CALPROP_CONFIG_ENV: &str = "CALPROP_CONFIG";

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// How raw values are resolved.
    pub parse: ParseOptions,

    /// How content lines are written.
    pub format: FormatOptions,

    /// Timezone for floating values when an absolute instant is needed.
    /// Defaults to the system timezone.
    pub default_timezone: Option<String>,
}

impl Config {
    /// Load the configuration.
    ///
    /// The file is taken from `path`, then `$CALPROP_CONFIG`, then the user
    /// config directory. Only a missing file at the last location falls back
    /// to the defaults.
    #[tracing::instrument]
    pub fn load(path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let path = if let Some(path) = path {
            path
        } else if let Ok(env_path) = std::env::var(CALPROP_CONFIG_ENV) {
            PathBuf::from(env_path)
        } else {
            let config = get_config_dir()?.join(APP_NAME).join("config.toml");
            if !config.exists() {
                tracing::debug!(path = %config.display(), "no config found, using defaults");
                return Ok(Self::default());
            }
            config
        };

        tracing::debug!(path = %path.display(), "reading config");
        fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse()
    }

    /// The timezone floating values are interpreted in.
    pub fn floating_timezone(&self) -> Result<TimeZone, Box<dyn Error>> {
        match &self.default_timezone {
            Some(tzid) => jiff::tz::db()
                .get(tzid)
                .map_err(|e| format!("Invalid default-timezone '{tzid}': {e}").into()),
            None => Ok(TimeZone::system()),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
