//! Global daybox configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{DayboxError, DayboxResult};

static DEFAULT_BASE_URL: &str = "http://localhost:3030";
static DEFAULT_DATA_DIR: &str = "~/.local/share/daybox";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/daybox/config.toml
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Base URL of the calendar service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where guest-mode calendar aggregates live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            base_url: default_base_url(),
            data_dir: default_data_dir(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> DayboxResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayboxError::Config("Could not determine config directory".into()))?
            .join("daybox");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> DayboxResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| DayboxError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayboxError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &std::path::Path) -> DayboxResult<()> {
        let contents = format!(
            "\
# daybox configuration

# Calendar service to sync with when logged in:
# base_url = \"{}\"

# Where guest-mode calendars live:
# data_dir = \"{}\"
",
            DEFAULT_BASE_URL, DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayboxError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayboxError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
