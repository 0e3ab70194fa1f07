//! Stored session for the authenticated mode.
//!
//! Persisted at ~/.config/daybox/session.toml. The session is handed to the
//! gateway explicitly at construction; the bearer token's absence is the
//! sole auth-failure trigger.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DayboxError, DayboxResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(account: Option<String>, access_token: impl Into<String>) -> Self {
        Session {
            account,
            access_token: Some(access_token.into()),
        }
    }

    /// The bearer credential, when one is present and non-empty.
    pub fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    fn path() -> DayboxResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayboxError::Config("Could not determine config directory".into()))?;
        Ok(config_dir.join("daybox").join("session.toml"))
    }

    /// Load the stored session, if any.
    pub fn load() -> DayboxResult<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    pub fn save(&self) -> DayboxResult<()> {
        self.save_to(&Self::path()?)
    }

    /// Forget the stored session.
    pub fn clear() -> DayboxResult<()> {
        let path = Self::path()?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn load_from(path: &Path) -> DayboxResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let session: Session = toml::from_str(&contents).map_err(|e| {
            DayboxError::Config(format!("Failed to parse session from {}: {}", path.display(), e))
        })?;
        Ok(Some(session))
    }

    fn save_to(&self, path: &Path) -> DayboxResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DayboxError::Config(format!("Failed to serialize session: {}", e)))?;
        std::fs::write(path, contents)?;

        // Owner-only, the file holds a credential.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}
