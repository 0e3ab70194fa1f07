//! Device-local storage for guest-mode calendars.
//!
//! One JSON aggregate per calendar id under the data directory. Reads of
//! absent aggregates are not errors; every failure that does occur maps to
//! the distinct `Storage` error kind so callers can surface it instead of
//! letting it escape the submission boundary.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calendar::CalendarRecord;
use crate::error::{DayboxError, DayboxResult};

pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, calendar_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", calendar_id))
    }

    /// Load a calendar aggregate. An absent file yields `None`; callers
    /// treat that as an empty aggregate.
    pub fn load(&self, calendar_id: &str) -> DayboxResult<Option<CalendarRecord>> {
        let path = self.record_path(calendar_id);
        if !path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|e| storage_error(&path, &e))?;
        let record: CalendarRecord =
            serde_json::from_str(&contents).map_err(|e| storage_error(&path, &e))?;
        Ok(Some(record))
    }

    /// Write a calendar aggregate back (atomic via temp file + rename).
    pub fn save(&self, calendar_id: &str, record: &CalendarRecord) -> DayboxResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| storage_error(&self.root, &e))?;

        let path = self.record_path(calendar_id);
        let temp = self.root.join(format!("{}.json.tmp", calendar_id));

        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| storage_error(&path, &e))?;

        std::fs::write(&temp, contents).map_err(|e| storage_error(&temp, &e))?;
        std::fs::rename(&temp, &path).map_err(|e| storage_error(&path, &e))?;

        debug!(calendar = calendar_id, path = %path.display(), "saved local calendar aggregate");
        Ok(())
    }
}

fn storage_error(path: &Path, err: &dyn std::fmt::Display) -> DayboxError {
    DayboxError::Storage(format!("{}: {}", path.display(), err))
}
