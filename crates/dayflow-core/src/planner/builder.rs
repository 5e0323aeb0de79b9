//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::civil::DateTime;

use super::Planner;
use crate::error::{PlannerError, Result};
use crate::snapshot::Snapshot;

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    snapshot_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            snapshot_path: None,
        }
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dayflow/snapshot.json` or
    /// `~/.local/share/dayflow/snapshot.json`
    pub fn with_snapshot_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.snapshot_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// `now` is the current wall-clock instant, supplied by the caller; it is
    /// only used to anchor the default state when no usable snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if the default snapshot location
    /// cannot be resolved. A missing or malformed snapshot file is not an
    /// error; it falls back to the default state.
    pub fn build(self, now: DateTime) -> Result<Planner> {
        let snapshot_path = if let Some(path) = self.snapshot_path {
            path
        } else {
            Self::default_snapshot_path()?
        };

        let snapshot = Snapshot::load_or_default(&snapshot_path, now.date());
        Ok(Planner::from_snapshot(snapshot, snapshot_path))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_snapshot_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayflow")
            .place_data_file("snapshot.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
