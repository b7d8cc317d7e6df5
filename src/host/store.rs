//! File-backed settings store

use super::SettingsStore;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Settings store writing one JSON file under the platform config dir.
///
/// Hosts with their own persistence implement [`SettingsStore`] directly;
/// this is the standalone default.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store at the default platform location.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("citemark")
            .join("settings.json");
        Self { path }
    }

    /// Store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    fn save(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&self.path, blob)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}
