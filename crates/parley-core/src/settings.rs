use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::json_file;

/// User preferences the page integration reads on startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub zoom_factor: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            zoom_factor: 1.0,
        }
    }
}

/// File-backed settings, read on every access like the dictionary store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        json_file::read_or_default(&self.path)
    }

    pub fn dark_mode(&self) -> bool {
        self.load().dark_mode
    }

    pub fn set_dark_mode(&self, on: bool) -> Result<(), StoreError> {
        self.update(|s| s.dark_mode = on)
    }

    /// Flip dark mode, returning the new value
    pub fn toggle_dark_mode(&self) -> Result<bool, StoreError> {
        let on = !self.dark_mode();
        self.set_dark_mode(on)?;
        Ok(on)
    }

    pub fn zoom_factor(&self) -> f64 {
        self.load().zoom_factor
    }

    pub fn set_zoom_factor(&self, factor: f64) -> Result<(), StoreError> {
        self.update(|s| s.zoom_factor = factor)
    }

    fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<(), StoreError> {
        let mut settings = self.load();
        f(&mut settings);
        json_file::write(&self.path, &settings)
    }
}
