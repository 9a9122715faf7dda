//! View configuration.
//!
//! Loaded from `config.json` in the platform config directory, or from an
//! explicit `--config` path. Missing fields take their defaults; command line
//! flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use assetdesk_core::{SearchMode, WindowConfig, WindowError};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Error loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Geometry and search defaults for the table views.
///
/// Heights are in terminal lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Height of one row.
    pub row_height: f64,
    /// Visible height of the table body.
    pub viewport_height: f64,
    /// Extra rows rendered above and below the viewport.
    pub overscan: usize,
    /// Use fuzzy matching instead of substring search.
    pub fuzzy_search: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            row_height: 1.0,
            viewport_height: 20.0,
            overscan: assetdesk_core::window::DEFAULT_OVERSCAN,
            fuzzy_search: false,
        }
    }
}

impl ViewConfig {
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_fuzzy_search(mut self, fuzzy: bool) -> Self {
        self.fuzzy_search = fuzzy;
        self
    }

    pub fn search_mode(&self) -> SearchMode {
        if self.fuzzy_search {
            SearchMode::Fuzzy
        } else {
            SearchMode::Substring
        }
    }

    /// Validated window geometry.
    pub fn window(&self) -> Result<WindowConfig, WindowError> {
        WindowConfig::new(self.row_height, self.viewport_height)
            .map(|config| config.with_overscan(self.overscan))
    }

    /// Parse a config document.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`. The file must exist.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// Without an explicit path, a missing default file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match paths::config_file() {
            Some(path) if path.exists() => {
                log::debug!("[ViewConfig::load] using {}", path.display());
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
