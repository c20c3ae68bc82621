//! Filter profile configuration
//!
//! A filter profile is a TOML file holding a reusable [`MatchFilter`].
//! Profiles can be loaded from any path, or by name from the profiles
//! directory (see [`crate::paths`]).
//!
//! ```toml
//! description = "HR tables"
//! include_schemas = ["HumanResources"]
//! exclude_types = ["View"]
//!
//! [[include]]
//! type = "Table"
//! name = "Emp*"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::MatchFilter;
use crate::paths;

/// Errors that can occur when loading or saving profiles
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failure
    #[error("failed to access {path}: {source}")]
    Io {
        /// The file or directory involved
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Profile content is not valid TOML for a filter
    #[error("invalid profile {path}: {source}")]
    Parse {
        /// The file that failed to parse
        path: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Profile could not be serialized
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No profile exists with this name
    #[error("profile not found: {0}")]
    NotFound(String),
}

/// A named, reusable filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterProfile {
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The filter itself
    #[serde(flatten)]
    pub filter: MatchFilter,
}

impl FilterProfile {
    /// Wrap a filter in a profile
    #[must_use]
    pub const fn new(filter: MatchFilter) -> Self {
        Self {
            description: None,
            filter,
        }
    }

    /// Parse a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<string>".to_string(),
            source,
        })
    }

    /// Load a profile from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded filter profile {}", path.display());
        Ok(profile)
    }

    /// Load a named profile from the profiles directory
    pub fn load_named(name: &str) -> Result<Self, ConfigError> {
        let path = paths::profile_path(name);
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        Self::load(&path)
    }

    /// Save the profile to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.display().to_string(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// List the names of saved profiles, sorted
    pub fn list_named() -> Result<Vec<String>, ConfigError> {
        let dir = paths::profiles_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|source| ConfigError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|e| e == paths::PROFILE_EXTENSION))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Take the filter out of the profile
    #[must_use]
    pub fn into_filter(self) -> MatchFilter {
        self.filter
    }
}
