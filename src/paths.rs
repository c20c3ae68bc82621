//! Centralized path definitions for catmatch
//!
//! This module provides a single source of truth for the filesystem paths
//! catmatch reads from.
//!
//! ## Layout
//!
//! ```text
//! ~/.config/catmatch/
//! └── profiles/
//!     ├── hr-tables.toml        # Named filter profile "hr-tables"
//!     └── no-views.toml
//! ```
//!
//! Set `CATMATCH_CONFIG_DIR` to use a different root directory.

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CATMATCH_CONFIG_DIR";

/// Application directory name under the platform config directory
const APP_DIR: &str = "catmatch";

/// Profiles subdirectory
const PROFILES_DIR: &str = "profiles";

/// Profile file extension
pub const PROFILE_EXTENSION: &str = "toml";

/// Get the catmatch config directory.
///
/// `$CATMATCH_CONFIG_DIR` if set, else `<platform config dir>/catmatch`,
/// else `.catmatch` in the current directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir().map_or_else(|| PathBuf::from(".catmatch"), |d| d.join(APP_DIR))
}

/// Get the directory holding named filter profiles.
#[must_use]
pub fn profiles_dir() -> PathBuf {
    config_dir().join(PROFILES_DIR)
}

/// Get the path of a named filter profile.
#[must_use]
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{name}.{PROFILE_EXTENSION}"))
}
