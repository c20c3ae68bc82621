//! Catalog files
//!
//! Two layouts are understood:
//!
//! ```text
//! catalog.json   [ {"type": "Table", "schema": "dbo", "name": "Employee"}, ... ]
//!                or { "objects": [ ... ] }
//!
//! catalog.toml   [[objects]]
//!                type = "Table"
//!                schema = "dbo"
//!                name = "Employee"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::CatalogObject;
use crate::core::ports::CatalogSource;

/// A catalog file's top-level structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Objects in the catalog
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
}

/// JSON accepts a bare array as well as the wrapped form
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<CatalogObject>),
    Wrapped(CatalogFile),
}

/// Catalog source backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    name: String,
}

impl FileCatalog {
    /// Create a source for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog content according to a file extension
    pub fn parse(content: &str, extension: &str) -> anyhow::Result<Vec<CatalogObject>> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => {
                let parsed: JsonCatalog = serde_json::from_str(content)?;
                Ok(match parsed {
                    JsonCatalog::Bare(objects) => objects,
                    JsonCatalog::Wrapped(file) => file.objects,
                })
            },
            "toml" => {
                let file: CatalogFile = toml::from_str(content)?;
                Ok(file.objects)
            },
            other => anyhow::bail!("unsupported catalog format: .{other} (use .json or .toml)"),
        }
    }
}

impl CatalogSource for FileCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> anyhow::Result<Vec<CatalogObject>> {
        let path = self.path();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let objects = Self::parse(&content, extension)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        log::debug!("loaded {} object(s) from {}", objects.len(), self.name);
        Ok(objects)
    }
}
