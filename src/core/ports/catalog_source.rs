//! Catalog source port
//!
//! Defines the interface for obtaining the candidate catalog.

use super::super::models::CatalogObject;

/// Source of catalog objects
///
/// Implementations handle loading catalog entries from various sources
/// (JSON or TOML files, a live schema query, etc.)
pub trait CatalogSource: Send + Sync {
    /// Human-readable name of the source (a path, a connection name...)
    fn name(&self) -> &str;

    /// Load every object in the catalog
    fn load(&self) -> anyhow::Result<Vec<CatalogObject>>;
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    name: String,
    objects: Vec<CatalogObject>,
}

impl StaticCatalog {
    /// Create a catalog holding the given objects
    #[must_use]
    pub fn new(name: impl Into<String>, objects: Vec<CatalogObject>) -> Self {
        Self {
            name: name.into(),
            objects,
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> anyhow::Result<Vec<CatalogObject>> {
        Ok(self.objects.clone())
    }
}
