//! Catalog objects
//!
//! A catalog object is a named, typed, schema-qualified entry of a database
//! catalog (a table, a view, a procedure...). It has no identity beyond its
//! three fields.

use serde::{Deserialize, Serialize};

/// An object in a schema catalog
///
/// Equality, hashing and ordering all use the `(type, schema, name)` triple,
/// so two objects with the same values are the same object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CatalogObject {
    /// Object type, e.g. `Table` or `View`
    #[serde(rename = "type", alias = "Type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// Owning schema, e.g. `dbo`
    #[serde(alias = "Schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Object name
    #[serde(alias = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CatalogObject {
    /// Create a new catalog object
    #[must_use]
    pub fn new(
        object_type: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            object_type: Some(object_type.into()),
            schema: Some(schema.into()),
            name: Some(name.into()),
        }
    }

    /// Object type, if any
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    /// Schema, if any
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Name, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl std::fmt::Display for CatalogObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.schema, &self.name) {
            (Some(schema), Some(name)) => write!(f, "[{schema}].[{name}]")?,
            (Some(schema), None) => write!(f, "[{schema}]")?,
            (None, Some(name)) => write!(f, "[{name}]")?,
            (None, None) => write!(f, "<unnamed>")?,
        }
        if let Some(object_type) = &self.object_type {
            write!(f, " ({object_type})")?;
        }
        Ok(())
    }
}
