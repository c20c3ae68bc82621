//! Match criteria
//!
//! A criterion has the same shape as a [`CatalogObject`] but is read as a
//! filter. Every present field must match (AND); absent fields do not
//! constrain.

use serde::{Deserialize, Serialize};

use super::{CatalogObject, Pattern};

/// A type/schema/name pattern used to include or exclude catalog objects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Criterion {
    /// Object type, matched literally
    #[serde(rename = "type", alias = "Type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// Schema pattern (`*`, `prefix*` or exact)
    #[serde(alias = "Schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Name pattern (`*`, `prefix*` or exact)
    #[serde(alias = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Criterion {
    /// Create a criterion from optional fields
    #[must_use]
    pub fn new(object_type: Option<&str>, schema: Option<&str>, name: Option<&str>) -> Self {
        Self {
            object_type: object_type.map(String::from),
            schema: schema.map(String::from),
            name: name.map(String::from),
        }
    }

    /// A criterion that matches every object
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Constrain the object type
    #[must_use]
    pub fn with_type(mut self, object_type: &str) -> Self {
        self.object_type = Some(object_type.to_string());
        self
    }

    /// Constrain the schema
    #[must_use]
    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = Some(schema.to_string());
        self
    }

    /// Constrain the name
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Compile the field patterns
    #[must_use]
    pub fn compile(&self) -> CompiledCriterion {
        CompiledCriterion {
            object_type: Pattern::literal(self.object_type.as_deref()),
            schema: Pattern::wildcard(self.schema.as_deref()),
            name: Pattern::wildcard(self.name.as_deref()),
        }
    }

    /// Check whether an object satisfies every present field
    #[must_use]
    pub fn matches(&self, object: &CatalogObject) -> bool {
        self.compile().matches(object)
    }

    /// True when no field imposes a constraint
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.compile().is_unconstrained()
    }
}

impl From<CatalogObject> for Criterion {
    fn from(object: CatalogObject) -> Self {
        Self {
            object_type: object.object_type,
            schema: object.schema,
            name: object.name,
        }
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    /// Parse the `[type:][schema.]name` shorthand
    ///
    /// Empty parts impose no constraint: `Table:` selects every table,
    /// `dbo.` every object in `dbo`, `:dbo.Emp*` names starting with `Emp`
    /// in `dbo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty criterion. Use: [type:][schema.]name".to_string());
        }

        let (object_type, rest) = s.split_once(':').map_or((None, s), |(t, r)| (Some(t), r));
        let (schema, name) = rest.split_once('.').map_or((None, rest), |(s, n)| (Some(s), n));

        let part = |p: &str| Some(p.trim()).filter(|p| !p.is_empty()).map(String::from);
        Ok(Self {
            object_type: object_type.and_then(part),
            schema: schema.and_then(part),
            name: part(name),
        })
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.compile();
        write!(f, "{}:{}.{}", c.object_type, c.schema, c.name)
    }
}

/// A criterion with its patterns compiled, for repeated matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCriterion {
    object_type: Pattern,
    schema: Pattern,
    name: Pattern,
}

impl CompiledCriterion {
    /// Check whether an object satisfies every pattern
    #[must_use]
    pub fn matches(&self, object: &CatalogObject) -> bool {
        self.object_type.matches(object.object_type())
            && self.schema.matches(object.schema())
            && self.name.matches(object.name())
    }

    /// True when every pattern is [`Pattern::Any`]
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.object_type.is_any() && self.schema.is_any() && self.name.is_any()
    }
}
