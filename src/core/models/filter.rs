//! Match filters
//!
//! A [`MatchFilter`] bundles every constraint the matcher understands.
//! Empty lists never constrain.

use serde::{Deserialize, Serialize};

use super::Criterion;

/// Include/exclude constraints for one matcher run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchFilter {
    /// Criteria combined with OR to select the starting set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<Criterion>,

    /// Criteria whose matches are removed one after another
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<Criterion>,

    /// Schema patterns; objects must match at least one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_schemas: Vec<String>,

    /// Schema patterns whose matches are removed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_schemas: Vec<String>,

    /// Object types; objects must have one of them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_types: Vec<String>,

    /// Object types whose objects are removed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<String>,
}

impl MatchFilter {
    /// A filter with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from at most one constraint of each kind
    ///
    /// Each `None` becomes an empty list.
    #[must_use]
    pub fn single(
        include: Option<Criterion>,
        exclude: Option<Criterion>,
        include_schema: Option<&str>,
        exclude_schema: Option<&str>,
        include_type: Option<&str>,
        exclude_type: Option<&str>,
    ) -> Self {
        Self {
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
            include_schemas: include_schema.map(String::from).into_iter().collect(),
            exclude_schemas: exclude_schema.map(String::from).into_iter().collect(),
            include_types: include_type.map(String::from).into_iter().collect(),
            exclude_types: exclude_type.map(String::from).into_iter().collect(),
        }
    }

    /// Add an include criterion
    #[must_use]
    pub fn include(mut self, criterion: Criterion) -> Self {
        self.include.push(criterion);
        self
    }

    /// Add an exclude criterion
    #[must_use]
    pub fn exclude(mut self, criterion: Criterion) -> Self {
        self.exclude.push(criterion);
        self
    }

    /// Add an included schema pattern
    #[must_use]
    pub fn include_schema(mut self, schema: &str) -> Self {
        self.include_schemas.push(schema.to_string());
        self
    }

    /// Add an excluded schema pattern
    #[must_use]
    pub fn exclude_schema(mut self, schema: &str) -> Self {
        self.exclude_schemas.push(schema.to_string());
        self
    }

    /// Add an included type
    #[must_use]
    pub fn include_type(mut self, object_type: &str) -> Self {
        self.include_types.push(object_type.to_string());
        self
    }

    /// Add an excluded type
    #[must_use]
    pub fn exclude_type(mut self, object_type: &str) -> Self {
        self.exclude_types.push(object_type.to_string());
        self
    }

    /// Append every constraint of `other` to this filter
    pub fn extend(&mut self, other: Self) {
        self.include.extend(other.include);
        self.exclude.extend(other.exclude);
        self.include_schemas.extend(other.include_schemas);
        self.exclude_schemas.extend(other.exclude_schemas);
        self.include_types.extend(other.include_types);
        self.exclude_types.extend(other.exclude_types);
    }

    /// True when no list holds a constraint
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
            && self.exclude.is_empty()
            && self.include_schemas.is_empty()
            && self.exclude_schemas.is_empty()
            && self.include_types.is_empty()
            && self.exclude_types.is_empty()
    }
}
