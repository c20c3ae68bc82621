//! Field patterns used by criteria
//!
//! A pattern constrains one property of a catalog object. Schema and name
//! patterns understand a single trailing wildcard; type patterns are always
//! literal.
//!
//! Comparison is ordinal and case-insensitive: characters are compared one
//! at a time after a one-to-one uppercase mapping. Characters whose
//! uppercase form is more than one character compare as themselves.
//!
//! # Examples
//!
//! ```
//! use catmatch::core::models::Pattern;
//!
//! let p = Pattern::wildcard(Some("Emp*"));
//! assert!(p.matches(Some("employee")));
//! assert!(!p.matches(Some("Customer")));
//!
//! // Types never honor wildcards
//! let t = Pattern::literal(Some("Tab*"));
//! assert!(!t.matches(Some("Table")));
//! ```

/// The wildcard token
pub const WILDCARD: &str = "*";

/// A compiled field pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// No constraint: every value passes, including an absent one
    #[default]
    Any,

    /// Value must start with this stem
    Prefix(String),

    /// Value must equal this text
    Exact(String),
}

impl Pattern {
    /// Compile a schema or name pattern
    ///
    /// - absent, empty or whitespace-only: [`Pattern::Any`]
    /// - `*`: [`Pattern::Any`]
    /// - `abc*`: [`Pattern::Prefix`] on `abc`
    /// - anything else: [`Pattern::Exact`]
    #[must_use]
    pub fn wildcard(raw: Option<&str>) -> Self {
        let Some(raw) = present(raw) else {
            return Self::Any;
        };
        if raw == WILDCARD {
            return Self::Any;
        }
        raw.strip_suffix('*')
            .map_or_else(|| Self::Exact(raw.to_string()), |stem| Self::Prefix(stem.to_string()))
    }

    /// Compile a type pattern
    ///
    /// Only absence relaxes the constraint; `*` is matched as a literal character.
    #[must_use]
    pub fn literal(raw: Option<&str>) -> Self {
        present(raw).map_or(Self::Any, |raw| Self::Exact(raw.to_string()))
    }

    /// Check whether a property value satisfies this pattern
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (_, None) => false,
            (Self::Prefix(stem), Some(v)) => starts_with_ignore_case(v, stem),
            (Self::Exact(text), Some(v)) => eq_ignore_case(v, text),
        }
    }

    /// True when this pattern lets everything through
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Treat empty and whitespace-only strings as absent
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

/// Simple uppercase mapping, one char to one char
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn eq_ignore_case(value: &str, text: &str) -> bool {
    value.chars().map(fold).eq(text.chars().map(fold))
}

fn starts_with_ignore_case(value: &str, stem: &str) -> bool {
    let mut chars = value.chars();
    stem.chars().all(|s| chars.next().is_some_and(|c| fold(c) == fold(s)))
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "{WILDCARD}"),
            Self::Prefix(stem) => write!(f, "{stem}{WILDCARD}"),
            Self::Exact(text) => write!(f, "{text}"),
        }
    }
}
