//! Domain models for catmatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CatalogObject`] - A typed, schema-qualified catalog entry
//! - [`Criterion`] - A type/schema/name filter
//! - [`MatchFilter`] - Every include/exclude constraint of one run
//! - [`Pattern`] - A compiled field pattern (any, prefix or exact)
//! - [`MatchError`] - Argument validation failures

mod catalog_object;
mod criterion;
mod error;
mod filter;
mod pattern;

pub use catalog_object::CatalogObject;
pub use criterion::{CompiledCriterion, Criterion};
pub use error::MatchError;
pub use filter::MatchFilter;
pub use pattern::{Pattern, WILDCARD};
