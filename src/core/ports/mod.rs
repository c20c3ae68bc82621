//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (files, live databases, services).
//!
//! Implementations live in the `adapters` module.
//!
//! The matcher itself never loads anything: callers obtain candidates
//! through a [`CatalogSource`] and hand them to the services.

mod catalog_source;

pub use catalog_source::{CatalogSource, StaticCatalog};
