//! catmatch - Select schema catalog objects by type, schema and name
//!
//! This library provides the object-matching engine: given a catalog of
//! typed, schema-qualified objects and a set of include/exclude criteria,
//! it selects the matching subset. Loading catalogs and filter profiles
//! happens at the edges through [`crate::core::ports`] and [`adapters`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
