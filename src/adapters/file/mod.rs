//! File-based catalog source
//!
//! Implements `CatalogSource` over JSON and TOML catalog files.

mod catalog;

pub use catalog::{CatalogFile, FileCatalog};
