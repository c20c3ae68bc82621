//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON and TOML catalog files

pub mod file;

pub use file::FileCatalog;
