//! Core domain logic for catmatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CatalogObject`, `Criterion`, `MatchFilter`)
//! - `services/` - The matcher
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
