//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Select catalog objects by include/exclude criteria

pub mod matcher;

pub use matcher::{match_criterion, match_objects, match_single};
