//! Command implementations

mod match_catalog;
mod profile;

pub use match_catalog::match_catalog;
pub use profile::profile;
