//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::CatalogObject;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a match operation
#[derive(Debug, Serialize)]
pub struct MatchReport {
    /// Where the candidates came from
    pub catalog: String,
    /// Number of candidates considered
    pub candidates: usize,
    /// Number of objects selected
    pub matched: usize,
    /// The selected objects
    pub objects: Vec<CatalogObject>,
}

/// Result of a profile list operation
#[derive(Debug, Serialize)]
pub struct ProfileListResult {
    /// Profile names
    pub profiles: Vec<String>,
}

impl MatchReport {
    /// Build a report from a match result
    #[must_use]
    pub fn new(catalog: impl Into<String>, candidates: usize, objects: Vec<CatalogObject>) -> Self {
        Self {
            catalog: catalog.into(),
            candidates,
            matched: objects.len(),
            objects,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text, one object per line and a summary
    #[must_use]
    pub fn to_human(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        if self.objects.is_empty() {
            let _ = writeln!(out, "No objects matched.");
        } else {
            for object in &self.objects {
                let _ = writeln!(out, "  {object}");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(
            out,
            "Matched {} of {} object(s) in {}",
            self.matched, self.candidates, self.catalog
        );
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ProfileListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.profiles.is_empty() {
            println!("No profiles found.");
            return;
        }

        println!("Profiles:\n");
        for name in &self.profiles {
            println!("  {name}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
