//! Catalog matcher service - selects catalog objects by criteria
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. include criteria (OR) pick the starting set, or every candidate if none
//! 2. exclude criteria remove their matches, one criterion at a time
//! 3. excluded schemas, then excluded types, are removed
//! 4. included schemas, then included types, narrow what is left
//!
//! Results keep candidate order. Without include criteria the starting set
//! is the whole candidate list, duplicates included; the union of include
//! criteria holds each `(type, schema, name)` once.

use std::collections::HashSet;

use crate::core::models::{CatalogObject, Criterion, MatchError, MatchFilter, Pattern};

/// Working set carried between stages
type WorkingSet<'a> = Vec<&'a CatalogObject>;

/// Select the candidates that satisfy a filter
///
/// # Arguments
///
/// * `candidates` - The catalog to filter; `None` is rejected
/// * `filter` - Include/exclude constraints
///
/// # Errors
///
/// Returns [`MatchError::InvalidArgument`] if `candidates` is `None`.
///
/// # Examples
///
/// ```
/// use catmatch::core::models::{CatalogObject, Criterion, MatchFilter};
/// use catmatch::core::services::match_objects;
///
/// let catalog = vec![
///     CatalogObject::new("Table", "dbo", "Employee"),
///     CatalogObject::new("Table", "dbo", "Customer"),
/// ];
/// let filter = MatchFilter::new().include(Criterion::any().with_name("Emp*"));
///
/// let found = match_objects(Some(catalog.as_slice()), &filter).unwrap();
/// assert_eq!(found, vec![CatalogObject::new("Table", "dbo", "Employee")]);
/// ```
pub fn match_objects(
    candidates: Option<&[CatalogObject]>,
    filter: &MatchFilter,
) -> Result<Vec<CatalogObject>, MatchError> {
    let candidates = candidates.ok_or(MatchError::invalid_argument("candidates"))?;

    let mut working = include_by_criteria(candidates, &filter.include);
    log::debug!(
        "include criteria: {} of {} candidate(s) kept",
        working.len(),
        candidates.len()
    );

    for criterion in &filter.exclude {
        let before = working.len();
        working = exclude_matching(working, criterion);
        log::trace!("exclude {criterion}: removed {}", before - working.len());
    }
    log::debug!("exclude criteria: {} remaining", working.len());

    for schema in &filter.exclude_schemas {
        let pattern = Pattern::wildcard(Some(schema.as_str()));
        working.retain(|o| !pattern.matches(o.schema()));
    }
    for object_type in &filter.exclude_types {
        let pattern = Pattern::literal(Some(object_type.as_str()));
        working.retain(|o| !pattern.matches(o.object_type()));
    }
    log::debug!("exclude schemas/types: {} remaining", working.len());

    if !filter.include_schemas.is_empty() {
        let patterns: Vec<Pattern> =
            filter.include_schemas.iter().map(|s| Pattern::wildcard(Some(s.as_str()))).collect();
        working.retain(|o| patterns.iter().any(|p| p.matches(o.schema())));
    }
    if !filter.include_types.is_empty() {
        let patterns: Vec<Pattern> =
            filter.include_types.iter().map(|t| Pattern::literal(Some(t.as_str()))).collect();
        working.retain(|o| patterns.iter().any(|p| p.matches(o.object_type())));
    }
    log::debug!("include schemas/types: {} matched", working.len());

    Ok(working.into_iter().cloned().collect())
}

/// Select candidates using at most one constraint of each kind
///
/// A `None` argument imposes no constraint. This wraps each present value
/// into a one-element list and delegates to [`match_objects`].
///
/// # Errors
///
/// Returns [`MatchError::InvalidArgument`] if `candidates` is `None`.
pub fn match_single(
    include: Option<Criterion>,
    exclude: Option<Criterion>,
    include_schema: Option<&str>,
    exclude_schema: Option<&str>,
    include_type: Option<&str>,
    exclude_type: Option<&str>,
    candidates: Option<&[CatalogObject]>,
) -> Result<Vec<CatalogObject>, MatchError> {
    let filter = MatchFilter::single(
        include,
        exclude,
        include_schema,
        exclude_schema,
        include_type,
        exclude_type,
    );
    match_objects(candidates, &filter)
}

/// Select the distinct candidates matching one criterion
///
/// # Errors
///
/// Returns [`MatchError::InvalidArgument`] if `candidates` or `criterion` is `None`.
pub fn match_criterion(
    candidates: Option<&[CatalogObject]>,
    criterion: Option<&Criterion>,
) -> Result<Vec<CatalogObject>, MatchError> {
    let candidates = candidates.ok_or(MatchError::invalid_argument("candidates"))?;
    let criterion = criterion.ok_or(MatchError::invalid_argument("criterion"))?;

    let compiled = criterion.compile();
    let matched = distinct(candidates.iter().filter(|o| compiled.matches(o)));
    Ok(matched.into_iter().cloned().collect())
}

/// Union of the candidates matching any include criterion
fn include_by_criteria<'a>(
    candidates: &'a [CatalogObject],
    include: &[Criterion],
) -> WorkingSet<'a> {
    if include.is_empty() {
        return candidates.iter().collect();
    }
    let compiled: Vec<_> = include.iter().map(Criterion::compile).collect();
    distinct(candidates.iter().filter(|o| compiled.iter().any(|c| c.matches(o))))
}

/// Remove the objects of the working set matching one criterion
///
/// Matches are computed against the set as it stands after earlier
/// exclusions, then subtracted by value.
fn exclude_matching<'a>(working: WorkingSet<'a>, criterion: &Criterion) -> WorkingSet<'a> {
    let compiled = criterion.compile();
    let matched: HashSet<&CatalogObject> =
        working.iter().copied().filter(|o| compiled.matches(o)).collect();
    if matched.is_empty() {
        return working;
    }
    working.into_iter().filter(|o| !matched.contains(o)).collect()
}

/// Keep the first occurrence of each distinct object
fn distinct<'a>(objects: impl Iterator<Item = &'a CatalogObject>) -> WorkingSet<'a> {
    let mut seen = HashSet::new();
    objects.filter(|o| seen.insert(*o)).collect()
}
