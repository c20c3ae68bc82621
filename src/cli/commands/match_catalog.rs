//! Match command - filter a catalog file

use crate::cli::app::MatchArgs;
use catmatch::adapters::FileCatalog;
use catmatch::config::FilterProfile;
use catmatch::core::models::MatchFilter;
use catmatch::core::ports::CatalogSource;
use catmatch::core::services::match_objects;
use catmatch::output::{MatchReport, OutputMode};

/// Load the catalog, build the filter and print the matching objects
pub fn match_catalog(args: MatchArgs, mode: OutputMode) -> anyhow::Result<()> {
    let source = FileCatalog::new(&args.catalog);
    let candidates = source.load()?;

    let filter = build_filter(args)?;
    log::debug!("filter: {filter:?}");

    let objects = match_objects(Some(candidates.as_slice()), &filter)?;
    MatchReport::new(source.name(), candidates.len(), objects).render(mode);
    Ok(())
}

/// Start from the selected profile, then append command-line constraints
fn build_filter(args: MatchArgs) -> anyhow::Result<MatchFilter> {
    let mut filter = match (&args.profile, &args.filter) {
        (Some(name), _) => FilterProfile::load_named(name)?.into_filter(),
        (None, Some(path)) => FilterProfile::load(path)?.into_filter(),
        (None, None) => MatchFilter::new(),
    };

    filter.extend(MatchFilter {
        include: args.include,
        exclude: args.exclude,
        include_schemas: args.include_schema,
        exclude_schemas: args.exclude_schema,
        include_types: args.include_type,
        exclude_types: args.exclude_type,
    });
    Ok(filter)
}
