//! Profile command - list and show saved filter profiles

use crate::cli::app::ProfileAction;
use catmatch::config::FilterProfile;
use catmatch::output::{OutputMode, ProfileListResult};

/// Handle profile subcommands
pub fn profile(action: ProfileAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ProfileAction::List => {
            let result = ProfileListResult {
                profiles: FilterProfile::list_named()?,
            };
            result.render(mode);
            Ok(())
        },
        ProfileAction::Show { name } => show(&name, mode),
    }
}

fn show(name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let profile = FilterProfile::load_named(name)?;

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputMode::Human => {
            println!("Profile: {name}");
            println!();
            print!("{}", toml::to_string_pretty(&profile)?);
        },
    }
    Ok(())
}
