//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use catmatch::core::models::Criterion;
use catmatch::output::OutputMode;

/// catmatch - Select schema catalog objects by type, schema and name
#[derive(Parser, Debug)]
#[command(
    name = "catmatch",
    version,
    about = "Select schema catalog objects by type, schema and name",
    long_about = "Filter a catalog of database objects with include/exclude criteria.\n\n\
                  Criteria constrain type (exact), schema and name (exact, `prefix*` or `*`).\n\
                  Matching is case-insensitive."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select the catalog objects matching a filter
    Match(MatchArgs),

    /// Inspect saved filter profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show version
    Version,
}

/// Arguments of the `match` command
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// Catalog file (.json or .toml)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Named filter profile to start from
    #[arg(short, long, conflicts_with = "filter")]
    pub profile: Option<String>,

    /// Filter profile file to start from
    #[arg(short, long)]
    pub filter: Option<PathBuf>,

    /// Include criterion, `[type:][schema.]name` (repeatable)
    #[arg(short, long, value_parser = parse_criterion)]
    pub include: Vec<Criterion>,

    /// Exclude criterion, `[type:][schema.]name` (repeatable)
    #[arg(short, long, value_parser = parse_criterion)]
    pub exclude: Vec<Criterion>,

    /// Keep only objects in this schema (`*` and `prefix*` allowed, repeatable)
    #[arg(long)]
    pub include_schema: Vec<String>,

    /// Drop objects in this schema (`*` and `prefix*` allowed, repeatable)
    #[arg(long)]
    pub exclude_schema: Vec<String>,

    /// Keep only objects of this type (repeatable)
    #[arg(long)]
    pub include_type: Vec<String>,

    /// Drop objects of this type (repeatable)
    #[arg(long)]
    pub exclude_type: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List saved profiles
    List,

    /// Show a saved profile
    Show {
        /// Profile name
        name: String,
    },
}

fn parse_criterion(s: &str) -> Result<Criterion, String> {
    s.parse()
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Match(args)) => commands::match_catalog(args, output_mode),
        Some(Command::Profile { action }) => commands::profile(action, output_mode),
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        None => {
            print_version(output_mode);
            if output_mode == OutputMode::Human {
                println!("\nRun 'catmatch --help' for usage");
            }
            Ok(())
        },
    }
}

fn print_version(mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("catmatch v{}", env!("CARGO_PKG_VERSION"));
    }
}
