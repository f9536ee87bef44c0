// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All work is delegated to Layer 2 (application); this layer
// only builds the loader, routes, and prints.
//
// Three commands are supported:
//   1. `explore` - shape + describe + feature/target split
//                  (also what runs when no command is given)
//   2. `split`   - train/test split of X and y
//   3. `list`    - available example datasets
//
// stdout carries the report only; progress logs go to stderr
// through tracing.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Report → text
pub mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::{
    explore_use_case::{ExploreConfig, ExploreUseCase},
    split_use_case::{SplitConfig, SplitUseCase},
};
use crate::data::{loader::CachedLoader, registry};
use crate::infra::cache::DataHome;
use commands::{Commands, OutputFormat, SourceArgs};

/// The main CLI struct. clap reads the fields and generates
/// argument parsing code via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sample-eda",
    version,
    about = "Load an example dataset, summarise it, and split it into features and target."
)]
pub struct Cli {
    /// The subcommand to run (defaults to `explore`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl Cli {
    /// Match on the subcommand and dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        let Cli { command, source } = self;

        match command {
            None => run_explore(&source, ExploreConfig::default(), OutputFormat::Table),
            Some(Commands::Explore(args)) => {
                let format = args.format;
                run_explore(&source, args.into(), format)
            }
            Some(Commands::Split(args)) => {
                let format = args.format;
                run_split(&source, args.into(), format)
            }
            Some(Commands::List) => run_list(&source),
        }
    }
}

/// Log filter used when RUST_LOG is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "sample_eda=info";

/// Build the log filter from the RUST_LOG value, if any.
/// An explicit RUST_LOG replaces the default entirely.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn loader(source: &SourceArgs) -> Result<CachedLoader> {
    let data_home = DataHome::resolve(source.data_home.clone())?;
    Ok(CachedLoader::new(data_home, source.offline))
}

fn run_explore(source: &SourceArgs, config: ExploreConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!("Explore config: {}", serde_json::to_string(&config)?);

    let use_case = ExploreUseCase::new(config, loader(source)?);
    let report   = use_case.execute()?;

    match format {
        OutputFormat::Table => print!("{}", render::explore_report(&report)),
        OutputFormat::Json  => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_split(source: &SourceArgs, config: SplitConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!("Split config: {}", serde_json::to_string(&config)?);

    let use_case = SplitUseCase::new(config, loader(source)?);
    let report   = use_case.execute()?;

    match format {
        OutputFormat::Table => print!("{}", render::split_report(&report)),
        OutputFormat::Json  => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_list(source: &SourceArgs) -> Result<()> {
    let data_home = DataHome::resolve(source.data_home.clone())?;

    for name in registry::names() {
        let spec = registry::lookup(name)?;
        if data_home.contains(&spec.file_name()) {
            println!("{name} (cached)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
