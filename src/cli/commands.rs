// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the subcommands and all their configurable flags:
//
//   explore  - shape + describe + feature/target split (default)
//   split    - feature/target split followed by train/test split
//   list     - names of the available example datasets
//
// Every flag has a default, so `sample-eda` with no arguments
// runs the plain exploration of diamonds with price as target.
//
// clap's derive macros generate --help text, error messages for
// bad values, and string → number conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::application::{explore_use_case::ExploreConfig, split_use_case::SplitConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shape and summary statistics, then split features/target
    Explore(ExploreArgs),

    /// Split features/target and then rows into train/test sets
    Split(SplitArgs),

    /// List the example datasets (cached ones are marked)
    List,
}

/// Where datasets come from; shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory caching downloaded datasets [default: ~/seaborn-data]
    #[arg(long, global = true, env = "SEABORN_DATA")]
    pub data_home: Option<PathBuf>,

    /// Fail instead of downloading when a dataset is not cached
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// All arguments for the `explore` command
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Name of the example dataset
    #[arg(long, default_value = "diamonds")]
    pub dataset: String,

    /// Column to predict; every other column becomes a feature
    #[arg(long, default_value = "price")]
    pub target: String,

    /// Also print the first N rows
    #[arg(long = "head", default_value_t = 0)]
    pub head_rows: usize,

    /// Also summarise categorical columns (count / unique / top / freq)
    #[arg(long)]
    pub include_categorical: bool,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Convert CLI ExploreArgs into the application-layer ExploreConfig.
/// The application layer never sees clap types.
impl From<ExploreArgs> for ExploreConfig {
    fn from(a: ExploreArgs) -> Self {
        ExploreConfig {
            dataset:             a.dataset,
            target:              a.target,
            head_rows:           a.head_rows,
            include_categorical: a.include_categorical,
        }
    }
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Name of the example dataset
    #[arg(long, default_value = "diamonds")]
    pub dataset: String,

    /// Column to predict; every other column becomes a feature
    #[arg(long, default_value = "price")]
    pub target: String,

    /// Fraction of rows held out for testing, strictly between 0 and 1
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Seed for the row shuffle; the same seed gives the same split
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            dataset:   a.dataset,
            target:    a.target,
            test_size: a.test_size,
            seed:      a.seed,
        }
    }
}
