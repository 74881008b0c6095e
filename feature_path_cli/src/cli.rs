//! Command-line arguments.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::DedupMode;

/// Lists the features behind one or more feature paths.
///
/// Values given here take precedence over `FEATURE_PATHS_*` environment
/// variables and the configuration file.
#[derive(Debug, Default, Parser)]
#[command(
    name = "feature-paths",
    bin_name = "feature-paths",
    about = "List the unique features behind feature paths, in execution order",
    version
)]
pub struct Cli {
    /// Feature paths to resolve. `@file` reads a rerun file.
    #[arg(value_name = "FEATURE_PATH")]
    pub features: Vec<String>,
    /// Directory searched for `classpath:` paths. May be repeated.
    #[arg(long = "classpath", value_name = "DIR")]
    pub classpath: Vec<Utf8PathBuf>,
    /// Configuration file to load instead of `.feature-paths.toml`.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config_path: Option<Utf8PathBuf>,
    /// How duplicate features are detected.
    #[arg(long, value_enum, value_name = "MODE")]
    pub dedup: Option<DedupMode>,
    /// Print the canonical form of each feature path without scanning.
    #[arg(long)]
    pub resolve_only: bool,
    /// Log discarded duplicates and scanning at debug level.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
