//! Command-line front end for `feature_path`.
//!
//! Resolves feature paths from the command line, a configuration file and
//! the environment, then lists the unique features behind them in
//! execution order.

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;

pub use cli::Cli;
pub use config::{DedupMode, FeaturePathsConfig};
pub use error::{CliError, Result};
pub use listing::{list_features, run};
