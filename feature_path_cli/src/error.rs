//! Error types for the `feature-paths` binary.
//!
//! `CliError` wraps library and configuration failures so `main` can report
//! them through `color-eyre`.

use std::io;

use camino::Utf8PathBuf;
use feature_path::FeaturePathError;
use thiserror::Error;

/// Errors raised while listing features.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration layers could not be merged or deserialised.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Box<figment::Error>),
    /// The file named by `--config` does not exist.
    #[error("configuration file {path} does not exist")]
    MissingConfigFile {
        /// Path given on the command line.
        path: Utf8PathBuf,
    },
    /// Resolving, scanning or parsing features failed.
    #[error(transparent)]
    FeaturePath(#[from] FeaturePathError),
    /// Writing the listing failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// A global tracing subscriber was already installed.
    #[error("failed to install logging: {0}")]
    Logging(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(Box::new(err))
    }
}

/// Result alias for the binary.
pub type Result<T> = std::result::Result<T, CliError>;
