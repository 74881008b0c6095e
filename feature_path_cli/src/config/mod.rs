//! Layered configuration for the `feature-paths` binary.
//!
//! Layers merge in increasing precedence:
//!
//! 1. built-in defaults;
//! 2. the TOML file named by `--config`, or `.feature-paths.toml` in the
//!    working directory when present;
//! 3. `FEATURE_PATHS_*` environment variables;
//! 4. command-line arguments.
//!
//! ```toml
//! features = ["classpath:com/example", "@target/rerun.txt"]
//! classpath = ["src/test/resources"]
//! dedup = "content"
//! ```

mod env;

use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use feature_path::DedupPolicy;
use figment::Figment;
use figment::providers::{Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Cli, CliError, Result};

pub use env::ListEnv;

/// Prefix of the environment variables read as configuration.
pub const ENV_PREFIX: &str = "FEATURE_PATHS_";
/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".feature-paths.toml";

/// Duplicate detection used when collecting features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// Same content and same file name.
    #[default]
    ContentAndFileName,
    /// Same content, whatever the file is called.
    Content,
}

impl From<DedupMode> for DedupPolicy {
    fn from(mode: DedupMode) -> Self {
        match mode {
            DedupMode::ContentAndFileName => Self::ContentAndFileName,
            DedupMode::Content => Self::Content,
        }
    }
}

/// Merged settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturePathsConfig {
    /// Feature paths, `@` rerun files included.
    pub features: Vec<String>,
    /// Directories searched for `classpath:` paths.
    pub classpath: Vec<Utf8PathBuf>,
    /// Duplicate detection.
    pub dedup: DedupMode,
}

impl Default for FeaturePathsConfig {
    fn default() -> Self {
        Self {
            features: vec![String::from("classpath:/")],
            classpath: vec![Utf8PathBuf::from(".")],
            dedup: DedupMode::default(),
        }
    }
}

/// Command-line values that override the other layers when given.
#[derive(Debug, Serialize)]
struct CliLayer {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    features: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classpath: Vec<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dedup: Option<DedupMode>,
}

impl From<&Cli> for CliLayer {
    fn from(cli: &Cli) -> Self {
        Self {
            features: cli.features.clone(),
            classpath: cli.classpath.clone(),
            dedup: cli.dedup,
        }
    }
}

impl FeaturePathsConfig {
    /// Merges every layer for `cli`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingConfigFile`] when `--config` names a
    /// missing file and [`CliError::Configuration`] when a layer fails to
    /// parse or deserialise.
    pub fn load(cli: &Cli) -> Result<Self> {
        Ok(Self::figment(cli)?.extract()?)
    }

    /// Builds the layered figment without extracting it.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingConfigFile`] when `--config` names a
    /// missing file.
    pub fn figment(cli: &Cli) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file(cli.config_path.as_deref())? {
            debug!(%path, "loading configuration file");
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        Ok(figment
            .merge(ListEnv::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(CliLayer::from(cli))))
    }
}

fn config_file(explicit: Option<&Utf8Path>) -> Result<Option<Utf8PathBuf>> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(Some(path.to_owned()))
        } else {
            Err(CliError::MissingConfigFile {
                path: path.to_owned(),
            })
        };
    }
    let default = Utf8Path::new(DEFAULT_CONFIG_FILE);
    Ok(default.is_file().then(|| default.to_owned()))
}
