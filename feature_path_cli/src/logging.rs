//! Diagnostic output on stderr.

use tracing_subscriber::EnvFilter;

use crate::{CliError, Result};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Installs the global subscriber.
///
/// `RUST_LOG` selects the filter, defaulting to warnings only; `verbose`
/// forces debug output.
///
/// # Errors
///
/// Returns [`CliError::Logging`] when a global subscriber is already set.
pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
