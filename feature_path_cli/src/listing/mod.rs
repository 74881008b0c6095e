//! Resolution and listing of features for the configured feature paths.

use std::collections::BTreeSet;
use std::io::{self, Write as _};

use camino::Utf8Path;
use feature_path::{
    CanonicalPath, FeatureDocument, FeatureSupplier, FeatureWithLines, LineFilters, PathResolver,
    ResourceScanner, SourceParser, rerun,
};
use tracing::debug;

use crate::{Cli, FeaturePathsConfig, Result};

const RERUN_PREFIX: char = '@';

/// Loads the configuration for `cli` and writes the listing to stdout.
///
/// # Errors
///
/// Returns configuration, resolution, scanning and output failures.
pub fn run(cli: &Cli) -> Result<()> {
    let config = FeaturePathsConfig::load(cli)?;
    let resolver = PathResolver::from_environment();
    let lines = list_features(&resolver, &config, cli.resolve_only)?;
    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Returns one output line per feature: `uri`, or `uri:line:line` when
/// line filters apply.
///
/// With `resolve_only` the canonical form of every configured entry is
/// listed instead, in the order given.
///
/// # Errors
///
/// Returns [`crate::CliError::FeaturePath`] when an entry cannot be
/// resolved, a rerun file cannot be read, or a feature fails to parse.
pub fn list_features(
    resolver: &PathResolver,
    config: &FeaturePathsConfig,
    resolve_only: bool,
) -> Result<Vec<String>> {
    let entries = expand_entries(resolver, &config.features)?;
    let mut filters = LineFilters::new();
    filters.extend(&entries);
    let paths: Vec<CanonicalPath> = entries
        .into_iter()
        .map(|entry| entry.into_parts().0)
        .collect();

    if resolve_only {
        return Ok(paths.iter().map(|uri| render(uri, &filters)).collect());
    }

    let scanner =
        ResourceScanner::new(resolver.flavour()).classpath_roots(config.classpath.iter().cloned());
    let features = FeatureSupplier::new(scanner, SourceParser)
        .with_policy(config.dedup.into())
        .supply(&paths)?;
    Ok(features
        .iter()
        .map(FeatureDocument::uri)
        .map(|uri| render(uri, &filters))
        .collect())
}

/// Expands `@file` entries into the rerun entries they list.
fn expand_entries(
    resolver: &PathResolver,
    features: &[String],
) -> Result<Vec<FeatureWithLines>> {
    let mut entries = Vec::new();
    for feature in features {
        if let Some(rerun_file) = feature.strip_prefix(RERUN_PREFIX) {
            let listed = rerun::read_rerun(resolver, Utf8Path::new(rerun_file))?;
            debug!(file = rerun_file, entries = listed.len(), "expanded rerun file");
            entries.extend(listed);
        } else {
            entries.push(FeatureWithLines::parse(resolver, feature)?);
        }
    }
    Ok(entries)
}

fn render(uri: &CanonicalPath, filters: &LineFilters) -> String {
    filters.get(uri).map_or_else(
        || uri.to_string(),
        |lines| format!("{uri}{}", line_suffix(lines)),
    )
}

fn line_suffix(lines: &BTreeSet<u32>) -> String {
    lines.iter().map(|line| format!(":{line}")).collect()
}
