//! Steps for resolving feature identifiers.

use crate::fixtures::PathContext;
use anyhow::{Result, anyhow, bail, ensure};
use feature_path::{CanonicalPath, FeatureWithLines, PathFlavour, PathResolver};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{list, unquote};

fn resolver(path_context: &PathContext) -> Result<PathResolver> {
    path_context
        .resolver
        .get()
        .ok_or_else(|| anyhow!("resolver not configured"))
}

fn parsed(path_context: &PathContext) -> Result<CanonicalPath> {
    if let Some(err) = path_context.failure.take() {
        bail!("identifier failed to parse: {err}");
    }
    path_context
        .parsed
        .get()
        .ok_or_else(|| anyhow!("no identifier parsed"))
}

#[given("a {flavour} resolver working in {working_dir}")]
fn configure_resolver(path_context: &PathContext, flavour: String, working_dir: String) -> Result<()> {
    let flavour = match flavour.as_str() {
        "unix" => PathFlavour::Unix,
        "windows" => PathFlavour::Windows,
        other => bail!("unknown path flavour '{other}'; expected 'unix' or 'windows'"),
    };
    path_context
        .resolver
        .set(PathResolver::new(flavour, unquote(&working_dir)));
    Ok(())
}

#[when("the feature path {identifier} is parsed")]
fn parse_identifier(path_context: &PathContext, identifier: String) -> Result<()> {
    match resolver(path_context)?.parse(unquote(&identifier)) {
        Ok(uri) => path_context.parsed.set(uri),
        Err(err) => path_context.failure.set(err),
    }
    Ok(())
}

#[when("the entry {entry} is parsed with lines")]
fn parse_entry(path_context: &PathContext, entry: String) -> Result<()> {
    let (uri, lines) = FeatureWithLines::parse(&resolver(path_context)?, unquote(&entry))?.into_parts();
    path_context.parsed.set(uri);
    path_context.lines.set(lines.into_iter().collect());
    Ok(())
}

#[then("parsing fails with {message}")]
fn parsing_fails(path_context: &PathContext, message: String) -> Result<()> {
    let err = path_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("expected a parse failure"))?;
    ensure!(
        err.to_string() == unquote(&message),
        "unexpected error message {err}"
    );
    Ok(())
}

#[then("the scheme is {scheme}")]
fn scheme_is(path_context: &PathContext, scheme: String) -> Result<()> {
    let uri = parsed(path_context)?;
    ensure!(uri.scheme().as_str() == unquote(&scheme), "unexpected scheme in {uri}");
    Ok(())
}

#[then("the scheme-specific part is {part}")]
fn part_is(path_context: &PathContext, part: String) -> Result<()> {
    let uri = parsed(path_context)?;
    ensure!(
        uri.scheme_specific_part() == unquote(&part),
        "unexpected scheme-specific part in {uri}"
    );
    Ok(())
}

#[then("the uri is {expected}")]
fn uri_is(path_context: &PathContext, expected: String) -> Result<()> {
    let uri = parsed(path_context)?;
    ensure!(uri.to_string() == unquote(&expected), "unexpected uri {uri}");
    Ok(())
}

#[then("the lines are {lines}")]
fn lines_are(path_context: &PathContext, lines: String) -> Result<()> {
    let found = path_context
        .lines
        .take()
        .ok_or_else(|| anyhow!("no entry parsed with lines"))?;
    let expected = list(&lines)
        .iter()
        .map(|line| line.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;
    ensure!(found == expected, "unexpected lines {found:?}");
    Ok(())
}
