//! Steps for supplying features from a suite on disk.

use crate::fixtures::SupplyContext;
use anyhow::{Result, anyhow, bail, ensure};
use feature_path::{
    FeaturePathError, FeatureSupplier, PathFlavour, PathResolver, ResourceScanner, SourceParser,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::suite::TempSuite;
use test_helpers::text::{list, unquote};

#[given("a suite file {relative} containing {source}")]
fn write_suite_file(supply_context: &SupplyContext, relative: String, source: String) -> Result<()> {
    let mut files = supply_context.files.get_or_insert_with(Vec::new);
    files.push((unquote(&relative).to_owned(), format!("{}\n", unquote(&source))));
    Ok(())
}

#[when("the feature path {identifier} is supplied")]
fn supply(supply_context: &SupplyContext, identifier: String) -> Result<()> {
    let files = supply_context
        .files
        .take()
        .ok_or_else(|| anyhow!("no suite files given"))?;
    let suite = TempSuite::new()?;
    for (relative, contents) in &files {
        suite.write(relative, contents)?;
    }
    let resolver = PathResolver::new(PathFlavour::native(), suite.root().as_str());
    let scanner = ResourceScanner::new(PathFlavour::native())
        .add_classpath_root(suite.path("src"))
        .add_classpath_root(suite.path("build"));
    let paths = [resolver.parse(unquote(&identifier))?];
    match FeatureSupplier::new(scanner, SourceParser).supply(&paths) {
        Ok(features) => supply_context.supplied.set(features),
        Err(err) => supply_context.failure.set(err),
    }
    Ok(())
}

#[then("the supplied features are {uris}")]
fn supplied_are(supply_context: &SupplyContext, uris: String) -> Result<()> {
    let supplied = supply_context
        .supplied
        .take()
        .ok_or_else(|| anyhow!("no features supplied"))?;
    let found: Vec<String> = supplied.iter().map(|doc| doc.uri().to_string()).collect();
    ensure!(found == list(&uris), "unexpected features {found:?}");
    Ok(())
}

#[then("no features are supplied")]
fn none_supplied(supply_context: &SupplyContext) -> Result<()> {
    let supplied = supply_context
        .supplied
        .take()
        .ok_or_else(|| anyhow!("supplying did not succeed"))?;
    ensure!(supplied.is_empty(), "expected no features, got {}", supplied.len());
    Ok(())
}

#[then("supplying fails for {uri}")]
fn supplying_fails(supply_context: &SupplyContext, uri: String) -> Result<()> {
    let err = supply_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("expected supplying to fail"))?;
    match err {
        FeaturePathError::Parse { uri: failed, .. } => {
            ensure!(failed.to_string() == unquote(&uri), "unexpected uri {failed}");
            Ok(())
        }
        other => bail!("unexpected error {other}"),
    }
}
