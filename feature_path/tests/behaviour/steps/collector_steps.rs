//! Steps for deduplicating and ordering parsed features.

use crate::fixtures::CollectorContext;
use anyhow::{Result, anyhow, ensure};
use feature_path::{
    DedupPolicy, FeatureCollector, FeatureParser as _, InMemoryResource, PathFlavour,
    PathResolver, SourceParser,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{list, unquote};

#[given("a feature {uri} containing {source}")]
fn add_feature(collector_context: &CollectorContext, uri: String, source: String) -> Result<()> {
    let uri = PathResolver::new(PathFlavour::Unix, "/").parse(unquote(&uri))?;
    let resource = InMemoryResource::new(uri, unquote(&source));
    let document = SourceParser.parse_resource(&resource)?;
    let mut documents = collector_context.documents.get_or_insert_with(Vec::new);
    documents.push(document);
    Ok(())
}

fn collect(collector_context: &CollectorContext, policy: DedupPolicy) -> Result<()> {
    let documents = collector_context
        .documents
        .take()
        .ok_or_else(|| anyhow!("no features given"))?;
    let mut collector = FeatureCollector::with_policy(policy);
    for document in documents {
        collector.add_unique(document);
    }
    collector_context.collected.set(collector.build());
    Ok(())
}

#[when("the features are collected")]
fn collect_default(collector_context: &CollectorContext) -> Result<()> {
    collect(collector_context, DedupPolicy::default())
}

#[when("the features are collected by content only")]
fn collect_by_content(collector_context: &CollectorContext) -> Result<()> {
    collect(collector_context, DedupPolicy::Content)
}

#[then("{count:usize} feature is collected")]
fn count_collected(collector_context: &CollectorContext, count: usize) -> Result<()> {
    let collected = collector_context
        .collected
        .get()
        .ok_or_else(|| anyhow!("features not collected"))?;
    ensure!(
        collected.len() == count,
        "expected {count} features, got {}",
        collected.len()
    );
    Ok(())
}

#[then("the collected features are {uris}")]
fn collected_are(collector_context: &CollectorContext, uris: String) -> Result<()> {
    let collected = collector_context
        .collected
        .get()
        .ok_or_else(|| anyhow!("features not collected"))?;
    let found: Vec<String> = collected.iter().map(|doc| doc.uri().to_string()).collect();
    ensure!(found == list(&uris), "unexpected features {found:?}");
    Ok(())
}
