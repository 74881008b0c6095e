//! Tests covering feature deduplication and ordering.

use super::*;
use crate::CanonicalPath;
use rstest::rstest;

const EXAMPLE: &str = "Feature: Example\n";

fn feature(part: &str, source: &str) -> FeatureDocument {
    FeatureDocument::new(CanonicalPath::file(part), "Example", source)
}

fn parts(features: &[FeatureDocument]) -> Vec<&str> {
    features
        .iter()
        .map(|doc| doc.uri().scheme_specific_part())
        .collect()
}

#[test]
fn ignores_identical_features_in_different_directories() {
    let mut collector = FeatureCollector::new();
    assert!(collector.add_unique(feature("/src/example.feature", EXAMPLE)));
    assert!(!collector.add_unique(feature("/build/example.feature", EXAMPLE)));

    let features = collector.build();
    assert_eq!(parts(&features), ["/src/example.feature"]);
}

#[test]
fn duplicate_content_with_different_file_names_is_kept() {
    let mut collector = FeatureCollector::new();
    collector.add_unique(feature("/src/feature1/example-second.feature", EXAMPLE));
    collector.add_unique(feature("/src/feature1/example-first.feature", EXAMPLE));

    let features = collector.build();
    assert_eq!(
        parts(&features),
        [
            "/src/feature1/example-first.feature",
            "/src/feature1/example-second.feature",
        ]
    );
}

#[test]
fn content_policy_collapses_differently_named_copies() {
    let mut collector = FeatureCollector::with_policy(DedupPolicy::Content);
    collector.add_unique(feature("/src/example-first.feature", EXAMPLE));
    collector.add_unique(feature("/src/example-second.feature", EXAMPLE));

    assert_eq!(collector.len(), 1);
}

#[rstest]
#[case::default_collector(FeatureCollector::new(), DedupPolicy::ContentAndFileName)]
#[case::explicit_policy(
    FeatureCollector::with_policy(DedupPolicy::Content),
    DedupPolicy::Content
)]
fn collector_reports_its_policy(
    #[case] collector: FeatureCollector,
    #[case] expected: DedupPolicy,
) {
    assert_eq!(collector.policy(), expected);
}

#[rstest]
#[case::default_policy(DedupPolicy::ContentAndFileName)]
#[case::content_policy(DedupPolicy::Content)]
fn different_content_is_always_kept(#[case] policy: DedupPolicy) {
    let mut collector = FeatureCollector::with_policy(policy);
    collector.add_unique(feature("/src/b/example.feature", "Feature: B\n"));
    collector.add_unique(feature("/src/a/example.feature", "Feature: A\n"));

    let features = collector.build();
    assert_eq!(
        parts(&features),
        ["/src/a/example.feature", "/src/b/example.feature"]
    );
}

#[test]
fn features_are_sorted_by_uri() {
    let mut collector = FeatureCollector::new();
    for name in ["/c.feature", "/b.feature", "/a.feature"] {
        collector.add_unique(feature(name, EXAMPLE));
    }

    let features = collector.build();
    assert_eq!(parts(&features), ["/a.feature", "/b.feature", "/c.feature"]);
}

#[test]
fn third_copy_matching_a_later_name_is_discarded() {
    let mut collector = FeatureCollector::new();
    collector.add_unique(feature("/src/a/first.feature", EXAMPLE));
    collector.add_unique(feature("/src/b/second.feature", EXAMPLE));
    collector.add_unique(feature("/build/b/second.feature", EXAMPLE));

    assert_eq!(collector.len(), 2);
}

#[test]
fn identical_uri_keeps_insertion_order() {
    let mut collector = FeatureCollector::new();
    collector.add_unique(feature("/a.feature", "Feature: First\n"));
    collector.add_unique(feature("/a.feature", "Feature: Second\n"));

    let sources: Vec<String> = collector
        .build()
        .into_iter()
        .map(|doc| doc.source().to_owned())
        .collect();
    assert_eq!(sources, ["Feature: First\n", "Feature: Second\n"]);
}

#[test]
fn empty_collector_builds_empty_list() {
    let collector = FeatureCollector::default();
    assert!(collector.is_empty());
    assert!(collector.build().is_empty());
}

#[test]
fn byte_order_mark_does_not_distinguish_parsed_copies() {
    use crate::{FeatureParser, InMemoryResource, SourceParser};

    let with_mark = InMemoryResource::new(
        CanonicalPath::file("/src/example.feature"),
        "\u{feff}Feature: Example\n",
    );
    let without_mark =
        InMemoryResource::new(CanonicalPath::file("/build/example.feature"), EXAMPLE);

    let mut collector = FeatureCollector::new();
    for resource in [&with_mark, &without_mark] {
        let document = SourceParser
            .parse_resource(resource)
            .expect("feature should parse");
        collector.add_unique(document);
    }

    assert_eq!(parts(&collector.build()), ["/src/example.feature"]);
}
