//! Scenario state shared between behavioural steps.

use feature_path::{CanonicalPath, FeatureDocument, FeaturePathError, PathResolver};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State for resolving identifiers.
#[derive(Debug, Default, ScenarioState)]
pub struct PathContext {
    pub resolver: Slot<PathResolver>,
    pub parsed: Slot<CanonicalPath>,
    pub lines: Slot<Vec<u32>>,
    pub failure: Slot<FeaturePathError>,
}

/// State for deduplicating parsed documents.
#[derive(Debug, Default, ScenarioState)]
pub struct CollectorContext {
    pub documents: Slot<Vec<FeatureDocument>>,
    pub collected: Slot<Vec<FeatureDocument>>,
}

/// State for supplying features from a suite on disk.
#[derive(Debug, Default, ScenarioState)]
pub struct SupplyContext {
    pub files: Slot<Vec<(String, String)>>,
    pub supplied: Slot<Vec<FeatureDocument>>,
    pub failure: Slot<FeaturePathError>,
}

#[fixture]
pub fn path_context() -> PathContext {
    PathContext::default()
}

#[fixture]
pub fn collector_context() -> CollectorContext {
    CollectorContext::default()
}

#[fixture]
pub fn supply_context() -> SupplyContext {
    SupplyContext::default()
}
