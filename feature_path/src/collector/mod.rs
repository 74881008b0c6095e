//! Deduplication and ordering of parsed feature documents.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::FeatureDocument;

/// Rule deciding when two documents count as the same feature.
///
/// Sources are compared as the parser stored them. [`crate::SourceParser`]
/// drops a leading UTF-8 byte-order mark, so copies that differ only by one
/// count as identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Identical source under the same file name is one feature, wherever
    /// it was loaded from. Identical source under different file names is
    /// kept twice.
    #[default]
    ContentAndFileName,
    /// Identical source is one feature, whatever the file is called.
    Content,
}

/// Accumulates parsed features and hands them back unique and sorted.
///
/// Uniqueness is decided by source text rather than location: a feature
/// copied verbatim from `src/` into a build output directory is only run
/// once. Two unrelated features that happen to share identical text (and,
/// under the default policy, a file name) also collapse into one, which can
/// be surprising when it happens by accident.
///
/// # Examples
///
/// ```
/// use feature_path::{CanonicalPath, FeatureCollector, FeatureDocument};
///
/// let source = "Feature: Example\n";
/// let mut collector = FeatureCollector::new();
/// collector.add_unique(FeatureDocument::new(
///     CanonicalPath::file("/src/example.feature"),
///     "Example",
///     source,
/// ));
/// collector.add_unique(FeatureDocument::new(
///     CanonicalPath::file("/build/example.feature"),
///     "Example",
///     source,
/// ));
///
/// let features = collector.build();
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].uri().scheme_specific_part(), "/src/example.feature");
/// ```
#[derive(Debug, Default)]
pub struct FeatureCollector {
    policy: DedupPolicy,
    features: Vec<FeatureDocument>,
    /// Source fingerprint to indices into `features`.
    by_source: HashMap<u64, Vec<usize>>,
}

impl FeatureCollector {
    /// Creates an empty collector using [`DedupPolicy::ContentAndFileName`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collector using `policy`.
    #[must_use]
    pub fn with_policy(policy: DedupPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the deduplication policy in force.
    #[must_use]
    pub const fn policy(&self) -> DedupPolicy {
        self.policy
    }

    /// Number of features accepted so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` when no feature has been accepted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Adds `document` unless an equivalent feature was already accepted.
    ///
    /// Returns whether the document was kept. Discarded duplicates are
    /// logged at debug level.
    pub fn add_unique(&mut self, document: FeatureDocument) -> bool {
        let fingerprint = fingerprint(document.source());
        if let Some(existing) = self.find_duplicate(fingerprint, &document) {
            debug!(
                discarded = %document.uri(),
                kept = %existing.uri(),
                "discarding feature with duplicate content"
            );
            return false;
        }
        self.by_source
            .entry(fingerprint)
            .or_default()
            .push(self.features.len());
        self.features.push(document);
        true
    }

    /// Finishes collection, returning the features sorted by URI.
    ///
    /// The sort is stable, so features sharing a URI keep insertion order.
    #[must_use]
    pub fn build(self) -> Vec<FeatureDocument> {
        let mut features = self.features;
        features.sort_by(|left, right| left.uri().cmp(right.uri()));
        features
    }

    fn find_duplicate(&self, fingerprint: u64, document: &FeatureDocument) -> Option<&FeatureDocument> {
        self.by_source
            .get(&fingerprint)?
            .iter()
            .filter_map(|&index| self.features.get(index))
            .find(|existing| self.is_duplicate(existing, document))
    }

    fn is_duplicate(&self, existing: &FeatureDocument, candidate: &FeatureDocument) -> bool {
        if existing.source() != candidate.source() {
            return false;
        }
        match self.policy {
            DedupPolicy::Content => true,
            DedupPolicy::ContentAndFileName => {
                existing.uri().file_name() == candidate.uri().file_name()
            }
        }
    }
}

fn fingerprint(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests;
