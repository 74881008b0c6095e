//! End-to-end supply of features from canonical paths.

use tracing::{info, warn};

use crate::{
    CanonicalPath, DedupPolicy, FeatureCollector, FeatureDocument, FeatureParser,
    FeaturePathError, FeaturePathResult, ResourceScanner, SourceParser,
};

/// Scans, parses and collects the features named by a list of paths.
///
/// # Examples
///
/// ```rust,no_run
/// use feature_path::{FeatureSupplier, PathFlavour, ResourceScanner, SourceParser};
///
/// # fn run() -> feature_path::FeaturePathResult<()> {
/// let scanner = ResourceScanner::new(PathFlavour::native());
/// let supplier = FeatureSupplier::new(scanner, SourceParser);
/// let features = supplier.supply(&[feature_path::parse("features")?])?;
/// for feature in &features {
///     println!("{} ({})", feature.uri(), feature.name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeatureSupplier<P = SourceParser> {
    scanner: ResourceScanner,
    parser: P,
    policy: DedupPolicy,
}

impl<P: FeatureParser> FeatureSupplier<P> {
    /// Creates a supplier using the default [`DedupPolicy`].
    #[must_use]
    pub fn new(scanner: ResourceScanner, parser: P) -> Self {
        Self {
            scanner,
            parser,
            policy: DedupPolicy::default(),
        }
    }

    /// Overrides the deduplication policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DedupPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the unique features behind `feature_paths`, sorted by URI.
    ///
    /// Paths that yield no feature are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns the scanner's errors unchanged and wraps parser failures in
    /// [`FeaturePathError::Parse`].
    pub fn supply(&self, feature_paths: &[CanonicalPath]) -> FeaturePathResult<Vec<FeatureDocument>> {
        let mut collector = FeatureCollector::with_policy(self.policy);
        for feature_path in feature_paths {
            let resources = self.scanner.scan(feature_path)?;
            if resources.is_empty() {
                warn!(uri = %feature_path, "No features found at {feature_path}");
                continue;
            }
            for resource in &resources {
                let document = self
                    .parser
                    .parse_resource(resource.as_ref())
                    .map_err(|source| FeaturePathError::Parse {
                        uri: resource.uri().clone(),
                        source,
                    })?;
                collector.add_unique(document);
            }
        }
        let features = collector.build();
        info!(count = features.len(), "collected features");
        Ok(features)
    }
}
