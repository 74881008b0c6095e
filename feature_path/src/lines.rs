//! Feature paths carrying `:<line>` scenario filters.

use std::collections::{BTreeMap, BTreeSet};

use crate::{CanonicalPath, FeaturePathError, FeaturePathResult, PathResolver};

/// A feature path plus the lines selecting scenarios inside it.
///
/// # Examples
///
/// ```
/// use feature_path::{FeatureWithLines, PathFlavour, PathResolver};
///
/// let resolver = PathResolver::new(PathFlavour::Unix, "/suite");
/// let entry = FeatureWithLines::parse(&resolver, "features/login.feature:3:12")?;
/// assert_eq!(entry.uri().to_string(), "file:/suite/features/login.feature");
/// assert_eq!(entry.lines().iter().copied().collect::<Vec<_>>(), [3, 12]);
/// # Ok::<(), feature_path::FeaturePathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureWithLines {
    uri: CanonicalPath,
    lines: BTreeSet<u32>,
}

impl FeatureWithLines {
    /// Creates an entry from a resolved URI and its lines.
    #[must_use]
    pub const fn new(uri: CanonicalPath, lines: BTreeSet<u32>) -> Self {
        Self { uri, lines }
    }

    /// Splits trailing `:<line>` groups off `entry` and resolves the rest.
    ///
    /// # Errors
    ///
    /// Returns [`FeaturePathError::InvalidArgument`] when `entry` is empty
    /// and [`FeaturePathError::InvalidLine`] when a line is zero or does not
    /// fit in a `u32`.
    pub fn parse(resolver: &PathResolver, entry: &str) -> FeaturePathResult<Self> {
        let (path, suffix) = split_line_suffix(entry);
        let uri = resolver.parse(path)?;
        let lines = suffix
            .split(':')
            .filter(|value| !value.is_empty())
            .map(|value| parse_line(entry, value))
            .collect::<FeaturePathResult<BTreeSet<u32>>>()?;
        Ok(Self { uri, lines })
    }

    /// Returns the resolved feature path.
    #[must_use]
    pub const fn uri(&self) -> &CanonicalPath {
        &self.uri
    }

    /// Returns the selected lines; empty selects the whole feature.
    #[must_use]
    pub const fn lines(&self) -> &BTreeSet<u32> {
        &self.lines
    }

    /// Splits the entry into its URI and lines.
    #[must_use]
    pub fn into_parts(self) -> (CanonicalPath, BTreeSet<u32>) {
        (self.uri, self.lines)
    }
}

/// Scenario line filters keyed by feature URI.
///
/// Entries for the same URI merge; entries without lines add no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilters {
    filters: BTreeMap<CanonicalPath, BTreeSet<u32>>,
}

impl LineFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the lines of `feature`.
    pub fn insert(&mut self, feature: &FeatureWithLines) {
        if feature.lines.is_empty() {
            return;
        }
        self.filters
            .entry(feature.uri.clone())
            .or_default()
            .extend(feature.lines.iter().copied());
    }

    /// Returns the lines recorded for `uri`.
    #[must_use]
    pub fn get(&self, uri: &CanonicalPath) -> Option<&BTreeSet<u32>> {
        self.filters.get(uri)
    }
}

impl<'a> Extend<&'a FeatureWithLines> for LineFilters {
    fn extend<I: IntoIterator<Item = &'a FeatureWithLines>>(&mut self, iter: I) {
        for feature in iter {
            self.insert(feature);
        }
    }
}

/// Splits off the trailing run of `:<digits>` groups.
fn split_line_suffix(entry: &str) -> (&str, &str) {
    let mut path = entry;
    while let Some((head, tail)) = path.rsplit_once(':') {
        let is_line = !tail.is_empty() && tail.bytes().all(|byte| byte.is_ascii_digit());
        if !is_line || head.is_empty() {
            break;
        }
        path = head;
    }
    let suffix = entry.strip_prefix(path).unwrap_or_default();
    (path, suffix)
}

fn parse_line(entry: &str, value: &str) -> FeaturePathResult<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|line| *line > 0)
        .ok_or_else(|| FeaturePathError::InvalidLine {
            entry: entry.to_owned(),
            value: value.to_owned(),
        })
}
