//! Parsed feature documents and the parser seam that produces them.

use std::io::Read;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::{CanonicalPath, Resource};

const FEATURE_KEYWORD: &str = "Feature:";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// In-memory form of one parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDocument {
    uri: CanonicalPath,
    name: String,
    source: String,
}

impl FeatureDocument {
    /// Creates a document from its parts.
    #[must_use]
    pub fn new(uri: CanonicalPath, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            uri,
            name: name.into(),
            source: source.into(),
        }
    }

    /// Returns the URI the document was loaded from.
    #[must_use]
    pub const fn uri(&self) -> &CanonicalPath {
        &self.uri
    }

    /// Returns the feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Errors raised while turning a resource into a [`FeatureDocument`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Reading the resource failed.
    #[error("failed to read feature source: {0}")]
    Io(#[from] std::io::Error),

    /// The resource is not UTF-8 text.
    #[error("feature source is not valid UTF-8: {0}")]
    NotUtf8(#[from] FromUtf8Error),

    /// No line opens with the `Feature:` keyword.
    #[error("no `Feature:` line found")]
    MissingFeature,

    /// Failure reported by a parser outside this crate.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Turns resources into feature documents.
///
/// Implementations own the Gherkin grammar; this crate only needs the
/// document's URI and source.
pub trait FeatureParser {
    /// Parses `resource` into a [`FeatureDocument`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the resource cannot be read or is not a
    /// feature document.
    fn parse_resource(&self, resource: &dyn Resource) -> Result<FeatureDocument, ParseError>;
}

/// Parser that keeps the source verbatim and reads only the feature name.
///
/// # Examples
///
/// ```
/// use feature_path::{CanonicalPath, FeatureParser, InMemoryResource, SourceParser};
///
/// let resource = InMemoryResource::new(
///     CanonicalPath::file("/suite/login.feature"),
///     "@smoke\nFeature: Login\n  Scenario: ok\n",
/// );
/// let document = SourceParser.parse_resource(&resource)?;
/// assert_eq!(document.name(), "Login");
/// # Ok::<(), feature_path::ParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceParser;

impl FeatureParser for SourceParser {
    fn parse_resource(&self, resource: &dyn Resource) -> Result<FeatureDocument, ParseError> {
        let mut bytes = Vec::new();
        resource.open()?.read_to_end(&mut bytes)?;
        let mut source = String::from_utf8(bytes)?;
        if source.starts_with(BYTE_ORDER_MARK) {
            source.remove(0);
        }
        let name = feature_name(&source).ok_or(ParseError::MissingFeature)?;
        Ok(FeatureDocument::new(resource.uri().clone(), name, source))
    }
}

fn feature_name(source: &str) -> Option<String> {
    source
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(FEATURE_KEYWORD))
        .map(|name| name.trim().to_owned())
}
