//! Canonical resource locators for feature documents.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

use camino::Utf8PathBuf;

use crate::PathFlavour;

/// URI scheme of a [`CanonicalPath`].
#[derive(Debug, Clone)]
pub enum Scheme {
    /// Resources located relative to the configured classpath roots.
    Classpath,
    /// Resources on the local filesystem.
    File,
    /// Any other scheme, passed through untouched.
    Other(String),
}

impl Scheme {
    /// Maps a scheme name onto its variant.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "classpath" => Self::Classpath,
            "file" => Self::File,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the scheme name as written in a URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Classpath => "classpath",
            Self::File => "file",
            Self::Other(name) => name,
        }
    }
}

// Equality follows the rendered name so `Other("file")` and `File` agree.
impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Scheme {}

impl Hash for Scheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved feature path: a scheme plus a `/`-separated
/// scheme-specific part.
///
/// Paths order by their rendered `scheme:part` form, byte by byte, which
/// keeps feature execution order independent of locale and filesystem
/// enumeration order.
///
/// # Examples
///
/// ```
/// use feature_path::{CanonicalPath, Scheme};
///
/// let uri = CanonicalPath::classpath("/com/example/login.feature");
/// assert_eq!(uri.scheme(), &Scheme::Classpath);
/// assert_eq!(uri.file_name(), "login.feature");
/// assert_eq!(uri.to_string(), "classpath:/com/example/login.feature");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    scheme: Scheme,
    scheme_specific_part: String,
}

impl CanonicalPath {
    /// Creates a path from its parts without further normalisation.
    #[must_use]
    pub fn new(scheme: Scheme, scheme_specific_part: impl Into<String>) -> Self {
        Self {
            scheme,
            scheme_specific_part: scheme_specific_part.into(),
        }
    }

    /// Creates a `classpath:` path.
    #[must_use]
    pub fn classpath(scheme_specific_part: impl Into<String>) -> Self {
        Self::new(Scheme::Classpath, scheme_specific_part)
    }

    /// Creates a `file:` path.
    #[must_use]
    pub fn file(scheme_specific_part: impl Into<String>) -> Self {
        Self::new(Scheme::File, scheme_specific_part)
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns the `/`-separated part following `scheme:`.
    #[must_use]
    pub fn scheme_specific_part(&self) -> &str {
        &self.scheme_specific_part
    }

    /// Returns the last `/`-separated segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.scheme_specific_part
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// Converts a `file:` path back into a local path for `flavour`.
    ///
    /// Returns `None` for every other scheme.
    #[must_use]
    pub fn to_local_path(&self, flavour: PathFlavour) -> Option<Utf8PathBuf> {
        match self.scheme {
            Scheme::File => Some(flavour.local_path(&self.scheme_specific_part)),
            Scheme::Classpath | Scheme::Other(_) => None,
        }
    }

    fn rendered_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.scheme
            .as_str()
            .bytes()
            .chain(iter::once(b':'))
            .chain(self.scheme_specific_part.bytes())
    }
}

impl Ord for CanonicalPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered_bytes().cmp(other.rendered_bytes())
    }
}

impl PartialOrd for CanonicalPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.scheme_specific_part)
    }
}
