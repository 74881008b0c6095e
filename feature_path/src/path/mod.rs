//! Resolution of user-supplied feature identifiers into canonical paths.
//!
//! Identifiers are dispatched on their prefix:
//!
//! * `classpath:` keeps its `/`-separated remainder, rooted at `/`;
//! * `file:` and bare paths are local paths, made absolute against the
//!   working directory;
//! * any other `scheme:` prefix passes through untouched.
//!
//! Only the empty identifier is rejected; anything else that fails to look
//! like a URI is read as a relative path.

mod flavour;

pub use flavour::PathFlavour;

use tracing::warn;

use crate::{CanonicalPath, FeaturePathError, FeaturePathResult, Scheme};

const CLASSPATH_PREFIX: &str = "classpath:";
const FILE_PREFIX: &str = "file:";

/// Resolves feature identifiers for a given platform flavour and working
/// directory.
///
/// # Examples
///
/// ```
/// use feature_path::{PathFlavour, PathResolver};
///
/// let resolver = PathResolver::new(PathFlavour::Unix, "/srv/suite");
/// let uri = resolver.parse("features/checkout.feature")?;
/// assert_eq!(uri.to_string(), "file:/srv/suite/features/checkout.feature");
///
/// let root = resolver.parse("classpath:")?;
/// assert_eq!(root.to_string(), "classpath:/");
/// # Ok::<(), feature_path::FeaturePathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    flavour: PathFlavour,
    /// Absolute `/`-separated working directory without a trailing `/`.
    base: String,
}

impl PathResolver {
    /// Creates a resolver that resolves relative paths against
    /// `working_dir`, written in `flavour`'s native form.
    #[must_use]
    pub fn new(flavour: PathFlavour, working_dir: impl AsRef<str>) -> Self {
        let absolute = absolute_part(flavour, working_dir.as_ref());
        Self {
            flavour,
            base: absolute.trim_end_matches('/').to_owned(),
        }
    }

    /// Creates a resolver for the host platform and the process working
    /// directory.
    ///
    /// Falls back to the filesystem root when the working directory cannot
    /// be read.
    #[must_use]
    pub fn from_environment() -> Self {
        let flavour = PathFlavour::native();
        match std::env::current_dir() {
            Ok(dir) => Self::new(flavour, dir.to_string_lossy()),
            Err(err) => {
                warn!(
                    error = %err,
                    "working directory unavailable; resolving relative feature paths from the root"
                );
                Self::new(flavour, flavour.separator().to_string())
            }
        }
    }

    /// Returns the flavour used for local paths.
    #[must_use]
    pub const fn flavour(&self) -> PathFlavour {
        self.flavour
    }

    /// Parses `identifier` into a [`CanonicalPath`].
    ///
    /// # Errors
    ///
    /// Returns [`FeaturePathError::InvalidArgument`] when `identifier` is
    /// empty.
    pub fn parse(&self, identifier: &str) -> FeaturePathResult<CanonicalPath> {
        if identifier.is_empty() {
            return Err(FeaturePathError::empty_identifier());
        }
        if let Some(rest) = identifier.strip_prefix(CLASSPATH_PREFIX) {
            return Ok(CanonicalPath::classpath(rooted(rest)));
        }
        if let Some(rest) = identifier.strip_prefix(FILE_PREFIX) {
            return Ok(CanonicalPath::file(self.resolve_local(without_empty_authority(rest))));
        }
        if let Some((scheme, rest)) = split_scheme(identifier) {
            let part = if rest.is_empty() { "/" } else { rest };
            return Ok(CanonicalPath::new(Scheme::from_name(scheme), part));
        }
        Ok(CanonicalPath::file(self.resolve_local(identifier)))
    }

    fn resolve_local(&self, path: &str) -> String {
        let path = self.flavour.normalise_separators(path);
        if self.flavour.has_drive(&path) || path.starts_with("//") {
            return absolute_part(self.flavour, &path);
        }
        if let Some(rest) = path.strip_prefix('/') {
            // `/C:/a` is already the URI form of a drive path.
            if self.flavour.has_drive(rest) {
                return absolute_part(self.flavour, rest);
            }
            return format!("{}{path}", self.drive_prefix());
        }
        if path.is_empty() {
            return if self.base.is_empty() {
                String::from("/")
            } else {
                self.base.clone()
            };
        }
        format!("{}/{path}", self.base)
    }

    /// `/C:` when the working directory sits on a drive, empty otherwise.
    fn drive_prefix(&self) -> &str {
        match self.base.strip_prefix('/') {
            Some(rest) if self.flavour.has_drive(rest) => self.base.get(..3).unwrap_or_default(),
            _ => "",
        }
    }
}

/// Absolute `/`-separated form of a local path, gaining a leading `/`
/// before any drive letter.
fn absolute_part(flavour: PathFlavour, path: &str) -> String {
    let path = flavour.normalise_separators(path);
    if flavour.has_drive(&path) {
        let mut part = format!("/{path}");
        if !path.contains('/') {
            part.push('/');
        }
        return part;
    }
    if path.starts_with('/') {
        path.into_owned()
    } else {
        format!("/{path}")
    }
}

fn rooted(rest: &str) -> String {
    if rest.starts_with('/') {
        rest.to_owned()
    } else {
        format!("/{rest}")
    }
}

/// `file:///a` carries an empty authority; drop it so the path reads `/a`.
fn without_empty_authority(rest: &str) -> &str {
    rest.strip_prefix("//")
        .filter(|path| path.starts_with('/'))
        .unwrap_or(rest)
}

/// Splits an explicit `scheme:` prefix of at least two characters so drive
/// letters never qualify.
fn split_scheme(identifier: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = identifier.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && scheme.len() >= 2
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}
