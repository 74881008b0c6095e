//! Enumeration of the feature files behind a canonical path.
//!
//! `file:` paths are read from the local filesystem; `classpath:` paths are
//! looked up beneath every configured classpath root. Directories are walked
//! recursively without following symlinked directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::{
    CanonicalPath, FeaturePathError, FeaturePathResult, FileResource, PathFlavour, Resource,
    Scheme,
};

const FEATURE_EXTENSION: &str = "feature";

/// Finds `.feature` resources for canonical paths.
///
/// # Examples
///
/// ```rust,no_run
/// use feature_path::{PathFlavour, ResourceScanner};
///
/// # fn run() -> feature_path::FeaturePathResult<()> {
/// let scanner = ResourceScanner::new(PathFlavour::native())
///     .add_classpath_root("src/test/resources");
/// let resources = scanner.scan(&feature_path::parse("classpath:com/example")?)?;
/// for resource in &resources {
///     println!("{}", resource.uri());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceScanner {
    flavour: PathFlavour,
    classpath_roots: Vec<Utf8PathBuf>,
}

impl ResourceScanner {
    /// Creates a scanner with no classpath roots.
    #[must_use]
    pub const fn new(flavour: PathFlavour) -> Self {
        Self {
            flavour,
            classpath_roots: Vec::new(),
        }
    }

    /// Replaces the directories searched for `classpath:` paths.
    #[must_use]
    pub fn classpath_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.classpath_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a directory searched for `classpath:` paths.
    #[must_use]
    pub fn add_classpath_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.classpath_roots.push(root.into());
        self
    }

    /// Lists the feature resources behind `uri`, sorted by URI.
    ///
    /// A path that does not exist yields no resources.
    ///
    /// # Errors
    ///
    /// Returns [`FeaturePathError::UnsupportedScheme`] for schemes other than
    /// `file` and `classpath`, and [`FeaturePathError::Io`] when a directory
    /// cannot be read.
    pub fn scan(&self, uri: &CanonicalPath) -> FeaturePathResult<Vec<Box<dyn Resource>>> {
        let mut resources = match uri.scheme() {
            Scheme::File => self.scan_file(uri)?,
            Scheme::Classpath => self.scan_classpath(uri)?,
            Scheme::Other(_) => {
                return Err(FeaturePathError::UnsupportedScheme { uri: uri.clone() });
            }
        };
        resources.sort_by(|left, right| left.uri().cmp(right.uri()));
        debug!(%uri, found = resources.len(), "scanned feature path");
        Ok(resources)
    }

    fn scan_file(&self, uri: &CanonicalPath) -> FeaturePathResult<Vec<Box<dyn Resource>>> {
        let Some(base) = uri.to_local_path(self.flavour) else {
            return Ok(Vec::new());
        };
        let resources = collect_feature_files(&base)?
            .into_iter()
            .map(|path| {
                let uri = CanonicalPath::file(uri_path(self.flavour, &path));
                Box::new(FileResource::new(uri, path)) as Box<dyn Resource>
            })
            .collect();
        Ok(resources)
    }

    fn scan_classpath(&self, uri: &CanonicalPath) -> FeaturePathResult<Vec<Box<dyn Resource>>> {
        let relative = uri.scheme_specific_part().trim_start_matches('/');
        let mut resources: Vec<Box<dyn Resource>> = Vec::new();
        for root in &self.classpath_roots {
            let base = if relative.is_empty() {
                root.clone()
            } else {
                root.join(relative)
            };
            for path in collect_feature_files(&base)? {
                let uri = CanonicalPath::classpath(classpath_part(root, &path));
                resources.push(Box::new(FileResource::new(uri, path)));
            }
        }
        Ok(resources)
    }
}

/// Absolute `/`-separated form of a discovered local path.
fn uri_path(flavour: PathFlavour, path: &Utf8Path) -> String {
    let normalised = flavour.normalise_separators(path.as_str());
    if normalised.starts_with('/') {
        normalised.into_owned()
    } else {
        format!("/{normalised}")
    }
}

fn classpath_part(root: &Utf8Path, path: &Utf8Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let segments: Vec<&str> = relative.components().map(|part| part.as_str()).collect();
    format!("/{}", segments.join("/"))
}

fn is_feature_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FEATURE_EXTENSION))
}

/// Convert a walked path to UTF-8, falling back to lossy conversion.
fn to_utf8_path(path: PathBuf) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path)
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

fn collect_feature_files(base: &Utf8Path) -> FeaturePathResult<Vec<Utf8PathBuf>> {
    let metadata = match fs::metadata(base) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %base, "feature path does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(FeaturePathError::io(base, err)),
    };
    if metadata.is_file() {
        let files = if is_feature_file(base.as_std_path()) {
            vec![base.to_owned()]
        } else {
            Vec::new()
        };
        return Ok(files);
    }

    let mut files = Vec::new();
    for next in WalkDir::new(base).follow_links(false) {
        let entry = next.map_err(|err| walk_error(base, err))?;
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file && is_feature_file(entry.path()) {
            files.push(to_utf8_path(entry.into_path()));
        }
    }
    Ok(files)
}

fn walk_error(base: &Utf8Path, err: walkdir::Error) -> FeaturePathError {
    let path = err
        .path()
        .map_or_else(|| base.to_owned(), |p| to_utf8_path(p.to_path_buf()));
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    FeaturePathError::io(path, source)
}
