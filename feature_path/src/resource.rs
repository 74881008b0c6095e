//! Byte sources that back feature documents.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};

use camino::Utf8PathBuf;

use crate::CanonicalPath;

/// A readable input identified by a [`CanonicalPath`].
pub trait Resource: fmt::Debug + Send + Sync {
    /// Returns the URI identifying this resource.
    fn uri(&self) -> &CanonicalPath;

    /// Opens a fresh reader over the resource's bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the underlying source cannot be opened.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Resource backed by a file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResource {
    uri: CanonicalPath,
    path: Utf8PathBuf,
}

impl FileResource {
    /// Creates a resource reading `path` and reporting `uri`.
    #[must_use]
    pub fn new(uri: CanonicalPath, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            uri,
            path: path.into(),
        }
    }
}

impl Resource for FileResource {
    fn uri(&self) -> &CanonicalPath {
        &self.uri
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Resource holding its bytes in memory.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use feature_path::{CanonicalPath, InMemoryResource, Resource};
///
/// let resource = InMemoryResource::new(
///     CanonicalPath::classpath("/example.feature"),
///     "Feature: Example",
/// );
/// let mut text = String::new();
/// resource.open()?.read_to_string(&mut text)?;
/// assert_eq!(text, "Feature: Example");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryResource {
    uri: CanonicalPath,
    bytes: Vec<u8>,
}

impl InMemoryResource {
    /// Creates a resource serving `bytes` under `uri`.
    #[must_use]
    pub fn new(uri: CanonicalPath, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            uri,
            bytes: bytes.into(),
        }
    }
}

impl Resource for InMemoryResource {
    fn uri(&self) -> &CanonicalPath {
        &self.uri
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}
