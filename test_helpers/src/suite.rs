//! Scratch feature suites laid out in a temporary directory.

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory that tests populate with feature files.
///
/// The directory and everything written into it are removed on drop.
///
/// # Examples
///
/// ```
/// use feature_path_test_helpers::suite::TempSuite;
///
/// # fn run() -> anyhow::Result<()> {
/// let suite = TempSuite::new()?;
/// let path = suite.write("features/login.feature", "Feature: Login\n")?;
/// assert!(path.starts_with(suite.root()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TempSuite {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempSuite {
    /// Creates an empty suite.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary suite")?;
        let root = Utf8Path::from_path(dir.path())
            .ok_or_else(|| anyhow!("temporary directory is not valid UTF-8"))?
            .to_owned();
        Ok(Self { _dir: dir, root })
    }

    /// The suite's root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Joins `relative` onto the root.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Writes every `(relative, contents)` pair.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`TempSuite::write`].
    pub fn write_all<'a, I>(&self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (relative, contents) in files {
            self.write(relative, contents)?;
        }
        Ok(())
    }
}
