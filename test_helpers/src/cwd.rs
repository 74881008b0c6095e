//! Guard for changing the process working directory in tests.
//!
//! Relative feature identifiers resolve against the working directory, so
//! tests that exercise that resolution must hold the global lock returned
//! here for as long as they depend on the directory. The lock is shared
//! by every crate in the workspace, which is why it lives here rather than
//! in each crate's test modules.
//!
//! # Examples
//!
//! ```no_run
//! use feature_path_test_helpers::cwd;
//!
//! # fn run() -> anyhow::Result<()> {
//! let guard = cwd::set_dir("/tmp")?;
//! assert_eq!(std::env::current_dir()?, std::path::Path::new("/tmp"));
//! guard.restore()?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::{Mutex, MutexGuard};

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the original working directory when dropped.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// The directory that will be restored.
    #[must_use]
    pub fn original(&self) -> &Utf8Path {
        &self.original
    }

    /// Restores the original directory, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns an error if `set_current_dir` fails.
    pub fn restore(&self) -> std::io::Result<()> {
        std::env::set_current_dir(&self.original)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ignored = std::env::set_current_dir(&self.original);
    }
}

/// Switches the working directory to `path` until the guard drops.
///
/// The original directory is read before switching, so a non-UTF-8 working
/// directory is reported without moving the process.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read, is not UTF-8,
/// or `path` cannot be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_MUTEX.lock();
    let current = std::env::current_dir().context("read current dir")?;
    let original = Utf8PathBuf::from_path_buf(current)
        .map_err(|path| anyhow!("cwd is not valid UTF-8: {}", path.display()))?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}
