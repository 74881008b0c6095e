//! Helpers for mutating environment variables in tests.
//!
//! Every mutation holds a global re-entrant mutex and returns a guard that
//! restores the previous value (or removes the variable) when dropped.
//! Guards for the same key restore in LIFO order. Use [`lock`] when a test
//! must keep several `FEATURE_PATHS_*` variables stable while loading
//! configuration.
//!
//! # Examples
//!
//! ```
//! use feature_path_test_helpers::env;
//!
//! let _guard = env::set_var("FEATURE_PATHS_DEDUP", "content");
//! assert_eq!(std::env::var("FEATURE_PATHS_DEDUP").ok().as_deref(), Some("content"));
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the environment lock so several mutations and reads stay atomic.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl fmt::Debug for EnvLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvLock").finish_non_exhaustive()
    }
}

/// Acquires the global environment lock.
///
/// The mutex is re-entrant, so [`set_var`] and [`remove_var`] may be called
/// while the lock is held.
pub fn lock() -> EnvLock {
    EnvLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), |key| {
        // SAFETY: `mutate` holds `ENV_MUTEX`.
        unsafe { env::set_var(key, value.as_ref()) };
    })
}

/// Removes an environment variable and returns a guard restoring its prior value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    mutate(key.into(), |key| {
        // SAFETY: `mutate` holds `ENV_MUTEX`.
        unsafe { env::remove_var(key) };
    })
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}
