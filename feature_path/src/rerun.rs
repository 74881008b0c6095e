//! Rerun files listing failed features as `path.feature:line` entries.
//!
//! A runner writes one entry per failing feature, and users pass the file
//! back as `@target/rerun.txt`. Entries may share a line, separated by
//! spaces, or sit on lines of their own. Paths may contain spaces as long
//! as each entry ends in `.feature` with optional line numbers.

use std::fs;

use camino::Utf8Path;
use tracing::debug;

use crate::{FeaturePathError, FeaturePathResult, FeatureWithLines, PathResolver};

const FEATURE_EXTENSION: &str = ".feature";

/// Parses rerun file `contents` into feature entries.
///
/// # Errors
///
/// Returns a [`FeaturePathError`] when an entry carries an invalid line
/// number.
///
/// # Examples
///
/// ```
/// use feature_path::{PathFlavour, PathResolver, rerun};
///
/// let resolver = PathResolver::new(PathFlavour::Unix, "/suite");
/// let entries = rerun::parse_rerun(&resolver, "a.feature:2 b.feature:4:9\n")?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].uri().to_string(), "file:/suite/b.feature");
/// # Ok::<(), feature_path::FeaturePathError>(())
/// ```
pub fn parse_rerun(
    resolver: &PathResolver,
    contents: &str,
) -> FeaturePathResult<Vec<FeatureWithLines>> {
    contents
        .lines()
        .flat_map(split_entries)
        .map(|entry| FeatureWithLines::parse(resolver, entry))
        .collect()
}

/// Reads and parses the rerun file at `path`.
///
/// # Errors
///
/// Returns [`FeaturePathError::Io`] when the file cannot be read, or any
/// error reported by [`parse_rerun`].
pub fn read_rerun(
    resolver: &PathResolver,
    path: &Utf8Path,
) -> FeaturePathResult<Vec<FeatureWithLines>> {
    let contents = fs::read_to_string(path).map_err(|err| FeaturePathError::io(path, err))?;
    let entries = parse_rerun(resolver, &contents)?;
    debug!(%path, entries = entries.len(), "read rerun file");
    Ok(entries)
}

fn split_entries(line: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut rest = line;
    while let Some(end) = entry_end(rest) {
        let (entry, remaining) = rest.split_at(end);
        let entry = entry.trim_start();
        if !entry.is_empty() {
            entries.push(entry);
        }
        rest = remaining;
    }
    if !rest.trim().is_empty() {
        debug!(ignored = rest.trim(), "ignoring rerun text without a feature entry");
    }
    entries
}

/// Byte offset just past the first complete entry in `text`.
fn entry_end(text: &str) -> Option<usize> {
    let mut search_from = 0;
    loop {
        let found = text.get(search_from..)?.find(FEATURE_EXTENSION)?;
        let after_extension = search_from + found + FEATURE_EXTENSION.len();
        let tail = text.get(after_extension..)?;
        let end = after_extension + line_suffix_len(tail);
        let terminated = text
            .get(end..)
            .and_then(|after| after.chars().next())
            .is_none_or(char::is_whitespace);
        if terminated {
            return Some(end);
        }
        search_from = after_extension;
    }
}

/// Length of the leading run of `:<digits>` groups in `tail`.
fn line_suffix_len(tail: &str) -> usize {
    let mut len = 0;
    let mut rest = tail;
    while let Some(after_colon) = rest.strip_prefix(':') {
        let digits = after_colon
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            break;
        }
        len += 1 + digits;
        rest = after_colon.split_at(digits).1;
    }
    len
}
