//! Platform conventions for separators and drive letters.

use std::borrow::Cow;

use camino::Utf8PathBuf;

/// Path conventions used when translating between local paths and URIs.
///
/// The resolver receives a flavour instead of consulting the host so that
/// Windows handling is exercised on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFlavour {
    /// `/`-separated paths rooted at `/`.
    Unix,
    /// `\`-separated paths that may start with a drive letter.
    Windows,
}

impl PathFlavour {
    /// Returns the flavour of the host platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Returns the native path separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Replaces native separators with `/`.
    #[must_use]
    pub fn normalise_separators(self, path: &str) -> Cow<'_, str> {
        match self {
            Self::Windows if path.contains('\\') => Cow::Owned(path.replace('\\', "/")),
            Self::Unix | Self::Windows => Cow::Borrowed(path),
        }
    }

    /// Reports whether a `/`-separated `path` starts with a drive such as
    /// `C:` or `C:/`.
    #[must_use]
    pub fn has_drive(self, path: &str) -> bool {
        match self {
            Self::Unix => false,
            Self::Windows => drive_len(path).is_some(),
        }
    }

    /// Converts a `/`-separated scheme-specific part back into a local path.
    pub(crate) fn local_path(self, part: &str) -> Utf8PathBuf {
        match self {
            Self::Unix => Utf8PathBuf::from(part),
            Self::Windows => {
                let without_root = part
                    .strip_prefix('/')
                    .filter(|rest| drive_len(rest).is_some())
                    .unwrap_or(part);
                Utf8PathBuf::from(without_root.replace('/', "\\"))
            }
        }
    }
}

/// Length of a leading `X:` drive when followed by `/` or nothing at all.
pub(crate) fn drive_len(path: &str) -> Option<usize> {
    let mut chars = path.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_alphabetic() || chars.next()? != ':' {
        return None;
    }
    match chars.next() {
        None | Some('/') => Some(2),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{PathFlavour, drive_len};
    use rstest::rstest;

    #[rstest]
    #[case("C:/path", Some(2))]
    #[case("c:", Some(2))]
    #[case("C:path", None)]
    #[case("/C:/path", None)]
    #[case("1:/path", None)]
    #[case("", None)]
    fn detects_drive_prefix(#[case] path: &str, #[case] expected: Option<usize>) {
        assert_eq!(drive_len(path), expected);
    }

    #[test]
    fn unix_keeps_backslashes() {
        let path = PathFlavour::Unix.normalise_separators(r"a\b.feature");
        assert_eq!(path, r"a\b.feature");
    }

    #[test]
    fn windows_translates_backslashes() {
        let path = PathFlavour::Windows.normalise_separators(r"a\b\c.feature");
        assert_eq!(path, "a/b/c.feature");
    }

    #[rstest]
    #[case(PathFlavour::Unix, "/a/b.feature", "/a/b.feature")]
    #[case(PathFlavour::Windows, "/C:/a/b.feature", r"C:\a\b.feature")]
    #[case(PathFlavour::Windows, "//server/share/a.feature", r"\\server\share\a.feature")]
    fn local_path_reverses_uri_form(
        #[case] flavour: PathFlavour,
        #[case] part: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(flavour.local_path(part).as_str(), expected);
    }
}
