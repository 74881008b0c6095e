//! Error types produced while resolving and collecting feature paths.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::{CanonicalPath, ParseError};

/// Message reported when an empty feature identifier is parsed.
pub(crate) const EMPTY_IDENTIFIER: &str = "featureIdentifier may not be empty";

/// Errors that can occur while resolving, scanning or collecting features.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeaturePathError {
    /// The caller supplied an argument that cannot name a feature.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable reason for the rejection.
        message: &'static str,
    },

    /// The feature parser rejected a resource.
    #[error("failed to parse feature '{uri}': {source}")]
    Parse {
        /// Resource that failed to parse.
        uri: CanonicalPath,
        /// Error reported by the parser.
        #[source]
        source: ParseError,
    },

    /// Reading the filesystem failed.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// Path being read when the failure occurred.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scanner has no way to enumerate resources for this scheme.
    #[error("cannot scan feature path '{uri}': unsupported scheme")]
    UnsupportedScheme {
        /// Feature path carrying the unsupported scheme.
        uri: CanonicalPath,
    },

    /// A `:<line>` suffix was not a positive line number.
    #[error("invalid line number '{value}' in feature path '{entry}'")]
    InvalidLine {
        /// Entry as supplied by the caller.
        entry: String,
        /// Offending line value.
        value: String,
    },
}

impl FeaturePathError {
    pub(crate) const fn empty_identifier() -> Self {
        Self::InvalidArgument {
            message: EMPTY_IDENTIFIER,
        }
    }

    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type FeaturePathResult<T> = Result<T, FeaturePathError>;
