//! Feature path resolution and feature collection for BDD runners.
//!
//! A feature path is a free-form string naming one or more `.feature`
//! documents: `classpath:com/example`, `file:features/login.feature`,
//! `C:\suite\checkout.feature` or a plain relative path. [`PathResolver`]
//! turns each one into a [`CanonicalPath`], [`ResourceScanner`] enumerates
//! the documents behind it, a [`FeatureParser`] reads them and
//! [`FeatureCollector`] removes duplicates and fixes the execution order.
//!
//! ```
//! use feature_path::{PathFlavour, PathResolver, Scheme};
//!
//! let resolver = PathResolver::new(PathFlavour::Windows, r"C:\work");
//! let uri = resolver.parse(r"features\login.feature")?;
//! assert_eq!(uri.scheme(), &Scheme::File);
//! assert_eq!(uri.scheme_specific_part(), "/C:/work/features/login.feature");
//! # Ok::<(), feature_path::FeaturePathError>(())
//! ```

mod collector;
mod error;
mod lines;
mod parser;
mod path;
pub mod rerun;
mod resource;
mod scanner;
mod supplier;
mod uri;

pub use collector::{DedupPolicy, FeatureCollector};
pub use error::{FeaturePathError, FeaturePathResult};
pub use lines::{FeatureWithLines, LineFilters};
pub use parser::{FeatureDocument, FeatureParser, ParseError, SourceParser};
pub use path::{PathFlavour, PathResolver};
pub use resource::{FileResource, InMemoryResource, Resource};
pub use scanner::ResourceScanner;
pub use supplier::FeatureSupplier;
pub use uri::{CanonicalPath, Scheme};

/// Parses `identifier` against the process working directory using the
/// host's path conventions.
///
/// # Errors
///
/// Returns [`FeaturePathError::InvalidArgument`] when `identifier` is empty.
///
/// # Examples
///
/// ```
/// let uri = feature_path::parse("classpath:com/example")?;
/// assert_eq!(uri.to_string(), "classpath:/com/example");
/// # Ok::<(), feature_path::FeaturePathError>(())
/// ```
pub fn parse(identifier: &str) -> FeaturePathResult<CanonicalPath> {
    PathResolver::from_environment().parse(identifier)
}
