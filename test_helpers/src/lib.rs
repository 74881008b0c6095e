//! Test helpers shared across the feature-path crates.
//!
//! Provides guards for process-global state (environment variables and the
//! working directory), a scratch feature suite on disk, and placeholder
//! normalisation for behavioural steps.

pub mod cwd;
pub mod env;
pub mod suite;
pub mod text;
