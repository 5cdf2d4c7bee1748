//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::CatalogError;

/// Errors emitted while configuring a quiz session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("session size must be > 0")]
    ZeroSessionSize,
    #[error("session size {requested} exceeds the {available} scenarios in the catalog")]
    SessionSizeExceedsCatalog { requested: usize, available: usize },
}

/// Errors emitted while loading a catalog from its source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogSourceError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
