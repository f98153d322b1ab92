//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when using a product store backend.
///
/// The engine never retries or remaps these; they propagate unchanged to the
/// caller, which decides how to surface them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The query backend is unavailable.
    #[error("store backend unavailable: {0}")]
    Unavailable(String),

    /// A query failed to execute.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Errors that can occur in catalog engine operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The underlying product store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
