//! Error types for the catalog core
//!
//! Provides unified error handling using thiserror.
//!
//! Per-item fetch failures inside a batch are data, not errors: the
//! pipeline collapses them during its merge step. Only a failure of the
//! listing call itself crosses the pipeline boundary.

use thiserror::Error;

// == Source Error ==
/// Failure of one call against the remote catalog service.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure (connect, timeout, body read, decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status {status} for {path}")]
    Status { status: u16, path: String },
}

// == Catalog Error ==
/// The only error the aggregation pipeline propagates to callers.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The listing call failed; there is nothing to merge into, so the
    /// whole invocation fails
    #[error("listing fetch failed")]
    Listing(#[source] SourceError),
}

// == Result Type Alias ==
/// Convenience Result type for the catalog core.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
