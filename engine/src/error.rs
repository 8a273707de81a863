//! Session error types.

use gfo_graph::{GraphLoadError, GraphQueryError};
use thiserror::Error;

/// Errors raised by [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No graph is loaded.
    #[error("no ontology loaded")]
    NoGraph,

    /// A comparison was requested before any search.
    #[error("no search to compare: run a search first")]
    NoSearch,

    /// The requested category is not in the catalog.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The ontology could not be loaded. Any previous state was dropped.
    #[error(transparent)]
    Load(#[from] GraphLoadError),

    /// The category catalog could not be built.
    #[error(transparent)]
    Query(#[from] GraphQueryError),
}
