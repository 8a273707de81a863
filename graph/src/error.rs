//! Graph error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a graph from its source document.
///
/// A load failure never leaves a partial graph behind: the loader either
/// returns a complete [`Graph`](crate::Graph) or one of these.
#[derive(Debug, Error)]
pub enum GraphLoadError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension names a syntax this loader does not parse.
    #[error("unsupported RDF syntax for {name}: expected .ttl, .nt, .rdf, .xml, .owl, .jsonld or .json")]
    UnsupportedFormat {
        /// Source name (usually the file name).
        name: String,
    },

    /// The parser rejected the document.
    #[error("failed to parse {name}: {message}")]
    Parse {
        /// Source name (usually the file name).
        name: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors raised by a single pattern lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphQueryError {
    /// A literal cannot appear in subject position.
    #[error("malformed pattern: literal {0} in subject position")]
    LiteralSubject(String),

    /// Predicates must be IRIs.
    #[error("malformed pattern: {0} is not a valid predicate")]
    InvalidPredicate(String),
}
