//! Read-only triple graph for the GAO Fraud Ontology (GFO).
//!
//! The `gfo-graph` crate is the graph access layer every resolver sits on:
//! it loads a Turtle, N-Triples, RDF/XML or JSON-LD document, keeps the triples in an indexed
//! in-memory [`Graph`], and exposes a single pattern-lookup primitive
//! ([`GraphAccess::lookup`]) plus typed traversal helpers ([`GraphExt`]) for
//! subclass closure and OWL restriction matching.
//!
//! # Entry Point
//!
//! ```
//! use gfo_graph::{load_str, GraphExt, RdfFormat, Term};
//!
//! let ttl = r#"
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//! <https://ex.org/B> rdfs:subClassOf <https://ex.org/A> .
//! "#;
//! let graph = load_str("doc.ttl", ttl, RdfFormat::Turtle).expect("valid turtle");
//! let closure = graph.descendants(&Term::iri("https://ex.org/A")).expect("lookup");
//! assert_eq!(closure.iter().count(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod closure;
pub mod error;
pub mod load;
pub mod model;
pub mod store;
pub mod vocab;

pub use closure::{ClassClosure, GraphExt, Restriction};
pub use error::{GraphLoadError, GraphQueryError};
pub use load::{load_path, load_str, RdfFormat};
pub use model::{local_name, Literal, Term, Triple, TriplePattern};
pub use store::{Graph, GraphAccess};
