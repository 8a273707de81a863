//! Resource search over the GAO Fraud Ontology (GFO).
//!
//! Given a fraud-activity category, the engine finds the related instances
//! of five resource facets (scheme examples, awareness resources, detection
//! guidance, risk-management principles and audit reports) under two
//! relatedness policies:
//!
//! - **Modern** ([`resolver::modern`]) follows the full `rdfs:subClassOf`
//!   closure of the category and OWL `someValuesFrom` restrictions.
//! - **Legacy** ([`resolver::legacy`]) matches the category IRI exactly and
//!   expands facet roots only two levels.
//!
//! [`reconcile`] diffs the two result sets into per-facet comparison tables.
//! [`Session`] ties loading, cataloguing, searching and comparing together.
//! [`run_search`] and [`run_comparison`] run the same steps over any
//! [`gfo_graph::GraphAccess`] backend.
//!
//! # Entry Point
//!
//! ```
//! use gfo_engine::{EngineConfig, Facet, Session};
//! use gfo_graph::RdfFormat;
//!
//! let ttl = r#"
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//! @prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .
//! gfo:ConfidenceFraud rdfs:subClassOf gfo:FraudActivity ; rdfs:label "confidence fraud" .
//! "#;
//! let mut session = Session::new(EngineConfig::default());
//! session.load_str("gfo.ttl", ttl, RdfFormat::Turtle).expect("valid ontology");
//! let search = session.search("Confidence Fraud").expect("known category");
//! assert_eq!(search.facets.len(), Facet::ALL.len());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod facet;
pub mod normalize;
pub mod reconcile;
pub mod record;
pub mod resolver;
pub mod session;

pub use catalog::{list_categories, CategoryCatalog, CategoryEntry};
pub use config::{
    CatalogConfig, ComparisonConfig, ComparisonKey, ConfigError, EngineConfig, FacetRoots,
    LabelCase, Vocabulary, VocabularyConfig,
};
pub use error::SessionError;
pub use facet::Facet;
pub use reconcile::{
    compare_facet, summarize, ComparisonRow, ComparisonSummary, FacetComparison,
    MembershipStatus, SummaryRow,
};
pub use record::{ResourceRecord, SchemeRow};
pub use resolver::{resolve, Policy};
pub use session::{
    run_comparison, run_search, ComparisonOutcome, FacetError, FacetResult, SearchOutcome, Session,
};
