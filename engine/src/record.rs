//! Result records produced by the resolvers.

use std::collections::BTreeSet;

use serde::Serialize;

/// Marker recorded when a Scheme instance matches through its own type
/// rather than through a restriction.
pub const DIRECT_SUBCLASS: &str = "directSubclass";

/// Marker recorded by the Legacy policy for restriction-based matches.
pub const RESTRICTION_MARKER: &str = "owl:someValuesFrom";

/// A canonical per-instance result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    /// Instance IRI.
    pub id: String,
    /// Display label.
    pub label: String,
    /// `dc:description` for schemes, `skos:definition` for other facets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fraud narrative (schemes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// `rdfs:isDefinedBy` source reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    /// External link (non-Scheme facets).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Relation names (or markers) through which a Scheme instance matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_relations: Option<BTreeSet<String>>,
}

impl ResourceRecord {
    /// Creates a record with only its identity filled in.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            narrative: None,
            provenance: None,
            website: None,
            linked_relations: None,
        }
    }

    /// Sort key: case-insensitive label, then raw label, then IRI.
    #[must_use]
    pub fn sort_key(&self) -> (String, &str, &str) {
        (self.label.to_lowercase(), &self.label, &self.id)
    }
}

/// One raw Modern Scheme match. An instance matching through several
/// relations (or carrying several labels) yields several rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRow {
    /// Instance IRI.
    pub id: String,
    /// One of the instance's labels.
    pub label: String,
    /// Scheme description.
    pub description: Option<String>,
    /// Fraud narrative.
    pub narrative: Option<String>,
    /// Source reference.
    pub provenance: Option<String>,
    /// Relation local name, or [`DIRECT_SUBCLASS`].
    pub relation: String,
}
