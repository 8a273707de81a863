//! Relatedness resolution under the Modern and Legacy policies.
//!
//! Both policies answer the same question ("which instances of facet F are
//! related to category C?") over the same read-only graph and are run
//! independently. They agree only on the Risk Principle facet, which is
//! category-independent by design.

pub mod legacy;
pub mod modern;

use std::collections::HashSet;
use std::fmt;

use gfo_graph::{vocab, GraphAccess, GraphExt, GraphQueryError, Term};
use serde::Serialize;
use tracing::debug;

use crate::config::Vocabulary;
use crate::facet::Facet;
use crate::normalize::{merge_scheme_rows, sort_records};
use crate::record::ResourceRecord;

/// A relatedness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Unbounded subclass closure, restriction matching, direct-subclass typing.
    Modern,
    /// Exact-IRI matching with a two-level facet expansion.
    Legacy,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Modern => "modern",
            Policy::Legacy => "legacy",
        })
    }
}

/// Resolves the canonical, sorted records of `facet` related to `category`
/// under `policy`.
///
/// # Errors
///
/// Returns [`GraphQueryError`] if any underlying lookup fails; no partial
/// result is returned in that case.
pub fn resolve<G: GraphAccess + ?Sized>(
    policy: Policy,
    graph: &G,
    vocab: &Vocabulary,
    facet: Facet,
    category: &Term,
) -> Result<Vec<ResourceRecord>, GraphQueryError> {
    let records = match (policy, facet) {
        (_, Facet::RiskPrinciple) => risk_principles(graph, vocab)?,
        (Policy::Modern, Facet::Scheme) => merge_scheme_rows(modern::scheme_rows(graph, vocab, category)?),
        (Policy::Modern, _) => modern::resources(graph, vocab, facet, category)?,
        (Policy::Legacy, Facet::Scheme) => legacy::schemes(graph, vocab, category)?,
        (Policy::Legacy, _) => legacy::resources(graph, vocab, facet, category)?,
    };
    debug!(%policy, facet = facet.display_name(), category = %category, count = records.len(), "facet resolved");
    Ok(records)
}

/// Every labelled instance of any class under the Risk Principle root,
/// regardless of category. Shared by both policies.
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn risk_principles<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
) -> Result<Vec<ResourceRecord>, GraphQueryError> {
    let classes = graph.descendants(vocab.facet_root(Facet::RiskPrinciple))?;
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for class in classes.iter() {
        for instance in graph.instances_of(class)? {
            if !seen.insert(instance) {
                continue;
            }
            if let Some(label) = graph.label(instance)? {
                records.push(resource_record(graph, vocab, instance, label)?);
            }
        }
    }
    sort_records(&mut records);
    Ok(records)
}

/// Builds a non-Scheme record: definition, website and source reference.
pub(crate) fn resource_record<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    instance: &Term,
    label: String,
) -> Result<ResourceRecord, GraphQueryError> {
    Ok(ResourceRecord {
        description: graph.first_value(instance, vocab::SKOS_DEFINITION)?,
        website: graph.first_value(instance, vocab.website())?,
        provenance: graph.first_value(instance, vocab::RDFS_IS_DEFINED_BY)?,
        ..ResourceRecord::new(instance.lexical(), label)
    })
}

/// Builds a Scheme record: description, narrative and source reference.
pub(crate) fn scheme_record<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    instance: &Term,
    label: String,
) -> Result<ResourceRecord, GraphQueryError> {
    Ok(ResourceRecord {
        description: graph.first_value(instance, vocab::DC_DESCRIPTION)?,
        narrative: graph.first_value(instance, vocab.narrative())?,
        provenance: graph.first_value(instance, vocab::RDFS_IS_DEFINED_BY)?,
        ..ResourceRecord::new(instance.lexical(), label)
    })
}
