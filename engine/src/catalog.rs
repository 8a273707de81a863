//! Category catalog: the selectable fraud-activity categories.

use std::collections::{HashMap, HashSet};

use gfo_graph::{local_name, GraphAccess, GraphExt, GraphQueryError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{LabelCase, Vocabulary};

/// A selectable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Display label (cased).
    pub label: String,
    /// Stable identifier: the category's local name.
    pub id: String,
    /// Full IRI.
    pub iri: String,
}

/// Display-label → category mapping, sorted case-insensitively by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    /// Returns true if no category was discovered. Callers treat this as a
    /// "nothing to search" state, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    /// Looks up a category by display label, ignoring case.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<&CategoryEntry> {
        let wanted = label.to_lowercase();
        self.entries.iter().find(|e| e.label.to_lowercase() == wanted)
    }

    /// Looks up a category by identifier.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolves user input naming a category by label or by identifier.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&CategoryEntry> {
        self.by_label(input).or_else(|| self.by_id(input))
    }
}

/// Discovers the direct subclasses of the category root that carry a label.
///
/// The first label encountered for each category is rendered with `case`.
/// When two categories render the same display label (ignoring case) the one
/// discovered later replaces the earlier entry.
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn list_categories<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    case: LabelCase,
) -> Result<CategoryCatalog, GraphQueryError> {
    let mut entries: Vec<CategoryEntry> = Vec::new();
    let mut seen_classes = HashSet::new();
    let mut by_label: HashMap<String, usize> = HashMap::new();

    for class in graph.direct_subclasses(vocab.category_root())? {
        let Some(iri) = class.as_iri() else {
            continue;
        };
        if !seen_classes.insert(iri) {
            continue;
        }
        let Some(raw) = graph.label(class)? else {
            continue;
        };
        let id = local_name(iri).to_string();
        let label = if raw.is_empty() { id.clone() } else { case.apply(&raw) };
        let entry = CategoryEntry {
            label,
            id,
            iri: iri.to_string(),
        };
        match by_label.get(&entry.label.to_lowercase()) {
            Some(&slot) => {
                warn!(
                    label = %entry.label,
                    replaced = %entries[slot].iri,
                    category = %iri,
                    "duplicate category label; replacing the earlier category"
                );
                entries[slot] = entry;
            }
            None => {
                by_label.insert(entry.label.to_lowercase(), entries.len());
                entries.push(entry);
            }
        }
    }

    entries.sort_by(|a, b| {
        (a.label.to_lowercase(), &a.label).cmp(&(b.label.to_lowercase(), &b.label))
    });
    debug!(count = entries.len(), "category catalog built");
    Ok(CategoryCatalog { entries })
}

#[cfg(test)]
mod tests {
    use gfo_graph::{load_str, vocab, Graph, RdfFormat, Term, Triple};

    use super::*;

    const TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

gfo:ConfidenceFraud rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "confidence fraud" , "trust fraud" .
gfo:AffinityFraud rdfs:subClassOf gfo:ConfidenceFraud ;
    rdfs:label "affinity fraud" .
gfo:BenefitsFraud rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "Benefits fraud" .
gfo:Unlabelled rdfs:subClassOf gfo:FraudActivity .
gfo:ApplicationFraud rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "application fraud" .
"#;

    fn catalog(case: LabelCase) -> CategoryCatalog {
        let graph = load_str("catalog.ttl", TTL, RdfFormat::Turtle).unwrap();
        list_categories(&graph, &Vocabulary::default(), case).unwrap()
    }

    #[test]
    fn only_labelled_direct_children_sorted() {
        let catalog = catalog(LabelCase::Title);
        let labels: Vec<_> = catalog.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Application Fraud", "Benefits Fraud", "Confidence Fraud"]);
        assert!(catalog.by_id("AffinityFraud").is_none());
        assert!(catalog.by_id("Unlabelled").is_none());
    }

    #[test]
    fn first_label_wins() {
        let catalog = catalog(LabelCase::Sentence);
        let entry = catalog.by_id("ConfidenceFraud").unwrap();
        assert_eq!(entry.label, "Confidence fraud");
        assert!(entry.iri.ends_with("/gfo/ConfidenceFraud"));
    }

    #[test]
    fn resolve_by_label_or_id() {
        let catalog = catalog(LabelCase::Title);
        assert_eq!(catalog.resolve("confidence FRAUD").map(|e| e.id.as_str()), Some("ConfidenceFraud"));
        assert_eq!(catalog.resolve("BenefitsFraud").map(|e| e.label.as_str()), Some("Benefits Fraud"));
        assert!(catalog.resolve("nope").is_none());
    }

    #[test]
    fn duplicate_label_keeps_the_later_category() {
        let root = Term::iri(format!("{}FraudActivity", vocab::GFO));
        let class = |local: &str, label: &str| {
            let iri = Term::iri(format!("{}{local}", vocab::GFO));
            [
                Triple::new(iri.clone(), Term::iri(vocab::RDFS_SUBCLASS_OF), root.clone()),
                Triple::new(iri, Term::iri(vocab::RDFS_LABEL), Term::literal(label)),
            ]
        };
        let declared = [
            class("TaxFraudA", "tax fraud"),
            class("WireFraud", "wire fraud"),
            class("TaxFraudB", "Tax Fraud"),
        ];
        let graph = Graph::from_triples("dup", declared.into_iter().flatten());
        let catalog = list_categories(&graph, &Vocabulary::default(), LabelCase::Title).unwrap();
        let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["TaxFraudB", "WireFraud"]);
        assert_eq!(catalog.resolve("Tax Fraud").map(|e| e.id.as_str()), Some("TaxFraudB"));
        assert!(catalog.by_id("TaxFraudA").is_none());
    }

    #[test]
    fn empty_graph_empty_catalog() {
        let graph = gfo_graph::Graph::default();
        let catalog = list_categories(&graph, &Vocabulary::default(), LabelCase::Title).unwrap();
        assert!(catalog.is_empty());
    }
}
