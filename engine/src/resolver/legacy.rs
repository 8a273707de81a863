//! Legacy policy: the historical, narrower relatedness rules.
//!
//! Matching is string equality against the category IRI only. Subclasses of
//! the category are never consulted, and non-Scheme facets expand their root
//! class exactly two levels deep. Both limits are intentional: this policy
//! exists to show where the historical behaviour diverges from the Modern
//! policy.

use std::collections::{BTreeSet, HashSet};

use gfo_graph::{local_name, vocab, GraphAccess, GraphExt, GraphQueryError, Term, TriplePattern};

use crate::config::Vocabulary;
use crate::facet::Facet;
use crate::normalize::sort_records;
use crate::record::{ResourceRecord, RESTRICTION_MARKER};
use crate::resolver::{resource_record, scheme_record};

/// Scheme instances linked exactly to `category`, sorted.
///
/// Every labelled instance typed directly by the Scheme root is checked, and
/// a matching instance yields one record per label.
/// All direct relation values and all IRI targets of its restriction classes
/// (targets typed `owl:Class` or `owl:NamedIndividual`) are compared with
/// the category IRI; each matching relation is recorded by local name, and
/// restriction matches as [`RESTRICTION_MARKER`].
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn schemes<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    category: &Term,
) -> Result<Vec<ResourceRecord>, GraphQueryError> {
    let target = category.lexical();
    let mut records = Vec::new();

    for instance in graph.instances_of(vocab.facet_root(Facet::Scheme))? {
        let labels = graph.labels(instance)?;
        if labels.is_empty() {
            continue;
        }

        let mut linked = BTreeSet::new();
        for (predicate, value) in direct_values(graph, instance)? {
            if value.lexical() == target {
                linked.insert(local_name(predicate.lexical()).to_string());
            }
        }
        for restriction_target in restriction_targets(graph, instance, true)? {
            if restriction_target.lexical() == target {
                linked.insert(RESTRICTION_MARKER.to_string());
            }
        }
        if linked.is_empty() {
            continue;
        }

        let mut record = scheme_record(graph, vocab, instance, String::new())?;
        record.linked_relations = Some(linked);
        for label in labels {
            records.push(ResourceRecord {
                label,
                ..record.clone()
            });
        }
    }
    sort_records(&mut records);
    Ok(records)
}

/// Awareness, Detection and Report instances linked exactly to `category`,
/// sorted.
///
/// Candidates are labelled instances typed by a class in the two-level
/// expansion of the facet root (see [`bounded_subclasses`]). An instance is
/// included on the first direct relation value or restriction target equal
/// to the category IRI.
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn resources<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    facet: Facet,
    category: &Term,
) -> Result<Vec<ResourceRecord>, GraphQueryError> {
    let target = category.lexical();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for class in bounded_subclasses(graph, vocab.facet_root(facet))? {
        for instance in graph.instances_of(&class)? {
            if !seen.insert(instance) {
                continue;
            }
            let Some(label) = graph.label(instance)? else {
                continue;
            };
            if links_exactly(graph, instance, target)? {
                records.push(resource_record(graph, vocab, instance, label)?);
            }
        }
    }
    sort_records(&mut records);
    Ok(records)
}

/// The root, its direct subclasses, and their direct subclasses. Never
/// deeper.
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn bounded_subclasses<G: GraphAccess + ?Sized>(
    graph: &G,
    root: &Term,
) -> Result<Vec<Term>, GraphQueryError> {
    let mut classes = vec![root.clone()];
    let mut seen = HashSet::from([root.clone()]);
    for level1 in graph.direct_subclasses(root)? {
        if seen.insert(level1.clone()) {
            classes.push(level1.clone());
        }
        for level2 in graph.direct_subclasses(level1)? {
            if seen.insert(level2.clone()) {
                classes.push(level2.clone());
            }
        }
    }
    Ok(classes)
}

fn links_exactly<G: GraphAccess + ?Sized>(
    graph: &G,
    instance: &Term,
    target: &str,
) -> Result<bool, GraphQueryError> {
    if direct_values(graph, instance)?
        .iter()
        .any(|(_, value)| value.lexical() == target)
    {
        return Ok(true);
    }
    Ok(restriction_targets(graph, instance, false)?
        .iter()
        .any(|t| t.lexical() == target))
}

/// Every `(predicate, value)` of `instance` except `rdf:type`.
fn direct_values<'g, G: GraphAccess + ?Sized>(
    graph: &'g G,
    instance: &Term,
) -> Result<Vec<(&'g Term, &'g Term)>, GraphQueryError> {
    let rdf_type = Term::iri(vocab::RDF_TYPE);
    Ok(graph
        .lookup(TriplePattern::any().subject(instance))?
        .into_iter()
        .filter(|t| t.predicate != rdf_type)
        .map(|t| (&t.predicate, &t.object))
        .collect())
}

/// IRI objects of every type of `instance`, skipping `owl:onProperty` and
/// `rdf:type` edges. With `declared_only`, targets must themselves be typed
/// `owl:Class` or `owl:NamedIndividual`.
fn restriction_targets<'g, G: GraphAccess + ?Sized>(
    graph: &'g G,
    instance: &Term,
    declared_only: bool,
) -> Result<Vec<&'g Term>, GraphQueryError> {
    let rdf_type = Term::iri(vocab::RDF_TYPE);
    let on_property = Term::iri(vocab::OWL_ON_PROPERTY);
    let owl_class = Term::iri(vocab::OWL_CLASS);
    let named_individual = Term::iri(vocab::OWL_NAMED_INDIVIDUAL);

    let mut targets = Vec::new();
    for class in graph.types(instance)? {
        if class.is_literal() {
            continue;
        }
        for triple in graph.lookup(TriplePattern::any().subject(class))? {
            if triple.predicate == on_property || triple.predicate == rdf_type || !triple.object.is_iri() {
                continue;
            }
            if declared_only {
                let types = graph.types(&triple.object)?;
                if !types.iter().any(|t| **t == owl_class || **t == named_individual) {
                    continue;
                }
            }
            targets.push(&triple.object);
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use gfo_graph::{load_str, RdfFormat};

    use super::*;
    use crate::config::ComparisonConfig;
    use crate::reconcile::{compare_facet, MembershipStatus};
    use crate::resolver::Policy;

    const TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

gfo:ConfidenceFraud a owl:Class ; rdfs:subClassOf gfo:FraudActivity .
gfo:AffinityFraud a owl:Class ; rdfs:subClassOf gfo:ConfidenceFraud .

gfo:ExactScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    gfo:relatedActivity gfo:ConfidenceFraud ;
    rdfs:label "exact scheme" .
gfo:SubclassScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:AffinityFraud ] ;
    rdfs:label "subclass scheme" .

gfo:Level1 rdfs:subClassOf gfo:FraudDetection .
gfo:Level2 rdfs:subClassOf gfo:Level1 .
gfo:Level3 rdfs:subClassOf gfo:Level2 .
gfo:Guide1 a gfo:Level1 ; gfo:addresses gfo:ConfidenceFraud ; rdfs:label "level one guide" .
gfo:Guide2 a gfo:Level2 ; gfo:addresses gfo:ConfidenceFraud ; rdfs:label "level two guide" .
gfo:Guide3 a gfo:Level3 ; gfo:addresses gfo:ConfidenceFraud ; rdfs:label "level three guide" .
gfo:Guide4 a gfo:FraudDetection ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "restricted root guide" .
gfo:Guide5 a gfo:FraudDetection ; gfo:addresses gfo:AffinityFraud ; rdfs:label "subclass guide" .
"#;

    fn graph() -> gfo_graph::Graph {
        load_str("legacy.ttl", TTL, RdfFormat::Turtle).unwrap()
    }

    #[test]
    fn schemes_match_exact_iri_only() {
        let vocab = Vocabulary::default();
        let records = schemes(&graph(), &vocab, &vocab.category("ConfidenceFraud")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "exact scheme");
        let linked: Vec<_> = records[0].linked_relations.iter().flatten().map(String::as_str).collect();
        assert_eq!(linked, vec!["owl:someValuesFrom", "relatedActivity"]);
    }

    #[test]
    fn schemes_found_under_their_own_category() {
        let vocab = Vocabulary::default();
        let records = schemes(&graph(), &vocab, &vocab.category("AffinityFraud")).unwrap();
        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["subclass scheme"]);
    }

    const ALIASED: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

gfo:ConfidenceFraud rdfs:subClassOf gfo:FraudActivity .
gfo:Ponzi a gfo:FederalFraudScheme , gfo:ConfidenceFraud ;
    gfo:relatedActivity gfo:ConfidenceFraud ;
    rdfs:label "ponzi scheme" , "church investment club" .
"#;

    #[test]
    fn schemes_yield_one_record_per_label() {
        let vocab = Vocabulary::default();
        let graph = load_str("aliased.ttl", ALIASED, RdfFormat::Turtle).unwrap();
        let records = schemes(&graph, &vocab, &vocab.category("ConfidenceFraud")).unwrap();
        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["church investment club", "ponzi scheme"]);
        assert!(records.iter().all(|r| r.id.ends_with("/gfo/Ponzi")));
        assert_eq!(records[0].linked_relations, records[1].linked_relations);
    }

    #[test]
    fn extra_labels_surface_as_legacy_only_rows() {
        let vocab = Vocabulary::default();
        let graph = load_str("aliased.ttl", ALIASED, RdfFormat::Turtle).unwrap();
        let category = vocab.category("ConfidenceFraud");
        let modern = crate::resolver::resolve(Policy::Modern, &graph, &vocab, Facet::Scheme, &category).unwrap();
        let legacy = schemes(&graph, &vocab, &category).unwrap();
        assert_eq!(modern.len(), 1);

        let table = compare_facet(Facet::Scheme, &modern, &legacy, &ComparisonConfig::default());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.legacy_count(), 2);
        assert_eq!(table.modern_count(), 1);
        let statuses: Vec<_> = table.rows.iter().map(|r| r.status).collect();
        assert!(statuses.contains(&MembershipStatus::Both));
        assert!(statuses.contains(&MembershipStatus::LegacyOnly));
    }

    #[test]
    fn bounded_expansion_stops_at_two_levels() {
        let vocab = Vocabulary::default();
        let classes = bounded_subclasses(&graph(), vocab.facet_root(Facet::Detection)).unwrap();
        let names: Vec<_> = classes.iter().map(|c| local_name(c.lexical())).collect();
        assert_eq!(names, vec!["FraudDetection", "Level1", "Level2"]);
    }

    #[test]
    fn resources_skip_third_level_and_subclass_links() {
        let vocab = Vocabulary::default();
        let records = resources(
            &graph(),
            &vocab,
            Facet::Detection,
            &vocab.category("ConfidenceFraud"),
        )
        .unwrap();
        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["level one guide", "level two guide", "restricted root guide"]);
    }
}
