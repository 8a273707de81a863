//! Modern policy: closure-based relatedness.
//!
//! A category matches itself and every transitive subclass, so a scheme
//! linked to `AffinityFraud` is found when searching `ConfidenceFraud`.

use std::collections::HashSet;

use gfo_graph::{local_name, ClassClosure, GraphAccess, GraphExt, GraphQueryError, Term};

use crate::config::Vocabulary;
use crate::facet::Facet;
use crate::normalize::sort_records;
use crate::record::{ResourceRecord, SchemeRow, DIRECT_SUBCLASS};
use crate::resolver::resource_record;

/// Raw Scheme matches for `category`, unsorted and possibly repeating an
/// instance.
///
/// Candidates are labelled instances typed directly by the Scheme root. An
/// instance matches through
/// - a restriction with `owl:onProperty` R and `owl:someValuesFrom` inside
///   the category closure (one row per R, marker = local name of R), or
/// - one of its own types lying inside the category closure, other than
///   the Scheme root itself (marker = [`DIRECT_SUBCLASS`]).
///
/// # Errors
///
/// Propagates [`GraphQueryError`] from the graph.
pub fn scheme_rows<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    category: &Term,
) -> Result<Vec<SchemeRow>, GraphQueryError> {
    let root = vocab.facet_root(Facet::Scheme);
    let related = graph.descendants(category)?;
    let mut rows = Vec::new();

    for instance in graph.instances_of(root)? {
        let labels = graph.labels(instance)?;
        if labels.is_empty() {
            continue;
        }

        let mut relations = Vec::new();
        for restriction in graph.restrictions(instance)? {
            if restriction.some_values_from.iter().any(|t| related.contains(t)) {
                relations.extend(
                    restriction
                        .on_property
                        .iter()
                        .map(|p| local_name(p.lexical()).to_string()),
                );
            }
        }
        for class in graph.types(instance)? {
            if class != root && related.contains(class) {
                relations.push(DIRECT_SUBCLASS.to_string());
            }
        }
        if relations.is_empty() {
            continue;
        }

        let record = crate::resolver::scheme_record(graph, vocab, instance, String::new())?;
        for label in &labels {
            for relation in &relations {
                rows.push(SchemeRow {
                    id: record.id.clone(),
                    label: label.clone(),
                    description: record.description.clone(),
                    narrative: record.narrative.clone(),
                    provenance: record.provenance.clone(),
                    relation: relation.clone(),
                });
            }
        }
    }
    Ok(rows)
}

/// Awareness, Detection and Report instances related to `category`, sorted.
///
/// Candidates are labelled instances of any class under the facet root.
/// An instance matches through a restriction whose `owl:someValuesFrom` lies
/// in the category closure (restricted to the configured resource relation,
/// when one is set), or through one of its own types lying in the category
/// closure, other than the facet root.
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
    let root = vocab.facet_root(facet);
    let facet_classes = graph.descendants(root)?;
    let related = graph.descendants(category)?;
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for class in facet_classes.iter() {
        for instance in graph.instances_of(class)? {
            if !seen.insert(instance) {
                continue;
            }
            let Some(label) = graph.label(instance)? else {
                continue;
            };
            if addresses(graph, vocab, instance, root, &related)? {
                records.push(resource_record(graph, vocab, instance, label)?);
            }
        }
    }
    sort_records(&mut records);
    Ok(records)
}

fn addresses<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    instance: &Term,
    facet_root: &Term,
    related: &ClassClosure,
) -> Result<bool, GraphQueryError> {
    for restriction in graph.restrictions(instance)? {
        let relation_ok = match vocab.resource_relation() {
            Some(relation) => restriction.on_property.contains(&relation),
            None => true,
        };
        if relation_ok && restriction.some_values_from.iter().any(|t| related.contains(t)) {
            return Ok(true);
        }
    }
    for class in graph.types(instance)? {
        if class != facet_root && related.contains(class) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use gfo_graph::{load_str, RdfFormat};

    use super::*;
    use crate::normalize::merge_scheme_rows;

    const TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix dc:   <http://purl.org/dc/elements/1.1/> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

gfo:ConfidenceFraud a owl:Class ; rdfs:subClassOf gfo:FraudActivity .
gfo:AffinityFraud a owl:Class ; rdfs:subClassOf gfo:ConfidenceFraud .
gfo:ReligiousAffinityFraud a owl:Class ; rdfs:subClassOf gfo:AffinityFraud .
gfo:BenefitsFraud a owl:Class ; rdfs:subClassOf gfo:FraudActivity .
gfo:AffinityScheme rdfs:subClassOf gfo:FederalFraudScheme , gfo:AffinityFraud .

gfo:DeepScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:ReligiousAffinityFraud ] ;
    a [ a owl:Restriction ; owl:onProperty gfo:exploits ; owl:someValuesFrom gfo:AffinityFraud ] ;
    rdfs:label "deep scheme" ;
    dc:description "Reaches the category three levels down." .

gfo:TypedScheme a gfo:FederalFraudScheme , gfo:AffinityScheme ;
    rdfs:label "Typed scheme" .

gfo:OtherScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:BenefitsFraud ] ;
    rdfs:label "Benefits scheme" .

gfo:NoPropertyScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "missing onProperty" .

gfo:OnlineCourse rdfs:subClassOf gfo:FraudEducation .
gfo:Course1 a gfo:OnlineCourse ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:AffinityFraud ] ;
    rdfs:label "Affinity awareness course" .
gfo:Course2 a gfo:FraudEducation ;
    a [ a owl:Restriction ; owl:onProperty gfo:mentions ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "mentions only" .
gfo:Course3 a gfo:FraudEducation , gfo:ConfidenceFraud ;
    rdfs:label "typed under the category" .
"#;

    fn graph() -> gfo_graph::Graph {
        load_str("modern.ttl", TTL, RdfFormat::Turtle).unwrap()
    }

    #[test]
    fn scheme_rows_follow_the_closure() {
        let vocab = Vocabulary::default();
        let rows = scheme_rows(&graph(), &vocab, &vocab.category("ConfidenceFraud")).unwrap();
        let merged = merge_scheme_rows(rows);
        let labels: Vec<_> = merged.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["deep scheme", "Typed scheme"]);

        let deep = &merged[0];
        let relations: Vec<_> = deep.linked_relations.iter().flatten().map(String::as_str).collect();
        assert_eq!(relations, vec!["exploits", "involves"]);
        assert_eq!(
            deep.description.as_deref(),
            Some("Reaches the category three levels down.")
        );

        let typed = &merged[1];
        let relations: Vec<_> = typed.linked_relations.iter().flatten().map(String::as_str).collect();
        assert_eq!(relations, vec![DIRECT_SUBCLASS]);
    }

    #[test]
    fn scheme_rows_empty_for_unrelated_category() {
        let vocab = Vocabulary::default();
        let rows = scheme_rows(&graph(), &vocab, &vocab.category("IdentityTheft")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn resources_require_the_configured_relation() {
        let vocab = Vocabulary::default();
        let records = resources(
            &graph(),
            &vocab,
            Facet::Awareness,
            &vocab.category("ConfidenceFraud"),
        )
        .unwrap();
        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Affinity awareness course", "typed under the category"]);
    }

    #[test]
    fn resources_any_property_when_relation_unset() {
        let mut config = crate::config::VocabularyConfig::default();
        config.resource_relation = None;
        let vocab = Vocabulary::new(&config);
        let records = resources(
            &graph(),
            &vocab,
            Facet::Awareness,
            &vocab.category("ConfidenceFraud"),
        )
        .unwrap();
        assert_eq!(records.len(), 3);
    }
}
