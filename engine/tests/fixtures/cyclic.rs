//! An ontology whose subclass graph contains cycles, both in the category
//! hierarchy and under a facet root.

/// The cyclic fixture.
pub const CYCLIC_ONTOLOGY: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

gfo:LoopA a owl:Class ;
    rdfs:subClassOf gfo:FraudActivity , gfo:LoopB ;
    rdfs:label "loop fraud" .
gfo:LoopB a owl:Class ; rdfs:subClassOf gfo:LoopA .

gfo:LoopScheme a gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:LoopB ] ;
    rdfs:label "loop scheme" .

gfo:Course a owl:Class ; rdfs:subClassOf gfo:FraudEducation .
gfo:FraudEducation rdfs:subClassOf gfo:Course .
gfo:LoopCourse a gfo:Course ;
    gfo:addresses gfo:LoopA ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:LoopA ] ;
    rdfs:label "loop course" .
"#;
