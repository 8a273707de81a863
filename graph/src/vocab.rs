//! Standard IRI constants used by the traversal helpers and resolvers.

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// SKOS core namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
/// Dublin Core elements namespace.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// GAO Fraud Ontology namespace.
pub const GFO: &str = "https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/";

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:subClassOf`
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:isDefinedBy`
pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
/// `owl:Class`
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:NamedIndividual`
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
/// `owl:onProperty`
pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
/// `owl:someValuesFrom`
pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
/// `skos:definition`
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
/// `dc:description`
pub const DC_DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
