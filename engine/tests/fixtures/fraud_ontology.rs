//! A small but complete fraud ontology.
//!
//! Categories: `ConfidenceFraud` (with subclass `AffinityFraud`),
//! `BenefitsFraud`, and `IdentityTheft`, which nothing references.
//! Every facet holds at least one instance on which the Modern and Legacy
//! policies disagree for `ConfidenceFraud`:
//!
//! | facet     | Modern only          | Legacy only         | both                     |
//! |-----------|----------------------|---------------------|--------------------------|
//! | scheme    | Ponzi scheme         |                     | Lottery scheme           |
//! | awareness | affinity course      | confidence course   | confidence course online |
//! | detection | deep mining guide    |                     | analytics guide          |
//! | risk      |                      |                     | both principles          |
//! | report    |                      |                     | GAO-24-106565            |

/// The fraud ontology fixture.
pub const FRAUD_ONTOLOGY: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix dc:   <http://purl.org/dc/elements/1.1/> .
@prefix gfo:  <https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/> .

# Category hierarchy
gfo:FraudActivity a owl:Class .
gfo:ConfidenceFraud a owl:Class ;
    rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "confidence fraud" .
gfo:AffinityFraud a owl:Class ;
    rdfs:subClassOf gfo:ConfidenceFraud ;
    rdfs:label "affinity fraud" .
gfo:BenefitsFraud a owl:Class ;
    rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "benefits fraud" .
gfo:IdentityTheft a owl:Class ;
    rdfs:subClassOf gfo:FraudActivity ;
    rdfs:label "identity theft" .

# Schemes
gfo:FederalFraudScheme a owl:Class .
gfo:PonziScheme a owl:NamedIndividual , gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:AffinityFraud ] ;
    rdfs:label "Ponzi scheme" ;
    dc:description "Early investors are paid with money taken from later investors, who are recruited through the trust that exists within a shared community or group." ;
    gfo:fraudNarrative "A church elder promised members steady returns." ;
    rdfs:isDefinedBy "GAO-22-105493" .
gfo:LotteryScheme a owl:NamedIndividual , gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    gfo:relatedActivity gfo:ConfidenceFraud ;
    rdfs:label "Lottery scheme" ;
    dc:description "Victims pay fees to collect a prize that does not exist." .
gfo:OvertimeScheme a owl:NamedIndividual , gfo:FederalFraudScheme ;
    a [ a owl:Restriction ; owl:onProperty gfo:involves ; owl:someValuesFrom gfo:BenefitsFraud ] ;
    rdfs:label "Overtime scheme" .

# Awareness
gfo:FraudEducation a owl:Class .
gfo:OnlineCourse a owl:Class ; rdfs:subClassOf gfo:FraudEducation .
gfo:AffinityCourse a gfo:OnlineCourse ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:AffinityFraud ] ;
    rdfs:label "affinity course" ;
    skos:definition "Recognizing fraud inside trusted groups." ;
    gfo:hasWebsite "https://example.org/affinity" .
gfo:ConfidenceCourse a gfo:FraudEducation ;
    gfo:addresses gfo:ConfidenceFraud ;
    rdfs:label "confidence course" .
gfo:ConfidenceCourseOnline a gfo:OnlineCourse ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "confidence course online" .

# Detection, four levels deep
gfo:FraudDetection a owl:Class .
gfo:Analytics a owl:Class ; rdfs:subClassOf gfo:FraudDetection .
gfo:DataMining a owl:Class ; rdfs:subClassOf gfo:Analytics .
gfo:DeepMining a owl:Class ; rdfs:subClassOf gfo:DataMining .
gfo:AnalyticsGuide a gfo:Analytics ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "analytics guide" .
gfo:DeepMiningGuide a gfo:DeepMining ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    rdfs:label "deep mining guide" .

# Risk management principles
gfo:FraudRiskManagementPrinciples a owl:Class .
gfo:Assess a owl:Class ; rdfs:subClassOf gfo:FraudRiskManagementPrinciples .
gfo:Commit a gfo:FraudRiskManagementPrinciples ;
    rdfs:label "commit to combating fraud" .
gfo:PlanRegularAssessments a gfo:Assess ;
    rdfs:label "plan regular fraud risk assessments" .

# Reports
gfo:AuditProduct a owl:Class .
gfo:Report106565 a gfo:AuditProduct ;
    a [ a owl:Restriction ; owl:onProperty gfo:addresses ; owl:someValuesFrom gfo:ConfidenceFraud ] ;
    gfo:addresses gfo:ConfidenceFraud ;
    rdfs:label "GAO-24-106565" .
"#;
