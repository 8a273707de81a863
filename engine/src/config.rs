//! Engine configuration.
//!
//! Configuration is read from a TOML file whose sections all fall back to
//! built-in defaults, so an empty file (or no file) describes the published
//! GAO Fraud Ontology:
//!
//! ```toml
//! [vocabulary]
//! namespace = "https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/"
//! category_root = "FraudActivity"
//! resource_relation = "addresses"
//!
//! [catalog]
//! label_case = "title"
//!
//! [comparison]
//! key = "label"
//! description_limit = 100
//! ```

use std::path::{Path, PathBuf};

use gfo_graph::{vocab, Term};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facet::Facet;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ontology vocabulary.
    pub vocabulary: VocabularyConfig,
    /// Category catalog display rules.
    pub catalog: CatalogConfig,
    /// Reconciliation rules.
    pub comparison: ComparisonConfig,
}

impl EngineConfig {
    /// Loads and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, does not parse, or
    /// holds invalid values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text does not parse or holds invalid
    /// values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.vocabulary;
        if v.namespace.trim().is_empty() {
            return Err(ConfigError::Invalid("vocabulary.namespace is empty".into()));
        }
        let names = [
            ("vocabulary.category_root", &v.category_root),
            ("vocabulary.facets.scheme", &v.facets.scheme),
            ("vocabulary.facets.awareness", &v.facets.awareness),
            ("vocabulary.facets.detection", &v.facets.detection),
            ("vocabulary.facets.risk_principle", &v.facets.risk_principle),
            ("vocabulary.facets.report", &v.facets.report),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} is empty")));
            }
        }
        if self.comparison.description_limit == 0 {
            return Err(ConfigError::Invalid(
                "comparison.description_limit must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Names of the ontology terms the engine relies on. Every name is either a
/// local name (joined to `namespace`) or an absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Namespace of the fraud ontology.
    pub namespace: String,
    /// Root of the category hierarchy.
    pub category_root: String,
    /// Root class of each facet.
    pub facets: FacetRoots,
    /// Relation the Modern policy requires on non-Scheme restriction
    /// matches. `None` matches restrictions on any property.
    pub resource_relation: Option<String>,
    /// Free-text narrative predicate on Scheme instances.
    pub narrative: String,
    /// External link predicate on resource instances.
    pub website: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            namespace: vocab::GFO.to_string(),
            category_root: "FraudActivity".into(),
            facets: FacetRoots::default(),
            resource_relation: Some("addresses".into()),
            narrative: "fraudNarrative".into(),
            website: "hasWebsite".into(),
        }
    }
}

/// Root class name of each facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetRoots {
    /// Fraud scheme examples.
    pub scheme: String,
    /// Fraud awareness resources.
    pub awareness: String,
    /// Prevention and detection guidance.
    pub detection: String,
    /// Fraud risk management principles.
    pub risk_principle: String,
    /// Audit reports.
    pub report: String,
}

impl Default for FacetRoots {
    fn default() -> Self {
        Self {
            scheme: "FederalFraudScheme".into(),
            awareness: "FraudEducation".into(),
            detection: "FraudDetection".into(),
            risk_principle: "FraudRiskManagementPrinciples".into(),
            report: "AuditProduct".into(),
        }
    }
}

/// How category labels are rendered in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCase {
    /// Upper-case the first letter of every word, leaving the rest as written.
    #[default]
    Title,
    /// Upper-case the first letter and lower-case the remainder.
    Sentence,
}

impl LabelCase {
    /// Renders `label` in this case.
    #[must_use]
    pub fn apply(self, label: &str) -> String {
        match self {
            LabelCase::Title => label
                .split(' ')
                .map(upper_first)
                .collect::<Vec<_>>()
                .join(" "),
            LabelCase::Sentence => {
                let mut chars = label.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Category catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Display case for category labels.
    pub label_case: LabelCase,
}

/// What identifies "the same instance" across the two policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonKey {
    /// Display label. Distinct instances sharing a label collapse into one row.
    #[default]
    Label,
    /// Instance IRI.
    Id,
}

/// Reconciliation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Row identity.
    pub key: ComparisonKey,
    /// Maximum description length (in characters) shown in comparison rows.
    pub description_limit: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            key: ComparisonKey::Label,
            description_limit: 100,
        }
    }
}

/// The vocabulary with every name resolved to a full IRI.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    namespace: String,
    category_root: Term,
    facet_roots: [Term; 5],
    resource_relation: Option<Term>,
    narrative: String,
    website: String,
}

impl Vocabulary {
    /// Resolves every name in `config` against its namespace.
    #[must_use]
    pub fn new(config: &VocabularyConfig) -> Self {
        let ns = config.namespace.as_str();
        let f = &config.facets;
        Self {
            namespace: ns.to_string(),
            category_root: Term::iri(expand(ns, &config.category_root)),
            facet_roots: [
                Term::iri(expand(ns, &f.scheme)),
                Term::iri(expand(ns, &f.awareness)),
                Term::iri(expand(ns, &f.detection)),
                Term::iri(expand(ns, &f.risk_principle)),
                Term::iri(expand(ns, &f.report)),
            ],
            resource_relation: config
                .resource_relation
                .as_deref()
                .map(|r| Term::iri(expand(ns, r))),
            narrative: expand(ns, &config.narrative),
            website: expand(ns, &config.website),
        }
    }

    /// Root of the category hierarchy.
    #[must_use]
    pub fn category_root(&self) -> &Term {
        &self.category_root
    }

    /// IRI of a category given its identifier (local name or IRI).
    #[must_use]
    pub fn category(&self, id: &str) -> Term {
        Term::iri(expand(&self.namespace, id))
    }

    /// Root class of `facet`.
    #[must_use]
    pub fn facet_root(&self, facet: Facet) -> &Term {
        &self.facet_roots[facet.index()]
    }

    /// Relation required on non-Scheme restriction matches, if any.
    #[must_use]
    pub fn resource_relation(&self) -> Option<&Term> {
        self.resource_relation.as_ref()
    }

    /// Narrative predicate IRI.
    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    /// Website predicate IRI.
    #[must_use]
    pub fn website(&self) -> &str {
        &self.website
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(&VocabularyConfig::default())
    }
}

fn expand(namespace: &str, name: &str) -> String {
    if name.contains("://") {
        name.to_string()
    } else {
        format!("{namespace}{name}")
    }
}
