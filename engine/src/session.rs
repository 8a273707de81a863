//! Search session: the loaded graph, its category catalog, and the results
//! of the last search and comparison.
//!
//! A session moves through three states. With no graph every query fails
//! with [`SessionError::NoGraph`]. Once a graph is loaded the catalog is
//! available and searches may run. After a search, [`Session::compare`]
//! reconciles its Modern results against a Legacy run. Loading a new graph
//! (or failing to) discards everything derived from the previous one.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gfo_graph::{load_path, load_str, Graph, GraphAccess, GraphLoadError, RdfFormat, Term};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{list_categories, CategoryCatalog, CategoryEntry};
use crate::config::{ComparisonConfig, EngineConfig, Vocabulary};
use crate::error::SessionError;
use crate::facet::Facet;
use crate::reconcile::{compare_facet, summarize, ComparisonSummary, FacetComparison};
use crate::record::ResourceRecord;
use crate::resolver::{resolve, Policy};

/// Modern results of one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetResult {
    /// Facet searched.
    pub facet: Facet,
    /// Sorted records. Empty when the facet failed.
    pub records: Vec<ResourceRecord>,
    /// Failure message, if the facet query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of [`Session::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// The category searched.
    pub category: CategoryEntry,
    /// One entry per facet, in reporting order.
    pub facets: Vec<FacetResult>,
}

impl SearchOutcome {
    /// Total number of records across all facets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.facets.iter().map(|f| f.records.len()).sum()
    }

    /// Result of a single facet.
    #[must_use]
    pub fn facet(&self, facet: Facet) -> Option<&FacetResult> {
        self.facets.iter().find(|f| f.facet == facet)
    }
}

/// A facet query that failed during a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetError {
    /// Facet that failed.
    pub facet: Facet,
    /// Policy whose query failed.
    pub policy: Policy,
    /// Failure message.
    pub message: String,
}

/// Outcome of [`Session::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    /// The category compared.
    pub category: CategoryEntry,
    /// One table per facet, in reporting order.
    pub facets: Vec<FacetComparison>,
    /// Per-facet counts and totals.
    pub summary: ComparisonSummary,
    /// Facet failures. A failed side counts as empty in its table.
    pub errors: Vec<FacetError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceIdentity {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceIdentity {
    fn of(path: &Path) -> Result<Self, GraphLoadError> {
        let io = |source| GraphLoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let canonical = std::fs::canonicalize(path).map_err(io)?;
        let meta = std::fs::metadata(&canonical).map_err(io)?;
        Ok(Self {
            path: canonical,
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

#[derive(Debug)]
struct Loaded {
    identity: Option<SourceIdentity>,
    graph: Graph,
    catalog: CategoryCatalog,
    last_search: Option<SearchOutcome>,
    last_comparison: Option<ComparisonOutcome>,
}

/// An explicit search context over one loaded ontology.
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    vocab: Vocabulary,
    loaded: Option<Loaded>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let vocab = Vocabulary::new(&config.vocabulary);
        Self {
            config,
            vocab,
            loaded: None,
        }
    }

    /// Loads the ontology at `path` and builds its catalog.
    ///
    /// Reloading the file that is already loaded (same canonical path, size
    /// and modification time) keeps the current graph and results.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Load`] if the file cannot be read or parsed,
    /// or [`SessionError::Query`] if the catalog cannot be built. Either
    /// way the session is left with no graph.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&CategoryCatalog, SessionError> {
        let path = path.as_ref();
        let identity = match SourceIdentity::of(path) {
            Ok(identity) => identity,
            Err(e) => {
                self.loaded = None;
                return Err(e.into());
            }
        };

        let cached = self
            .loaded
            .as_ref()
            .is_some_and(|l| l.identity.as_ref() == Some(&identity));
        if cached {
            debug!(path = %identity.path.display(), "ontology unchanged; keeping loaded graph");
            return self.categories();
        }

        self.loaded = None;
        let graph = load_path(&identity.path)?;
        self.install(graph, Some(identity))
    }

    /// Parses `content` as the ontology and builds its catalog. Always
    /// replaces the current graph.
    ///
    /// # Errors
    ///
    /// As [`Session::load_path`].
    pub fn load_str(
        &mut self,
        name: &str,
        content: &str,
        format: RdfFormat,
    ) -> Result<&CategoryCatalog, SessionError> {
        self.loaded = None;
        let graph = load_str(name, content, format)?;
        self.install(graph, None)
    }

    fn install(
        &mut self,
        graph: Graph,
        identity: Option<SourceIdentity>,
    ) -> Result<&CategoryCatalog, SessionError> {
        let catalog = list_categories(&graph, &self.vocab, self.config.catalog.label_case)?;
        info!(source = graph.source(), categories = catalog.len(), "ontology ready");
        let loaded = self.loaded.insert(Loaded {
            identity,
            graph,
            catalog,
            last_search: None,
            last_comparison: None,
        });
        Ok(&loaded.catalog)
    }

    /// Drops the graph and every derived result.
    pub fn invalidate(&mut self) {
        if self.loaded.take().is_some() {
            debug!("session invalidated");
        }
    }

    /// The loaded graph, if any.
    #[must_use]
    pub fn graph(&self) -> Option<&Graph> {
        self.loaded.as_ref().map(|l| &l.graph)
    }

    /// Category catalog of the loaded graph.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGraph`] if nothing is loaded.
    pub fn categories(&self) -> Result<&CategoryCatalog, SessionError> {
        self.loaded
            .as_ref()
            .map(|l| &l.catalog)
            .ok_or(SessionError::NoGraph)
    }

    /// Result of the last search, if any.
    #[must_use]
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.loaded.as_ref().and_then(|l| l.last_search.as_ref())
    }

    /// Result of the last comparison, if any.
    #[must_use]
    pub fn last_comparison(&self) -> Option<&ComparisonOutcome> {
        self.loaded.as_ref().and_then(|l| l.last_comparison.as_ref())
    }

    /// Runs the Modern policy over every facet for the category named by
    /// `category` (display label or identifier). See [`run_search`].
    ///
    /// Any previous comparison is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGraph`] if nothing is loaded, or
    /// [`SessionError::UnknownCategory`] if the catalog has no such category.
    pub fn search(&mut self, category: &str) -> Result<&SearchOutcome, SessionError> {
        let loaded = self.loaded.as_mut().ok_or(SessionError::NoGraph)?;
        let entry = loaded
            .catalog
            .resolve(category)
            .cloned()
            .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))?;
        let outcome = run_search(&loaded.graph, &self.vocab, entry);
        loaded.last_comparison = None;
        Ok(loaded.last_search.insert(outcome))
    }

    /// Reconciles the last search against the Legacy policy. See
    /// [`run_comparison`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGraph`] if nothing is loaded, or
    /// [`SessionError::NoSearch`] if no search has run since the last load.
    pub fn compare(&mut self) -> Result<&ComparisonOutcome, SessionError> {
        let loaded = self.loaded.as_mut().ok_or(SessionError::NoGraph)?;
        let search = loaded.last_search.as_ref().ok_or(SessionError::NoSearch)?;
        let outcome = run_comparison(&loaded.graph, &self.vocab, &self.config.comparison, search);
        Ok(loaded.last_comparison.insert(outcome))
    }
}

/// Runs the Modern policy over every facet of `category`.
///
/// A facet whose query fails yields no records and an error message; the
/// other facets are unaffected.
pub fn run_search<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    category: CategoryEntry,
) -> SearchOutcome {
    let term = Term::iri(category.iri.clone());
    let facets: Vec<FacetResult> = Facet::ALL
        .iter()
        .map(|&facet| match resolve(Policy::Modern, graph, vocab, facet, &term) {
            Ok(records) => FacetResult {
                facet,
                records,
                error: None,
            },
            Err(e) => {
                warn!(facet = facet.display_name(), error = %e, "facet query failed");
                FacetResult {
                    facet,
                    records: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let outcome = SearchOutcome { category, facets };
    info!(category = %outcome.category.id, total = outcome.total(), "search complete");
    outcome
}

/// Reconciles `search` against a Legacy run over the same graph.
///
/// Failures on either side are collected in [`ComparisonOutcome::errors`]
/// and the failed side counts as empty in its facet table.
pub fn run_comparison<G: GraphAccess + ?Sized>(
    graph: &G,
    vocab: &Vocabulary,
    options: &ComparisonConfig,
    search: &SearchOutcome,
) -> ComparisonOutcome {
    let term = Term::iri(search.category.iri.clone());

    let mut errors = Vec::new();
    let mut tables = Vec::with_capacity(search.facets.len());
    for modern in &search.facets {
        if let Some(message) = &modern.error {
            errors.push(FacetError {
                facet: modern.facet,
                policy: Policy::Modern,
                message: message.clone(),
            });
        }
        let legacy = match resolve(Policy::Legacy, graph, vocab, modern.facet, &term) {
            Ok(records) => records,
            Err(e) => {
                warn!(facet = modern.facet.display_name(), error = %e, "legacy facet query failed");
                errors.push(FacetError {
                    facet: modern.facet,
                    policy: Policy::Legacy,
                    message: e.to_string(),
                });
                Vec::new()
            }
        };
        tables.push(compare_facet(modern.facet, &modern.records, &legacy, options));
    }

    let summary = summarize(&tables);
    info!(
        category = %search.category.id,
        modern = summary.total.modern_count,
        legacy = summary.total.legacy_count,
        "comparison complete"
    );
    ComparisonOutcome {
        category: search.category.clone(),
        facets: tables,
        summary,
        errors,
    }
}
