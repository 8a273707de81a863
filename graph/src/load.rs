//! RDF document loading: Turtle 1.1, N-Triples, RDF/XML and JSON-LD.
//!
//! Parsing is delegated to the sophia parsers; the parsed statements are
//! collected into a `sophia_inmem` graph (or dataset, for JSON-LD) and then
//! copied into the owned, indexed [`Graph`] the resolvers query.

use std::path::Path;

use sophia_api::dataset::Dataset as _;
use sophia_api::graph::Graph as _;
use sophia_api::parser::{QuadParser, TripleParser};
use sophia_api::quad::Quad as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple as _;
use sophia_inmem::dataset::LightDataset;
use sophia_inmem::graph::LightGraph;
use sophia_jsonld::JsonLdParser;
use sophia_turtle::parser::{nt, turtle};
use sophia_xml::parser::RdfXmlParser;
use tracing::{debug, info};

use crate::error::GraphLoadError;
use crate::model::{Literal, Term, Triple};
use crate::store::Graph;

/// Concrete RDF syntaxes the loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
    /// RDF/XML (`.rdf`, `.xml`, `.owl`).
    RdfXml,
    /// JSON-LD 1.1 (`.jsonld`, `.json`). Named graphs are merged.
    JsonLd,
}

impl RdfFormat {
    /// Picks the syntax from a file name's extension.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::UnsupportedFormat`] for any other extension.
    pub fn from_name(name: &str) -> Result<Self, GraphLoadError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("ttl") => Ok(RdfFormat::Turtle),
            Some("nt") => Ok(RdfFormat::NTriples),
            Some("rdf" | "xml" | "owl") => Ok(RdfFormat::RdfXml),
            Some("jsonld" | "json") => Ok(RdfFormat::JsonLd),
            _ => Err(GraphLoadError::UnsupportedFormat {
                name: name.to_string(),
            }),
        }
    }
}

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// Returns [`GraphLoadError`] if the extension is unsupported, the file cannot
/// be read, or the document does not parse.
pub fn load_path(path: &Path) -> Result<Graph, GraphLoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let format = RdfFormat::from_name(&name)?;
    let content = std::fs::read_to_string(path).map_err(|source| GraphLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&name, &content, format)
}

enum Parsed {
    Triples(LightGraph),
    Quads(LightDataset),
}

/// Parses `content` in the given syntax. `name` is recorded as the graph's
/// source and used in diagnostics.
///
/// # Errors
///
/// Returns [`GraphLoadError::Parse`] if the document is not well-formed.
pub fn load_str(name: &str, content: &str, format: RdfFormat) -> Result<Graph, GraphLoadError> {
    let parsed: Result<Parsed, String> = match format {
        RdfFormat::Turtle => turtle::parse_str(content)
            .collect_triples()
            .map(Parsed::Triples)
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => nt::parse_str(content)
            .collect_triples()
            .map(Parsed::Triples)
            .map_err(|e| e.to_string()),
        RdfFormat::RdfXml => RdfXmlParser::default()
            .parse_str(content)
            .collect_triples()
            .map(Parsed::Triples)
            .map_err(|e| e.to_string()),
        RdfFormat::JsonLd => JsonLdParser::new()
            .parse_str(content)
            .collect_quads()
            .map(Parsed::Quads)
            .map_err(|e| e.to_string()),
    };
    let parsed = parsed.map_err(|message| GraphLoadError::Parse {
        name: name.to_string(),
        message,
    })?;

    let mut triples = Vec::new();
    let mut skipped = 0usize;
    let mut keep = |s, p, o| match (s, p, o) {
        (Some(s), Some(p), Some(o)) => triples.push(Triple::new(s, p, o)),
        _ => skipped += 1,
    };
    match &parsed {
        Parsed::Triples(g) => {
            for t in g.triples().flatten() {
                keep(convert(t.s()), convert(t.p()), convert(t.o()));
            }
        }
        Parsed::Quads(d) => {
            for q in d.quads().flatten() {
                keep(convert(q.s()), convert(q.p()), convert(q.o()));
            }
        }
    }
    if skipped > 0 {
        debug!(source = name, skipped, "skipped generalized RDF triples");
    }

    let graph = Graph::from_triples(name, triples);
    info!(source = name, ?format, triples = graph.len(), "graph loaded");
    Ok(graph)
}

fn convert<T: RdfTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::Blank(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|value| {
            Term::Literal(Literal {
                value: value.to_string(),
                language: term.language_tag().map(|tag| tag.as_str().to_owned()),
            })
        }),
        _ => None,
    }
}
