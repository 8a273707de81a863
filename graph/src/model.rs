//! Core graph model types.
//!
//! These types are owned copies of the RDF terms produced by the parser.
//! Every triple in a [`Graph`](crate::Graph) is built from them, and lookups
//! hand out borrows into the graph rather than clones.

use std::fmt;

/// An RDF term: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named node (e.g., `"https://example.org/gfo/FraudActivity"`).
    Iri(String),
    /// A blank node label as assigned by the parser. Restriction classes in
    /// OWL documents are usually blank nodes.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

/// A literal term: lexical form plus an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form exactly as written in the source.
    pub value: String,
    /// Language tag (e.g., `"en"`), if any.
    pub language: Option<String>,
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a plain literal term with no language tag.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: None,
        })
    }

    /// Returns the IRI string if this term is a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns true if this term is a named node.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Returns true if this term is a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Returns the textual value of the term: the IRI for named nodes, the
    /// lexical form for literals and the label for blank nodes.
    ///
    /// This is the `STR()` view used by exact-match comparisons.
    #[must_use]
    pub fn lexical(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::Blank(id) => id,
            Term::Literal(lit) => &lit.value,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(id) => write!(f, "_:{id}"),
            Term::Literal(Literal {
                value,
                language: Some(lang),
            }) => write!(f, "{value:?}@{lang}"),
            Term::Literal(Literal {
                value,
                language: None,
            }) => write!(f, "{value:?}"),
        }
    }
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject term.
    pub subject: Term,
    /// Predicate term (always an IRI in well-formed data).
    pub predicate: Term,
    /// Object term.
    pub object: Term,
}

impl Triple {
    /// Creates a triple from its three terms.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// A triple pattern. `None` in any position is a wildcard.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriplePattern<'a> {
    /// Subject to match, or any.
    pub subject: Option<&'a Term>,
    /// Predicate to match, or any.
    pub predicate: Option<&'a Term>,
    /// Object to match, or any.
    pub object: Option<&'a Term>,
}

impl<'a> TriplePattern<'a> {
    /// Pattern matching every triple.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Binds the subject position.
    #[must_use]
    pub fn subject(mut self, term: &'a Term) -> Self {
        self.subject = Some(term);
        self
    }

    /// Binds the predicate position.
    #[must_use]
    pub fn predicate(mut self, term: &'a Term) -> Self {
        self.predicate = Some(term);
        self
    }

    /// Binds the object position.
    #[must_use]
    pub fn object(mut self, term: &'a Term) -> Self {
        self.object = Some(term);
        self
    }

    /// Returns true if `triple` satisfies every bound position.
    #[must_use]
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject.map_or(true, |s| *s == triple.subject)
            && self.predicate.map_or(true, |p| *p == triple.predicate)
            && self.object.map_or(true, |o| *o == triple.object)
    }
}

/// Returns the local name of an IRI: the text after the last `/` or `#`.
///
/// ```
/// assert_eq!(gfo_graph::local_name("https://ex.org/gfo/addresses"), "addresses");
/// assert_eq!(gfo_graph::local_name("http://www.w3.org/2002/07/owl#Class"), "Class");
/// ```
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}
