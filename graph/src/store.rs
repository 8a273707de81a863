//! Indexed in-memory triple store.

use std::collections::{HashMap, HashSet};

use crate::error::GraphQueryError;
use crate::model::{Term, Triple, TriplePattern};

/// Pattern-query capability over a read-only triple graph.
///
/// Every higher-level traversal in this workspace (closure, restriction
/// matching, label lookup) is expressed through [`GraphAccess::lookup`], so
/// any backend able to answer triple patterns can stand behind the resolvers.
pub trait GraphAccess {
    /// Returns every triple matching `pattern`, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQueryError`] if the pattern is malformed (a literal in
    /// subject position or a non-IRI predicate).
    fn lookup(&self, pattern: TriplePattern<'_>) -> Result<Vec<&Triple>, GraphQueryError>;
}

/// An immutable graph with subject, predicate and object indexes.
///
/// Triples keep the order in which the parser produced them; duplicates are
/// dropped on construction. Lookups return matches in that order, which makes
/// "first encountered" decisions downstream deterministic.
#[derive(Debug, Default)]
pub struct Graph {
    source: String,
    triples: Vec<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_predicate: HashMap<Term, Vec<usize>>,
    by_object: HashMap<Term, Vec<usize>>,
}

impl Graph {
    /// Builds a graph from `triples`, recording `source` as its origin.
    pub fn from_triples(source: impl Into<String>, triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut graph = Graph {
            source: source.into(),
            ..Graph::default()
        };
        let mut seen = HashSet::new();
        for triple in triples {
            if !seen.insert(triple.clone()) {
                continue;
            }
            let idx = graph.triples.len();
            graph
                .by_subject
                .entry(triple.subject.clone())
                .or_default()
                .push(idx);
            graph
                .by_predicate
                .entry(triple.predicate.clone())
                .or_default()
                .push(idx);
            graph
                .by_object
                .entry(triple.object.clone())
                .or_default()
                .push(idx);
            graph.triples.push(triple);
        }
        graph
    }

    /// Name of the document this graph was loaded from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn candidates(&self, pattern: &TriplePattern<'_>) -> Option<&[usize]> {
        let lists = [
            pattern.subject.map(|t| self.by_subject.get(t)),
            pattern.predicate.map(|t| self.by_predicate.get(t)),
            pattern.object.map(|t| self.by_object.get(t)),
        ];
        let mut best: Option<&[usize]> = None;
        for list in lists.into_iter().flatten() {
            // A bound term absent from its index means no triple can match.
            let list = list.map_or(&[][..], Vec::as_slice);
            if best.map_or(true, |b| list.len() < b.len()) {
                best = Some(list);
            }
        }
        best
    }
}

fn validate(pattern: &TriplePattern<'_>) -> Result<(), GraphQueryError> {
    if let Some(subject) = pattern.subject {
        if subject.is_literal() {
            return Err(GraphQueryError::LiteralSubject(subject.to_string()));
        }
    }
    if let Some(predicate) = pattern.predicate {
        if !predicate.is_iri() {
            return Err(GraphQueryError::InvalidPredicate(predicate.to_string()));
        }
    }
    Ok(())
}

impl GraphAccess for Graph {
    fn lookup(&self, pattern: TriplePattern<'_>) -> Result<Vec<&Triple>, GraphQueryError> {
        validate(&pattern)?;
        let matches = match self.candidates(&pattern) {
            Some(indices) => indices
                .iter()
                .map(|&i| &self.triples[i])
                .filter(|t| pattern.matches(t))
                .collect(),
            None => self.triples.iter().collect(),
        };
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_triples(
            "sample",
            vec![
                Triple::new(Term::iri("a"), Term::iri("p"), Term::iri("b")),
                Triple::new(Term::iri("a"), Term::iri("p"), Term::iri("c")),
                Triple::new(Term::iri("b"), Term::iri("q"), Term::literal("x")),
                Triple::new(Term::iri("a"), Term::iri("p"), Term::iri("b")),
            ],
        )
    }

    #[test]
    fn duplicates_are_dropped() {
        let graph = sample();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.source(), "sample");
    }

    #[test]
    fn lookup_by_subject_keeps_load_order() {
        let graph = sample();
        let a = Term::iri("a");
        let objects: Vec<_> = graph
            .lookup(TriplePattern::any().subject(&a))
            .into_iter()
            .flatten()
            .map(|t| t.object.lexical().to_string())
            .collect();
        assert_eq!(objects, vec!["b", "c"]);
    }

    #[test]
    fn lookup_with_unknown_term_is_empty() {
        let graph = sample();
        let z = Term::iri("z");
        let p = Term::iri("p");
        let found = graph.lookup(TriplePattern::any().subject(&z).predicate(&p));
        assert_eq!(found.map(|v| v.len()), Ok(0));
    }

    #[test]
    fn wildcard_returns_everything() {
        let graph = sample();
        assert_eq!(graph.lookup(TriplePattern::any()).map(|v| v.len()), Ok(3));
    }

    #[test]
    fn literal_subject_is_rejected() {
        let graph = sample();
        let lit = Term::literal("x");
        let err = graph.lookup(TriplePattern::any().subject(&lit));
        assert!(matches!(err, Err(GraphQueryError::LiteralSubject(_))));
    }

    #[test]
    fn blank_predicate_is_rejected() {
        let graph = sample();
        let blank = Term::Blank("b0".into());
        let err = graph.lookup(TriplePattern::any().predicate(&blank));
        assert!(matches!(err, Err(GraphQueryError::InvalidPredicate(_))));
    }
}
