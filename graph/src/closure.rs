//! Traversal helpers built on [`GraphAccess::lookup`].
//!
//! Subclass closures are computed by explicit breadth-first traversal with a
//! visited set, so ontologies with `rdfs:subClassOf` cycles still terminate.

use std::collections::{HashSet, VecDeque};

use crate::error::GraphQueryError;
use crate::model::{Term, TriplePattern};
use crate::store::GraphAccess;
use crate::vocab;

/// The reflexive-transitive set of a class and its descendants.
///
/// Iteration follows breadth-first discovery order, starting with the root.
#[derive(Debug, Clone)]
pub struct ClassClosure {
    order: Vec<Term>,
    members: HashSet<Term>,
}

impl ClassClosure {
    fn new(root: &Term) -> Self {
        Self {
            order: vec![root.clone()],
            members: HashSet::from([root.clone()]),
        }
    }

    fn insert(&mut self, term: &Term) -> bool {
        if self.members.insert(term.clone()) {
            self.order.push(term.clone());
            true
        } else {
            false
        }
    }

    /// Returns true if `class` is the root or one of its descendants.
    #[must_use]
    pub fn contains(&self, class: &Term) -> bool {
        self.members.contains(class)
    }

    /// Iterates the members, root first.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.order.iter()
    }
}

/// An OWL restriction class typing some instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction<'g> {
    /// The (usually anonymous) restriction node.
    pub node: &'g Term,
    /// `owl:onProperty` values.
    pub on_property: Vec<&'g Term>,
    /// `owl:someValuesFrom` values.
    pub some_values_from: Vec<&'g Term>,
}

/// Typed traversal operations available on every [`GraphAccess`] backend.
pub trait GraphExt: GraphAccess {
    /// Objects of `(subject, predicate, ?)`.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn objects(&self, subject: &Term, predicate: &Term) -> Result<Vec<&Term>, GraphQueryError> {
        Ok(self
            .lookup(TriplePattern::any().subject(subject).predicate(predicate))?
            .into_iter()
            .map(|t| &t.object)
            .collect())
    }

    /// Subjects of `(?, predicate, object)`.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn subjects(&self, predicate: &Term, object: &Term) -> Result<Vec<&Term>, GraphQueryError> {
        Ok(self
            .lookup(TriplePattern::any().predicate(predicate).object(object))?
            .into_iter()
            .map(|t| &t.subject)
            .collect())
    }

    /// Textual value of the first `(subject, predicate, ?)` object.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn first_value(&self, subject: &Term, predicate: &str) -> Result<Option<String>, GraphQueryError> {
        let predicate = Term::iri(predicate);
        Ok(self
            .objects(subject, &predicate)?
            .first()
            .map(|o| o.lexical().to_string()))
    }

    /// All `rdfs:label` literals of `node`, in load order.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn labels(&self, node: &Term) -> Result<Vec<String>, GraphQueryError> {
        let label = Term::iri(vocab::RDFS_LABEL);
        Ok(self
            .objects(node, &label)?
            .into_iter()
            .filter(|o| o.is_literal())
            .map(|o| o.lexical().to_string())
            .collect())
    }

    /// First `rdfs:label` literal of `node`.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn label(&self, node: &Term) -> Result<Option<String>, GraphQueryError> {
        Ok(self.labels(node)?.into_iter().next())
    }

    /// Direct `rdf:type`s of `instance`.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn types(&self, instance: &Term) -> Result<Vec<&Term>, GraphQueryError> {
        self.objects(instance, &Term::iri(vocab::RDF_TYPE))
    }

    /// Subjects directly typed by `class` (no closure).
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn instances_of(&self, class: &Term) -> Result<Vec<&Term>, GraphQueryError> {
        self.subjects(&Term::iri(vocab::RDF_TYPE), class)
    }

    /// Classes with a direct `rdfs:subClassOf` edge to `class`.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn direct_subclasses(&self, class: &Term) -> Result<Vec<&Term>, GraphQueryError> {
        self.subjects(&Term::iri(vocab::RDFS_SUBCLASS_OF), class)
    }

    /// `class` plus every transitive subclass (`rdfs:subClassOf*`).
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn descendants(&self, class: &Term) -> Result<ClassClosure, GraphQueryError> {
        let mut closure = ClassClosure::new(class);
        let mut queue = VecDeque::from([class.clone()]);
        while let Some(current) = queue.pop_front() {
            for sub in self.direct_subclasses(&current)? {
                if closure.insert(sub) {
                    queue.push_back(sub.clone());
                }
            }
        }
        Ok(closure)
    }

    /// Returns true if `class` equals `ancestor` or reaches it through
    /// `rdfs:subClassOf` edges.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn is_descendant(&self, class: &Term, ancestor: &Term) -> Result<bool, GraphQueryError> {
        let sub_class_of = Term::iri(vocab::RDFS_SUBCLASS_OF);
        let mut visited = HashSet::from([class.clone()]);
        let mut queue = VecDeque::from([class.clone()]);
        while let Some(current) = queue.pop_front() {
            if current == *ancestor {
                return Ok(true);
            }
            for parent in self.objects(&current, &sub_class_of)? {
                if visited.insert(parent.clone()) {
                    queue.push_back(parent.clone());
                }
            }
        }
        Ok(false)
    }

    /// Restriction classes typing `instance`: every type carrying an
    /// `owl:onProperty` or `owl:someValuesFrom` edge.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphQueryError`] from the underlying lookup.
    fn restrictions(&self, instance: &Term) -> Result<Vec<Restriction<'_>>, GraphQueryError> {
        let on_property = Term::iri(vocab::OWL_ON_PROPERTY);
        let some_values_from = Term::iri(vocab::OWL_SOME_VALUES_FROM);
        let mut found = Vec::new();
        for node in self.types(instance)? {
            if node.is_literal() {
                continue;
            }
            let restriction = Restriction {
                node,
                on_property: self.objects(node, &on_property)?,
                some_values_from: self.objects(node, &some_values_from)?,
            };
            if !restriction.on_property.is_empty() || !restriction.some_values_from.is_empty() {
                found.push(restriction);
            }
        }
        Ok(found)
    }
}

impl<G: GraphAccess + ?Sized> GraphExt for G {}
