//! RDF graph - an ordered collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` so insertion order is the output order.
//! Exports rely on this: the same inputs appended in the same order yield
//! byte-identical N-Triples.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples plus namespace bindings
///
/// # Design Decisions
///
/// - **Vec storage**: preserves insertion order and duplicates.
/// - **Deterministic blank nodes**: `fresh_blank()` hands out `b1`, `b2`, ...
///   from a per-graph counter, so there is no global or random state.
///
/// # Example
///
/// ```
/// use pleiades_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// let node = graph.fresh_blank();
///
/// graph.add_triple(
///     Term::iri("http://pleiades.stoa.org/places/423025"),
///     Term::iri("http://www.w3.org/TR/prov-o/#wasDerivedFrom"),
///     node.clone(),
/// );
/// graph.add_triple(
///     node,
///     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
///     Term::string("Barrington Atlas: BAtlas 43 B2 Roma"),
/// );
///
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Prefix mappings (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
    /// Last allocated blank node number
    blank_counter: u32,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given prefix bindings
    pub fn with_prefixes<'a>(bindings: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (prefix, ns) in bindings {
            graph.add_prefix(*prefix, *ns);
        }
        graph
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Allocate a fresh blank node
    pub fn fresh_blank(&mut self) -> Term {
        self.blank_counter += 1;
        Term::blank(format!("b{}", self.blank_counter))
    }

    /// Start an empty fragment that continues this graph's blank numbering
    ///
    /// Fragments are built independently and either folded back with
    /// `merge()` or dropped.
    pub fn fork(&self) -> Graph {
        Graph {
            triples: Vec::new(),
            prefixes: BTreeMap::new(),
            blank_counter: self.blank_counter,
        }
    }

    /// Append a fragment's triples and adopt its blank numbering
    pub fn merge(&mut self, fragment: Graph) {
        self.triples.extend(fragment.triples);
        self.blank_counter = self.blank_counter.max(fragment.blank_counter);
    }

    /// Keep blank numbering monotonic after dropping a fragment
    pub fn skip_blanks_of(&mut self, fragment: &Graph) {
        self.blank_counter = self.blank_counter.max(fragment.blank_counter);
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Objects of every `(s, p, ?)` triple, in insertion order
    pub fn objects<'a>(&'a self, s: &'a Term, p: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.s == s && t.p.as_iri() == Some(p))
            .map(|t| &t.o)
    }

    /// All triples with predicate `p`, in insertion order
    pub fn with_predicate<'a>(&'a self, p: &'a str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| t.p.as_iri() == Some(p))
    }

    /// Render as N-Triples in insertion order, one statement per line
    pub fn to_ntriples(&self) -> String {
        let mut out = String::with_capacity(self.triples.len() * 96);
        for triple in &self.triples {
            out.push_str(&triple.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "http://xmlns.com/foaf/0.1/name";

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        graph.add_triple(
            Term::iri("http://example.org/bob"),
            Term::iri(NAME),
            Term::string("Bob"),
        );
        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri(NAME),
            Term::string("Alice"),
        );
        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/age"),
            Term::integer(30),
        );

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let graph = make_test_graph();
        let first = graph.iter().next().unwrap();
        assert_eq!(first.s.as_iri(), Some("http://example.org/bob"));
    }

    #[test]
    fn test_fresh_blanks_are_sequential() {
        let mut graph = Graph::new();
        assert_eq!(graph.fresh_blank(), Term::blank("b1"));
        assert_eq!(graph.fresh_blank(), Term::blank("b2"));
    }

    #[test]
    fn test_fork_and_merge() {
        let mut graph = Graph::new();
        graph.fresh_blank();

        let mut fragment = graph.fork();
        let node = fragment.fresh_blank();
        assert_eq!(node, Term::blank("b2"));
        fragment.add_triple(node, Term::iri(NAME), Term::string("x"));

        graph.merge(fragment);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.fresh_blank(), Term::blank("b3"));
    }

    #[test]
    fn test_dropped_fragment_keeps_numbering() {
        let mut graph = Graph::new();
        let mut fragment = graph.fork();
        fragment.fresh_blank();
        graph.skip_blanks_of(&fragment);
        drop(fragment);
        assert_eq!(graph.fresh_blank(), Term::blank("b2"));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_objects_lookup() {
        let graph = make_test_graph();
        let alice = Term::iri("http://example.org/alice");
        let names: Vec<_> = graph.objects(&alice, NAME).collect();
        assert_eq!(names, vec![&Term::string("Alice")]);
        assert_eq!(graph.with_predicate(NAME).count(), 2);
    }

    #[test]
    fn test_graph_prefixes() {
        let graph = Graph::with_prefixes(&[
            ("foaf", "http://xmlns.com/foaf/0.1/"),
            ("ex", "http://example.org/"),
        ]);
        assert_eq!(graph.prefixes.len(), 2);
        assert_eq!(
            graph.prefixes.get("foaf"),
            Some(&"http://xmlns.com/foaf/0.1/".to_string())
        );
    }

    #[test]
    fn test_ntriples() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::double(1.5),
        );
        assert_eq!(
            graph.to_ntriples(),
            "<http://example.org/s> <http://example.org/p> \"1.5\"^^<http://www.w3.org/2001/XMLSchema#double> .\n"
        );
    }
}
