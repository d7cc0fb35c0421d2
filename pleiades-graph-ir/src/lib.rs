//! Format-agnostic RDF graph intermediate representation
//!
//! This crate provides the term, triple and graph types that the gazetteer
//! exporter appends to. Serialization to Turtle, RDF/XML or JSON-LD is left
//! to downstream tooling; `Graph::to_ntriples()` exists for stable comparison.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Prefix
//!    bindings travel with the graph for formatters to use.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype, never
//!    optional. Plain strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`.
//!
//! 3. **Insertion order** - The `Graph` keeps triples in the order they were
//!    added, so a deterministic producer yields deterministic output.
//!
//! # Example
//!
//! ```
//! use pleiades_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://pleiades.stoa.org/places/423025"),
//!     Term::iri("http://www.w3.org/2004/02/skos/core#prefLabel"),
//!     Term::lang_string("Roma", "la"),
//! );
//!
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{BlankId, LiteralValue, Term};
pub use triple::Triple;
