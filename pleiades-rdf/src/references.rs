//! Citation normalization.
//!
//! A citation becomes a `rdfs:seeAlso` link plus a typed CiTO relation from
//! the citing subject to a reference resource. Identifiers that look
//! dereferenceable become IRIs; everything else gets a fresh blank node.

use crate::model::Citation;
use pleiades_graph_ir::{Graph, Term};
use pleiades_vocab::{cito, rdfs};

const DEREFERENCEABLE_PREFIXES: &[&str] = &["http://", "https://", "doi", "issn", "ibsn"];

/// Trimmed identifier if it names a dereferenceable resource.
///
/// Empty and whitespace-only identifiers never qualify, whatever branch of
/// the test they would otherwise hit.
pub fn dereferenceable(identifier: Option<&str>) -> Option<&str> {
    let id = identifier?.trim();
    if id.is_empty() {
        return None;
    }
    DEREFERENCEABLE_PREFIXES
        .iter()
        .any(|prefix| id.starts_with(prefix))
        .then_some(id)
}

/// CiTO relation IRI for a citation type tag.
///
/// `seeAlso` (also the fallback for an empty tag) maps to
/// `citesAsRelated`, `seeFurther` to `citesForInformation`; any other tag
/// is used as the relation's local name.
pub fn citation_relation(kind: &str) -> String {
    match kind.trim() {
        "" | "seeAlso" => cito::CITES_AS_RELATED.to_string(),
        "seeFurther" => cito::CITES_FOR_INFORMATION.to_string(),
        other => cito::relation(other),
    }
}

/// Emit the triples for one citation and return the reference node.
pub fn emit_reference(graph: &mut Graph, subject: &Term, citation: &Citation) -> Term {
    let reference = match dereferenceable(citation.identifier.as_deref()) {
        Some(iri) => Term::iri(iri),
        None => graph.fresh_blank(),
    };

    if let Some(range) = citation.range.as_deref().filter(|r| !r.is_empty()) {
        graph.add_triple(reference.clone(), Term::iri(rdfs::LABEL), Term::string(range));
    }
    graph.add_triple(subject.clone(), Term::iri(rdfs::SEE_ALSO), reference.clone());
    graph.add_triple(
        subject.clone(),
        Term::iri(citation_relation(&citation.kind)),
        reference.clone(),
    );
    reference
}

/// Emit every citation of a record, in stored order.
pub fn emit_references(graph: &mut Graph, subject: &Term, citations: &[Citation]) {
    for citation in citations {
        emit_reference(graph, subject, citation);
    }
}
