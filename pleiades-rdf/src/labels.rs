//! Preferred and alternate label selection.

use crate::model::{rank, Name, Rated};
use pleiades_graph_ir::{Graph, Term};
use pleiades_vocab::skos;

/// Label role of one Name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Preferred,
    Alternate,
}

impl LabelRole {
    pub fn predicate(self) -> &'static str {
        match self {
            LabelRole::Preferred => skos::PREF_LABEL,
            LabelRole::Alternate => skos::ALT_LABEL,
        }
    }
}

/// Pair every Name with its label role, in rank order.
///
/// Only the top-ranked Name can be preferred, and only when it carries a
/// rating above zero. A lone unrated Name therefore yields an alternate
/// label and no preferred one.
pub fn select_labels(names: &[Rated<Name>]) -> Vec<(LabelRole, &Name)> {
    rank(names)
        .into_iter()
        .enumerate()
        .map(|(i, rated)| {
            let role = if i == 0 && rated.is_endorsed() {
                LabelRole::Preferred
            } else {
                LabelRole::Alternate
            };
            (role, &rated.record)
        })
        .collect()
}

/// Emit `skos:prefLabel` / `skos:altLabel` on `subject` for every Name.
pub fn emit_labels(graph: &mut Graph, subject: &Term, names: &[Rated<Name>]) {
    for (role, name) in select_labels(names) {
        graph.add_triple(
            subject.clone(),
            Term::iri(role.predicate()),
            Term::text(name.label(), name.language()),
        );
    }
}
