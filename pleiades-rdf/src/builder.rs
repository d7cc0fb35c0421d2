//! Per-place graph builder.
//!
//! `PlaceGrapher` walks one place and its child records in a fixed order and
//! appends everything to a single graph:
//!
//! 1. place and feature typing, label and comment
//! 2. document metadata (title, description, creators, contributors)
//! 3. provenance
//! 4. place types
//! 5. labels, then one block per Name in rank order
//! 6. representative point (precise) or place-level grid block (rough)
//! 7. one block per Location in repository order
//! 8. connections to published places
//! 9. coverage note
//! 10. the place's own references
//!
//! The order only matters for byte-stable output; no step reads triples an
//! earlier one wrote. Each Location is built in a forked fragment so that a
//! geometry it cannot wrap drops that Location alone.

use crate::attribution::emit_attribution;
use crate::config::ExportConfig;
use crate::coverage::coverage_note;
use crate::error::{Diagnostic, ExportError, ExportReport, ItemError, Result};
use crate::geometry::{emit_grid, emit_native, emit_point, representative_point};
use crate::labels::emit_labels;
use crate::model::{rank, Location, LocationPrecision, Metadata, Name, Place, Rated, ReviewState};
use crate::provider::{PersonDirectory, RecordProvider, VocabularyProvider, VocabularyTerm};
use crate::references::emit_references;
use pleiades_geo::GridLookup;
use pleiades_graph_ir::{Graph, Term};
use pleiades_vocab::{
    dcterms, foaf, owl, pleiades, prefixes, prov, rdf, rdfs, skos, spatial,
};
use std::collections::BTreeSet;
use tracing::{debug, error};
use url::Url;

/// The graph of one place plus the recoverable issues met building it.
#[derive(Debug, Clone)]
pub struct PlaceExport {
    pub graph: Graph,
    pub report: ExportReport,
}

/// Builds linked-data graphs for places.
///
/// Holds no mutable state; one instance can export any number of places,
/// and instances sharing collaborators can run on separate threads.
pub struct PlaceGrapher<'a> {
    config: &'a ExportConfig,
    records: &'a dyn RecordProvider,
    vocabulary: &'a dyn VocabularyProvider,
    grids: &'a dyn GridLookup,
    people: &'a dyn PersonDirectory,
}

impl<'a> PlaceGrapher<'a> {
    pub fn new(
        config: &'a ExportConfig,
        records: &'a dyn RecordProvider,
        vocabulary: &'a dyn VocabularyProvider,
        grids: &'a dyn GridLookup,
        people: &'a dyn PersonDirectory,
    ) -> Self {
        Self {
            config,
            records,
            vocabulary,
            grids,
            people,
        }
    }

    /// Build the full graph of a place.
    pub fn place(&self, place: &Place) -> Result<PlaceExport> {
        debug!(place = %place.id, "exporting place");

        let page = self.page_url(place)?;
        let names = self
            .records
            .names(place)
            .map_err(|source| ExportError::Records {
                place: place.id.clone(),
                kind: "name",
                source,
            })?;
        let locations = self
            .records
            .locations(place)
            .map_err(|source| ExportError::Records {
                place: place.id.clone(),
                kind: "location",
                source,
            })?;

        let mut graph = Graph::with_prefixes(prefixes::PLACE_GRAPH);
        let mut report = ExportReport::default();
        let subject = Term::iri(&page);
        let feature = Term::iri(format!("{page}#this"));

        graph.add_triple(subject.clone(), Term::iri(rdf::TYPE), Term::iri(pleiades::PLACE));
        graph.add_triple(feature.clone(), Term::iri(rdf::TYPE), Term::iri(spatial::FEATURE));
        graph.add_triple(
            feature.clone(),
            Term::iri(foaf::PRIMARY_TOPIC_OF),
            subject.clone(),
        );
        graph.add_triple(
            feature.clone(),
            Term::iri(rdfs::LABEL),
            Term::string(text(&place.meta.title)),
        );
        graph.add_triple(
            feature,
            Term::iri(rdfs::COMMENT),
            Term::string(text(&place.meta.description)),
        );

        self.dcterms(&mut graph, &subject, &place.meta);
        provenance(&mut graph, &subject, &place.meta);

        for term in self.place_types(place) {
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::HAS_FEATURE_TYPE),
                Term::iri(self.config.rewrite_url(&term.url)),
            );
        }

        emit_labels(&mut graph, &subject, &names);
        for rated in rank(&names) {
            self.name(&mut graph, &page, &subject, &rated.record);
        }

        match self.records.location_precision(place) {
            LocationPrecision::Precise => {
                if let Some(point) = representative_point(&locations, &mut report) {
                    emit_point(&mut graph, &subject, point);
                }
            }
            LocationPrecision::Rough => {
                for rated in &locations {
                    if let Some(reference) = rated.record.grid_reference.as_deref() {
                        emit_grid(
                            &mut graph,
                            &subject,
                            reference,
                            &self.config.grid_base,
                            self.grids,
                            &mut report,
                        );
                    }
                }
            }
            LocationPrecision::Unlocated => {}
        }

        for rated in &locations {
            self.location(&mut graph, &mut report, &page, &subject, rated);
        }

        for id in &place.connections {
            if self.records.review_state(id) != Some(ReviewState::Published) {
                continue;
            }
            graph.add_triple(
                subject.clone(),
                Term::iri(spatial::C),
                Term::iri(format!("{}{}#this", self.config.places_base, id)),
            );
        }

        if let Some(note) = coverage_note(place) {
            graph.add_triple(subject.clone(), Term::iri(dcterms::COVERAGE), Term::string(note));
        }

        emit_references(&mut graph, &subject, &place.meta.citations);

        debug!(
            place = %place.id,
            triples = graph.len(),
            diagnostics = report.len(),
            "exported place"
        );
        Ok(PlaceExport { graph, report })
    }

    /// `owl:sameAs` link from the feature to its remote counterpart.
    ///
    /// Empty (prefixes only) when the place has no remote URL.
    pub fn link(&self, place: &Place) -> Result<Graph> {
        let mut graph = Graph::with_prefixes(prefixes::PLACE_GRAPH);
        let Some(remote) = place.remote_url.as_deref().filter(|r| !r.is_empty()) else {
            return Ok(graph);
        };

        let page = self.page_url(place)?;
        let host = host(&page).ok_or_else(|| ExportError::InvalidUrl(page.clone()))?;
        graph.add_triple(
            Term::iri(format!("{page}#this")),
            Term::iri(owl::SAME_AS),
            Term::iri(format!("http://{}/{}#this", host, remote.trim_matches('/'))),
        );
        Ok(graph)
    }

    /// SKOS concepts for the place's resolved place types.
    pub fn skos(&self, place: &Place) -> Graph {
        let mut graph = Graph::with_prefixes(prefixes::SKOS_GRAPH);
        for term in self.place_types(place) {
            let concept = Term::iri(self.config.rewrite_url(&term.url));
            graph.add_triple(concept.clone(), Term::iri(rdf::TYPE), Term::iri(skos::CONCEPT));
            graph.add_triple(
                concept.clone(),
                Term::iri(skos::PREF_LABEL),
                Term::lang_string(&term.key, "en"),
            );
            graph.add_triple(
                concept.clone(),
                Term::iri(skos::SCOPE_NOTE),
                Term::lang_string(&term.value, "en"),
            );
            if let Some(definition) = term.description.as_deref().filter(|d| !d.is_empty()) {
                graph.add_triple(
                    concept,
                    Term::iri(skos::DEFINITION),
                    Term::lang_string(definition, "en"),
                );
            }
        }
        graph
    }

    fn page_url(&self, place: &Place) -> Result<String> {
        let page = self.config.rewrite_url(&place.url);
        let page = page.trim_end_matches('/');
        if host(page).is_none() {
            return Err(ExportError::InvalidUrl(place.url.clone()));
        }
        Ok(page.to_string())
    }

    /// Distinct non-empty codes, sorted, that the vocabulary resolves.
    fn place_types(&self, place: &Place) -> Vec<VocabularyTerm> {
        place
            .place_types
            .iter()
            .map(String::as_str)
            .filter(|code| !code.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|code| self.vocabulary.place_type(code))
            .collect()
    }

    fn dcterms(&self, graph: &mut Graph, subject: &Term, meta: &Metadata) {
        graph.add_triple(
            subject.clone(),
            Term::iri(dcterms::TITLE),
            Term::string(text(&meta.title)),
        );
        graph.add_triple(
            subject.clone(),
            Term::iri(dcterms::DESCRIPTION),
            Term::string(text(&meta.description)),
        );
        emit_attribution(graph, subject, meta, &self.config.attribution, self.people);
    }

    fn temporal(&self, graph: &mut Graph, subject: &Term, meta: &Metadata) {
        for attestation in &meta.attestations {
            if attestation.time_period.is_empty() {
                continue;
            }
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::DURING),
                Term::iri(format!(
                    "{}{}",
                    self.config.time_periods_base, attestation.time_period
                )),
            );
        }
        if let Some(span) = meta.time_span {
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::START_DATE),
                Term::integer(span.start),
            );
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::END_DATE),
                Term::integer(span.end),
            );
        }
    }

    fn name(&self, graph: &mut Graph, page: &str, place: &Term, name: &Name) {
        let subject = Term::iri(format!("{page}/{}", name.id));
        graph.add_triple(place.clone(), Term::iri(pleiades::HAS_NAME), subject.clone());
        graph.add_triple(subject.clone(), Term::iri(rdf::TYPE), Term::iri(pleiades::NAME));
        self.dcterms(graph, &subject, &name.meta);
        self.temporal(graph, &subject, &name.meta);
        provenance(graph, &subject, &name.meta);
        emit_references(graph, &subject, &name.meta.citations);

        if let Some(attested) = name.attested.as_deref().filter(|a| !a.is_empty()) {
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::NAME_ATTESTED),
                Term::text(attested, name.language()),
            );
        }
        for romanized in name.romanizations() {
            graph.add_triple(
                subject.clone(),
                Term::iri(pleiades::NAME_ROMANIZED),
                Term::string(romanized),
            );
        }
    }

    fn location(
        &self,
        graph: &mut Graph,
        report: &mut ExportReport,
        page: &str,
        place: &Term,
        rated: &Rated<Location>,
    ) {
        let location = &rated.record;
        let subject = Term::iri(format!("{page}/{}", location.id));
        graph.add_triple(place.clone(), Term::iri(pleiades::HAS_LOCATION), subject.clone());

        let mut fragment = graph.fork();
        match self.location_fragment(&mut fragment, report, &subject, location) {
            Ok(()) => graph.merge(fragment),
            Err(e) => {
                graph.skip_blanks_of(&fragment);
                error!(location = %location.id, error = %e, "discarding location");
                report.push(Diagnostic::LocationAborted {
                    location: location.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn location_fragment(
        &self,
        graph: &mut Graph,
        report: &mut ExportReport,
        subject: &Term,
        location: &Location,
    ) -> std::result::Result<(), ItemError> {
        graph.add_triple(subject.clone(), Term::iri(rdf::TYPE), Term::iri(pleiades::LOCATION));
        self.dcterms(graph, subject, &location.meta);
        self.temporal(graph, subject, &location.meta);
        provenance(graph, subject, &location.meta);
        emit_references(graph, subject, &location.meta.citations);

        let gridded = match location.grid_reference.as_deref() {
            Some(reference) => emit_grid(
                graph,
                subject,
                reference,
                &self.config.grid_base,
                self.grids,
                report,
            ),
            None => false,
        };
        if !gridded {
            emit_native(graph, subject, location)?;
        }
        Ok(())
    }
}

fn provenance(graph: &mut Graph, subject: &Term, meta: &Metadata) {
    let node = graph.fresh_blank();
    graph.add_triple(subject.clone(), Term::iri(prov::WAS_DERIVED_FROM), node.clone());
    graph.add_triple(
        node,
        Term::iri(rdfs::LABEL),
        Term::string(text(&meta.initial_provenance)),
    );
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Host and explicit port of an absolute URL, without any userinfo.
fn host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str().filter(|host| !host.is_empty())?;
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
