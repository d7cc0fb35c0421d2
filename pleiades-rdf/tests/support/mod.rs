//! Shared test harness for pleiades-rdf integration tests.
//!
//! In-memory collaborators and a small Roma fixture.

// Helpers are shared by several test crates; not every crate uses all of them.
#![allow(dead_code)]

pub mod event_capture;

use pleiades_geo::{GridBox, GridTable, NativeGeometry};
use pleiades_rdf::{
    Attestation, Citation, ExportConfig, Location, LocationPrecision, Member, Metadata, Name,
    PersonDirectory, Place, PlaceGrapher, ProviderError, Rated, RecordProvider, ReviewState,
    TimeSpan, VocabularyProvider, VocabularyTerm,
};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

pub const PLACE_URL: &str = "http://pleiades.stoa.org/places/423025";
pub const GRID_BASE: &str = "http://atlantides.org/capgrids/";

// =============================================================================
// Collaborator fakes
// =============================================================================

/// Child records of a single place.
#[derive(Debug, Clone)]
pub struct MemoryRecords {
    pub names: Vec<Rated<Name>>,
    pub locations: Vec<Rated<Location>>,
    pub precision: LocationPrecision,
    pub review_states: HashMap<String, ReviewState>,
    pub fail_locations: bool,
}

impl Default for MemoryRecords {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            locations: Vec::new(),
            precision: LocationPrecision::Precise,
            review_states: HashMap::new(),
            fail_locations: false,
        }
    }
}

impl RecordProvider for MemoryRecords {
    fn names(&self, _place: &Place) -> Result<Vec<Rated<Name>>, ProviderError> {
        Ok(self.names.clone())
    }

    fn locations(&self, place: &Place) -> Result<Vec<Rated<Location>>, ProviderError> {
        if self.fail_locations {
            return Err(ProviderError(format!("catalog unavailable for {}", place.id)));
        }
        Ok(self.locations.clone())
    }

    fn location_precision(&self, _place: &Place) -> LocationPrecision {
        self.precision
    }

    fn review_state(&self, place_id: &str) -> Option<ReviewState> {
        self.review_states.get(place_id).cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryVocabulary(pub HashMap<String, VocabularyTerm>);

impl MemoryVocabulary {
    /// Place types `settlement` and `urban`, served under a `/plone` root.
    pub fn place_types() -> Self {
        let mut terms = HashMap::new();
        terms.insert(
            "settlement".to_string(),
            VocabularyTerm {
                url: "http://pleiades.stoa.org/plone/vocabularies/place-types/settlement"
                    .to_string(),
                key: "settlement".to_string(),
                value: "settlement".to_string(),
                description: Some("A populated place.".to_string()),
            },
        );
        terms.insert(
            "urban".to_string(),
            VocabularyTerm {
                url: "http://pleiades.stoa.org/plone/vocabularies/place-types/urban".to_string(),
                key: "urban".to_string(),
                value: "urban area".to_string(),
                description: None,
            },
        );
        Self(terms)
    }
}

impl VocabularyProvider for MemoryVocabulary {
    fn place_type(&self, code: &str) -> Option<VocabularyTerm> {
        self.0.get(code).cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory(pub HashMap<String, Member>);

impl MemoryDirectory {
    /// Members `sgillies` and `thomase`, both with profile pages.
    pub fn editors() -> Self {
        let members = ["sgillies", "thomase"]
            .into_iter()
            .map(|id| {
                (
                    id.to_string(),
                    Member {
                        id: id.to_string(),
                        display_name: id.to_uppercase(),
                        profile_url: Some(author(id)),
                    },
                )
            })
            .collect();
        Self(members)
    }
}

impl PersonDirectory for MemoryDirectory {
    fn lookup(&self, id: &str) -> Option<Member> {
        self.0.get(id).cloned()
    }
}

pub fn author(id: &str) -> String {
    format!("http://pleiades.stoa.org/author/{id}")
}

/// Grid 42 with cells A and B on the unit square, plus the whole map.
pub fn grid_table() -> GridTable {
    let mut table = GridTable::new();
    table.insert("42", Some("A"), GridBox::new(0.0, 0.0, 1.0, 1.0));
    table.insert("42", Some("B"), GridBox::new(0.0, 0.0, 1.0, 1.0));
    table.insert("42", None, GridBox::new(-1.0, -1.0, 2.0, 2.0));
    table
}

// =============================================================================
// Harness
// =============================================================================

pub struct Harness {
    pub config: ExportConfig,
    pub records: MemoryRecords,
    pub vocabulary: MemoryVocabulary,
    pub grids: GridTable,
    pub people: MemoryDirectory,
}

impl Harness {
    pub fn new(records: MemoryRecords) -> Self {
        Self {
            config: ExportConfig::default(),
            records,
            vocabulary: MemoryVocabulary::place_types(),
            grids: grid_table(),
            people: MemoryDirectory::editors(),
        }
    }

    pub fn grapher(&self) -> PlaceGrapher<'_> {
        PlaceGrapher::new(
            &self.config,
            &self.records,
            &self.vocabulary,
            &self.grids,
            &self.people,
        )
    }
}

// =============================================================================
// Record builders
// =============================================================================

pub fn place() -> Place {
    Place {
        id: "423025".to_string(),
        url: PLACE_URL.to_string(),
        place_types: vec!["settlement".to_string()],
        meta: Metadata {
            title: Some("Roma".to_string()),
            description: Some("The capital of the Roman Empire.".to_string()),
            creators: vec!["thomase".to_string()],
            initial_provenance: Some("Barrington Atlas: BAtlas 43 B2 Roma".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn name(id: &str, rating: Option<f64>, transliterated: &str) -> Rated<Name> {
    Rated::new(
        rating,
        Name {
            id: id.to_string(),
            transliterated: transliterated.to_string(),
            ..Default::default()
        },
    )
}

pub fn geojson_location(id: &str, rating: Option<f64>, geometry: JsonValue) -> Rated<Location> {
    Rated::new(
        rating,
        Location {
            id: id.to_string(),
            geometry: Some(NativeGeometry::GeoJson(geometry)),
            ..Default::default()
        },
    )
}

pub fn wkt_location(id: &str, rating: Option<f64>, wkt: &str) -> Rated<Location> {
    Rated::new(
        rating,
        Location {
            id: id.to_string(),
            geometry: Some(NativeGeometry::Wkt(wkt.to_string())),
            ..Default::default()
        },
    )
}

pub fn grid_location(id: &str, rating: Option<f64>, reference: &str) -> Rated<Location> {
    Rated::new(
        rating,
        Location {
            id: id.to_string(),
            grid_reference: Some(reference.to_string()),
            ..Default::default()
        },
    )
}

pub fn attestation(period: &str) -> Attestation {
    Attestation {
        time_period: period.to_string(),
    }
}

pub fn span(start: i64, end: i64) -> Option<TimeSpan> {
    Some(TimeSpan { start, end })
}

pub fn citation(identifier: Option<&str>, kind: &str, range: Option<&str>) -> Citation {
    Citation {
        identifier: identifier.map(str::to_string),
        kind: kind.to_string(),
        range: range.map(str::to_string),
    }
}
