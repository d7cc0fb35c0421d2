//! External collaborator seams.
//!
//! The exporter never reaches into a content repository, vocabulary store or
//! membership tool directly. Everything it reads beyond the `Place` record
//! itself comes through these traits, which callers implement over their own
//! storage (and tests implement over in-memory maps).
//!
//! All calls must be safe for concurrent reads; the traits require
//! `Send + Sync` so one set of collaborators can back exporters running on
//! several threads.

use crate::error::ProviderError;
use crate::model::{Location, LocationPrecision, Name, Place, Rated, ReviewState};

/// Child records and workflow state.
pub trait RecordProvider: Send + Sync {
    /// Published Names of `place`, in repository order, with average ratings.
    fn names(&self, place: &Place) -> Result<Vec<Rated<Name>>, ProviderError>;

    /// Published Locations of `place`, in repository order, with average
    /// ratings.
    fn locations(&self, place: &Place) -> Result<Vec<Rated<Location>>, ProviderError>;

    /// Precision of the place's locations, computed upstream.
    fn location_precision(&self, place: &Place) -> LocationPrecision;

    /// Review state of a place by id, if the place exists.
    fn review_state(&self, place_id: &str) -> Option<ReviewState>;
}

/// A resolved controlled-vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyTerm {
    /// Absolute URL of the term, before virtual-host rewriting.
    pub url: String,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

/// Place-type vocabulary.
pub trait VocabularyProvider: Send + Sync {
    /// Resolve a place-type code; `None` when the code is unknown.
    fn place_type(&self, code: &str) -> Option<VocabularyTerm>;
}

/// A site member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub profile_url: Option<String>,
}

/// Membership lookup.
pub trait PersonDirectory: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Member>;
}
