//! Typed gazetteer records.
//!
//! These are the shapes the record provider hands to the exporter. They are
//! validated when deserialized at the provider boundary; the graph builder
//! never inspects loosely typed data.

use pleiades_geo::NativeGeometry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Descriptive metadata shared by places, names and locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub creators: Vec<String>,
    pub contributors: Vec<String>,
    pub initial_provenance: Option<String>,
    pub attestations: Vec<Attestation>,
    pub time_span: Option<TimeSpan>,
    pub citations: Vec<Citation>,
}

/// A time-period attestation, e.g. `roman` or `late-antique`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    pub time_period: String,
}

/// Overall start/end years (negative for BCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: i64,
    pub end: i64,
}

/// A bibliographic or web reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    pub identifier: Option<String>,
    /// Citation type tag (`seeAlso`, `seeFurther`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub range: Option<String>,
}

/// Place record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub id: String,
    /// Absolute URL of the place page, before virtual-host rewriting.
    pub url: String,
    pub place_types: Vec<String>,
    pub modern_location: Option<String>,
    pub remote_url: Option<String>,
    /// Ids of connected places, outgoing first then incoming.
    pub connections: Vec<String>,
    #[serde(flatten)]
    pub meta: Metadata,
}

/// A candidate toponym.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    pub id: String,
    pub attested: Option<String>,
    /// Comma-separated romanizations.
    pub transliterated: String,
    pub language: Option<String>,
    #[serde(flatten)]
    pub meta: Metadata,
}

impl Name {
    /// Non-empty romanized forms, trimmed, in stored order.
    pub fn romanizations(&self) -> impl Iterator<Item = &str> {
        self.transliterated
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Attested wordform if present, else the first romanization.
    pub fn label(&self) -> &str {
        match self.attested.as_deref() {
            Some(attested) if !attested.is_empty() => attested,
            _ => self.romanizations().next().unwrap_or(""),
        }
    }

    /// Language tag, if one is set.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

/// A geometric instantiation of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub geometry: Option<NativeGeometry>,
    /// Grid reference or other location identifier.
    pub grid_reference: Option<String>,
    #[serde(flatten)]
    pub meta: Metadata,
}

/// Externally computed precision of a place's locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPrecision {
    Precise,
    Rough,
    Unlocated,
}

/// Workflow review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    Published,
    Pending,
    Drafting,
    Private,
}

/// A record paired with its average rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rated<T> {
    pub rating: Option<f64>,
    pub record: T,
}

impl<T> Rated<T> {
    pub fn new(rating: Option<f64>, record: T) -> Self {
        Self { rating, record }
    }

    /// The rating, with NaN treated as absent.
    pub fn score(&self) -> Option<f64> {
        self.rating.filter(|r| !r.is_nan())
    }

    /// True when a rating is present and strictly above zero.
    pub fn is_endorsed(&self) -> bool {
        self.score().is_some_and(|r| r > 0.0)
    }
}

/// Order by descending rating, unrated last, ties in input order.
pub fn rank<T>(records: &[Rated<T>]) -> Vec<&Rated<T>> {
    let mut ranked: Vec<&Rated<T>> = records.iter().collect();
    ranked.sort_by(|a, b| match (a.score(), b.score()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked
}
