//! Export error types and the recoverable-diagnostics report.
//!
//! Failures come in three tiers:
//!
//! - [`Diagnostic`]: a geometry contribution was skipped; the export goes on.
//! - [`ItemError`]: one Location's fragment is abandoned; the rest of the
//!   place is still exported.
//! - [`ExportError`]: the place cannot be exported at all.

use pleiades_geo::GeoError;
use thiserror::Error;

/// Failure reported by a record provider.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Errors that abort a whole place export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Child records could not be read.
    #[error("Failed to read {kind} records for place {place}: {source}")]
    Records {
        place: String,
        kind: &'static str,
        #[source]
        source: ProviderError,
    },

    /// A place URL without a host part.
    #[error("Place URL has no host: {0}")]
    InvalidUrl(String),
}

/// Errors that abort a single child record.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Native geometry could not be interpreted as a standard shape.
    #[error("Couldn't wrap and graph location {location}: {source}")]
    GeometryWrap {
        location: String,
        #[source]
        source: GeoError,
    },
}

/// A recoverable issue, recorded in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Grid reference with too many path segments; its geometry was skipped.
    MalformedGridReference { subject: String, reference: String },
    /// Grid lookup failed for one cell; that cell was skipped.
    UnknownGridCell {
        subject: String,
        map: String,
        cell: Option<String>,
    },
    /// Geometry left out of the representative-point pass.
    UnusableGeometry { location: String, reason: String },
    /// A location fragment was discarded after an item error.
    LocationAborted { location: String, reason: String },
}

/// Recoverable diagnostics gathered during one export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ExportReport {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
