//! Error types for geometry resolution.

use thiserror::Error;

/// Geometry and grid errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// WKT parsing error.
    #[error("WKT parse error: {0}")]
    WktParse(String),

    /// A native geometry that cannot be read as a standard shape.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Grid reference with more than two path segments after the base.
    #[error("Invalid location identifier {reference}: {segments} path segments")]
    MalformedGridReference { reference: String, segments: usize },

    /// Grid lookup could not resolve a map number or cell.
    #[error("Unknown grid cell: map {map}, cell {}", cell.as_deref().unwrap_or("(whole map)"))]
    UnknownGridCell { map: String, cell: Option<String> },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeoError>;
