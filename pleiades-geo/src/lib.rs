//! Geometry resolution primitives for gazetteer exports.
//!
//! This crate turns the geometry a Location record carries into values a
//! linked-data exporter can emit:
//!
//! - **Native geometries** (GeoJSON objects or WKT strings) are wrapped into
//!   `geo_types::Geometry`, from which bounds, centroids and literal
//!   renderings are computed.
//! - **Grid references** (`<base>/<map>[/<cell>[+<cell>...]]`) are parsed into
//!   (map, cell) pairs and resolved to rectangles through a [`GridLookup`].
//!
//! # Modules
//!
//! - [`geometry`]: wrapping, bounding boxes, GeoJSON/WKT rendering
//! - [`grid`]: grid reference grammar, grid lookup trait, in-memory table
//! - [`error`]: Error types

pub mod error;
pub mod geometry;
pub mod grid;

pub use error::{GeoError, Result};
pub use geometry::{centroid, parse_wkt, BBox, GeometryLiterals, NativeGeometry};
pub use grid::{GridBox, GridCell, GridLookup, GridReference, GridTable, GridTableEntry};
