//! Native geometry wrapping and literal rendering.
//!
//! This module provides:
//! - Wrapping of stored geometries (GeoJSON objects or WKT strings) into
//!   `geo_types::Geometry`
//! - Bounds and centroid computation
//! - GeoJSON and WKT literal rendering for `osgeo:asGeoJSON` / `osgeo:asWKT`
//!
//! # Design
//!
//! Location records keep their geometry in whatever form the repository
//! stored it. Wrapping is the single point where that form is checked; a
//! failure there is an `InvalidGeometry`, which callers treat as fatal for
//! the one record that carried it.

use crate::error::{GeoError, Result};
use geo::{BoundingRect, Centroid};
use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wkt::ToWkt;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Compute from a geo-types Geometry.
    pub fn from_geometry(geom: &Geometry<f64>) -> Option<Self> {
        let rect = geom.bounding_rect()?;
        Some(Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        })
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            min_lat: self.min_lat.min(other.min_lat),
            max_lat: self.max_lat.max(other.max_lat),
            min_lng: self.min_lng.min(other.min_lng),
            max_lng: self.max_lng.max(other.max_lng),
        }
    }

    /// Midpoint as (lat, lng).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Geometry as stored on a Location record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "value", rename_all = "lowercase")]
pub enum NativeGeometry {
    /// A GeoJSON geometry object (`{"type": ..., "coordinates": ...}`).
    GeoJson(Value),
    /// A WKT string.
    Wkt(String),
}

impl NativeGeometry {
    /// Interpret as a standard shape.
    pub fn wrap(&self) -> Result<Geometry<f64>> {
        match self {
            NativeGeometry::GeoJson(value) => from_geojson(value),
            NativeGeometry::Wkt(text) => parse_wkt(text),
        }
    }
}

/// A shape together with its two literal renderings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryLiterals {
    pub geojson: String,
    pub wkt: String,
}

impl GeometryLiterals {
    /// Render a geometry as GeoJSON and WKT text.
    pub fn of(geom: &Geometry<f64>) -> Self {
        Self {
            geojson: to_geojson(geom).to_string(),
            wkt: geom.wkt_string(),
        }
    }
}

/// Centroid as (lat, lng).
pub fn centroid(geom: &Geometry<f64>) -> Option<(f64, f64)> {
    geom.centroid().map(|c| (c.y(), c.x()))
}

/// Rectangle polygon from (west, south, east, north).
///
/// The ring runs counter-clockwise starting at the south-east corner.
pub fn rect_polygon(west: f64, south: f64, east: f64, north: f64) -> Geometry<f64> {
    let ring = LineString::from(vec![
        (east, south),
        (east, north),
        (west, north),
        (west, south),
        (east, south),
    ]);
    Geometry::Polygon(Polygon::new(ring, vec![]))
}

/// Parse WKT string to geo-types Geometry.
pub fn parse_wkt(wkt: &str) -> Result<Geometry<f64>> {
    use std::str::FromStr;
    wkt::Wkt::from_str(wkt)
        .map_err(|e| GeoError::WktParse(format!("{:?}", e)))
        .and_then(|w| {
            w.try_into()
                .map_err(|e: wkt::conversion::Error| GeoError::WktParse(format!("{:?}", e)))
        })
}

// ============================================================================
// GeoJSON
// ============================================================================

fn invalid(msg: impl Into<String>) -> GeoError {
    GeoError::InvalidGeometry(msg.into())
}

fn coord(value: &Value) -> Result<Coord<f64>> {
    let pair = value
        .as_array()
        .filter(|a| a.len() >= 2)
        .ok_or_else(|| invalid(format!("expected a position, got {}", value)))?;
    let x = pair[0]
        .as_f64()
        .ok_or_else(|| invalid(format!("non-numeric x in {}", value)))?;
    let y = pair[1]
        .as_f64()
        .ok_or_else(|| invalid(format!("non-numeric y in {}", value)))?;
    Ok(Coord { x, y })
}

fn array(value: &Value) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| invalid(format!("expected an array, got {}", value)))
}

fn line(value: &Value) -> Result<LineString<f64>> {
    let coords = array(value)?
        .iter()
        .map(coord)
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString::new(coords))
}

fn polygon(value: &Value) -> Result<Polygon<f64>> {
    let mut rings = array(value)?.iter().map(line);
    let exterior = rings
        .next()
        .ok_or_else(|| invalid("polygon without exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Read a GeoJSON geometry object.
pub fn from_geojson(value: &Value) -> Result<Geometry<f64>> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing geometry type"))?;

    if kind == "GeometryCollection" {
        let members = value
            .get("geometries")
            .ok_or_else(|| invalid("GeometryCollection without geometries"))?;
        let geoms = array(members)?
            .iter()
            .map(from_geojson)
            .collect::<Result<Vec<_>>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection::from(geoms)));
    }

    let coords = value
        .get("coordinates")
        .ok_or_else(|| invalid(format!("{} without coordinates", kind)))?;

    let geom = match kind {
        "Point" => Geometry::Point(Point::from(coord(coords)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint::new(
            array(coords)?
                .iter()
                .map(|c| coord(c).map(Point::from))
                .collect::<Result<Vec<_>>>()?,
        )),
        "LineString" => Geometry::LineString(line(coords)?),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString::new(
            array(coords)?.iter().map(line).collect::<Result<Vec<_>>>()?,
        )),
        "Polygon" => Geometry::Polygon(polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::new(
            array(coords)?
                .iter()
                .map(polygon)
                .collect::<Result<Vec<_>>>()?,
        )),
        other => return Err(invalid(format!("unsupported geometry type {}", other))),
    };
    Ok(geom)
}

fn position(c: &Coord<f64>) -> Value {
    json!([c.x, c.y])
}

fn line_positions(ls: &LineString<f64>) -> Value {
    Value::Array(ls.coords().map(position).collect())
}

fn polygon_positions(p: &Polygon<f64>) -> Value {
    let mut rings = vec![line_positions(p.exterior())];
    rings.extend(p.interiors().iter().map(line_positions));
    Value::Array(rings)
}

/// Write a geometry as a GeoJSON geometry object.
pub fn to_geojson(geom: &Geometry<f64>) -> Value {
    match geom {
        Geometry::Point(p) => json!({"type": "Point", "coordinates": position(&p.0)}),
        Geometry::MultiPoint(mp) => json!({
            "type": "MultiPoint",
            "coordinates": mp.iter().map(|p| position(&p.0)).collect::<Vec<_>>()
        }),
        Geometry::Line(l) => json!({
            "type": "LineString",
            "coordinates": [position(&l.start), position(&l.end)]
        }),
        Geometry::LineString(ls) => json!({"type": "LineString", "coordinates": line_positions(ls)}),
        Geometry::MultiLineString(mls) => json!({
            "type": "MultiLineString",
            "coordinates": mls.iter().map(line_positions).collect::<Vec<_>>()
        }),
        Geometry::Polygon(p) => json!({"type": "Polygon", "coordinates": polygon_positions(p)}),
        Geometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": mp.iter().map(polygon_positions).collect::<Vec<_>>()
        }),
        Geometry::Rect(r) => to_geojson(&Geometry::Polygon(r.to_polygon())),
        Geometry::Triangle(t) => to_geojson(&Geometry::Polygon(t.to_polygon())),
        Geometry::GeometryCollection(gc) => json!({
            "type": "GeometryCollection",
            "geometries": gc.iter().map(to_geojson).collect::<Vec<_>>()
        }),
    }
}
