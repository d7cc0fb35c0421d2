//! Geometry resolution for places and locations.
//!
//! Two paths produce geometry triples:
//!
//! - the aggregate pass over a place's rated locations, which yields one
//!   representative point (`geo:lat` / `geo:long`);
//! - the grid block, which resolves an atlas grid reference to one or more
//!   cell rectangles and links the subject to each cell's extent.
//!
//! Locations carrying native geometry and no grid reference additionally get
//! their own `osgeo:asGeoJSON` / `osgeo:asWKT` literals.

use crate::error::{Diagnostic, ExportReport, ItemError};
use crate::model::{rank, Location, Rated};
use pleiades_geo::{centroid, BBox, GeoError, GeometryLiterals, GridLookup, GridReference};
use pleiades_graph_ir::{Graph, Term};
use pleiades_vocab::{geo, osgeo, osspatial, rdf};
use tracing::{error, warn};

/// Representative point of a place as (lat, lng).
///
/// Scans locations in rank order. The centroid of the first endorsed
/// location with usable geometry wins; otherwise the midpoint of the union
/// of all usable bounds; otherwise `None`. Geometry that fails to wrap is
/// left out and reported.
pub fn representative_point(
    locations: &[Rated<Location>],
    report: &mut ExportReport,
) -> Option<(f64, f64)> {
    let mut bounds: Option<BBox> = None;
    let mut point = None;

    for rated in rank(locations) {
        let location = &rated.record;
        let Some(native) = location.geometry.as_ref() else {
            continue;
        };
        let shape = match native.wrap() {
            Ok(shape) => shape,
            Err(e) => {
                warn!(location = %location.id, error = %e, "skipping unusable geometry");
                report.push(Diagnostic::UnusableGeometry {
                    location: location.id.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let Some(b) = BBox::from_geometry(&shape) else {
            continue;
        };
        bounds = Some(match bounds {
            Some(acc) => acc.union(&b),
            None => b,
        });
        if point.is_none() && rated.is_endorsed() {
            point = centroid(&shape);
        }
    }

    point.or_else(|| bounds.map(|b| b.center()))
}

/// Emit `geo:lat` and `geo:long` doubles on `subject`.
pub fn emit_point(graph: &mut Graph, subject: &Term, (lat, lng): (f64, f64)) {
    graph.add_triple(subject.clone(), Term::iri(geo::LAT), Term::double(lat));
    graph.add_triple(subject.clone(), Term::iri(geo::LONG), Term::double(lng));
}

/// Run the grid block for one reference.
///
/// Returns `false` when `reference` is not under `grid_base` and nothing was
/// done. A malformed reference is logged and reported and counts as
/// handled. Each resolvable cell yields, in order: `subject osspatial:within
/// cell`, `extent rdf:type osgeo:AbstractGeometry`, `cell osgeo:extent
/// extent`, and the extent's GeoJSON and WKT literals. Cells the lookup
/// cannot resolve are skipped.
pub fn emit_grid(
    graph: &mut Graph,
    subject: &Term,
    reference: &str,
    grid_base: &str,
    lookup: &dyn GridLookup,
    report: &mut ExportReport,
) -> bool {
    let parsed = match GridReference::parse(reference, grid_base) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => return false,
        Err(e) => {
            error!(reference, error = %e, "invalid location identifier");
            report.push(Diagnostic::MalformedGridReference {
                subject: subject_label(subject),
                reference: reference.to_string(),
            });
            return true;
        }
    };

    for cell in &parsed.cells {
        let bounds = match lookup.bounds(&cell.map, cell.cell.as_deref()) {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!(reference, error = %e, "skipping unresolved grid cell");
                let (map, cell) = match e {
                    GeoError::UnknownGridCell { map, cell } => (map, cell),
                    _ => (cell.map.clone(), cell.cell.clone()),
                };
                report.push(Diagnostic::UnknownGridCell {
                    subject: subject_label(subject),
                    map,
                    cell,
                });
                continue;
            }
        };
        let literals = bounds.literals();
        let cell_node = Term::iri(cell.uri(grid_base));
        let extent = Term::iri(cell.extent_uri(grid_base));

        graph.add_triple(subject.clone(), Term::iri(osspatial::WITHIN), cell_node.clone());
        graph.add_triple(
            extent.clone(),
            Term::iri(rdf::TYPE),
            Term::iri(osgeo::ABSTRACT_GEOMETRY),
        );
        graph.add_triple(cell_node, Term::iri(osgeo::EXTENT), extent.clone());
        emit_literals(graph, &extent, &literals);
    }
    true
}

/// Emit a location's own GeoJSON and WKT literals.
///
/// A geometry that cannot be wrapped aborts the location.
pub fn emit_native(graph: &mut Graph, subject: &Term, location: &Location) -> Result<(), ItemError> {
    let Some(native) = location.geometry.as_ref() else {
        return Ok(());
    };
    let shape = native.wrap().map_err(|source| {
        warn!(location = %location.id, error = %source, "couldn't wrap location geometry");
        ItemError::GeometryWrap {
            location: location.id.clone(),
            source,
        }
    })?;
    emit_literals(graph, subject, &GeometryLiterals::of(&shape));
    Ok(())
}

fn emit_literals(graph: &mut Graph, subject: &Term, literals: &GeometryLiterals) {
    graph.add_triple(
        subject.clone(),
        Term::iri(osgeo::AS_GEO_JSON),
        Term::string(&literals.geojson),
    );
    graph.add_triple(
        subject.clone(),
        Term::iri(osgeo::AS_WKT),
        Term::string(&literals.wkt),
    );
}

fn subject_label(subject: &Term) -> String {
    match subject.as_iri() {
        Some(iri) => iri.to_string(),
        None => subject.to_string(),
    }
}
