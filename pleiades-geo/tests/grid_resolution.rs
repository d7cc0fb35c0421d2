//! Grid reference resolution against a JSON grid table.

use pleiades_geo::grid::DEFAULT_GRID_BASE;
use pleiades_geo::{parse_wkt, BBox, GeoError, GridLookup, GridReference, GridTable, GridTableEntry};

fn table() -> GridTable {
    let rows: Vec<GridTableEntry> = serde_json::from_value(serde_json::json!([
        {"map": "43", "bounds": {"west": 11.0, "south": 40.0, "east": 14.0, "north": 43.0}},
        {"map": "43", "cell": "b2", "bounds": {"west": 12.0, "south": 41.5, "east": 13.0, "north": 42.0}},
        {"map": "43", "cell": "c2", "bounds": {"west": 13.0, "south": 41.5, "east": 14.0, "north": 42.0}}
    ]))
    .unwrap();
    rows.into_iter().collect()
}

#[test]
fn resolves_each_cell_of_a_reference() {
    let table = table();
    let reference = GridReference::parse("http://atlantides.org/capgrids/43/b2+C2", DEFAULT_GRID_BASE)
        .unwrap()
        .unwrap();

    let extents: Vec<BBox> = reference
        .cells
        .iter()
        .map(|cell| {
            let wkt = table.bounds(&cell.map, cell.cell.as_deref()).unwrap().literals().wkt;
            BBox::from_geometry(&parse_wkt(&wkt).unwrap()).unwrap()
        })
        .collect();

    assert_eq!(
        extents,
        vec![
            BBox::new(41.5, 42.0, 12.0, 13.0),
            BBox::new(41.5, 42.0, 13.0, 14.0),
        ]
    );
}

#[test]
fn whole_map_and_unknown_cells() {
    let table = table();
    let whole = GridReference::parse("http://atlantides.org/capgrids/43", DEFAULT_GRID_BASE)
        .unwrap()
        .unwrap();
    assert_eq!(whole.cells.len(), 1);
    assert!(table.bounds(&whole.map, None).is_ok());

    let err = table.bounds("43", Some("z9")).unwrap_err();
    assert_eq!(
        err,
        GeoError::UnknownGridCell {
            map: "43".into(),
            cell: Some("z9".into())
        }
    );
}
