//! Atlas grid references and the grid lookup seam.
//!
//! A grid reference names an atlas map and, optionally, one or more cells on
//! it:
//!
//! ```text
//! <base>/<map>                 whole map
//! <base>/<map>/<cell>[+<cell>] one or more cells, upper-cased
//! ```
//!
//! The base may be given with or without its trailing slash. An empty piece
//! between `+` separators stands for the whole map, so `42/+` names the
//! whole-map block twice. Anything with more segments is malformed. Resolving a (map, cell) pair to a
//! bounding rectangle is the job of a [`GridLookup`] implementation; this
//! crate only ships the in-memory [`GridTable`].

use crate::error::{GeoError, Result};
use crate::geometry::{rect_polygon, GeometryLiterals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default grid base URL.
pub const DEFAULT_GRID_BASE: &str = "http://atlantides.org/capgrids/";

/// Bounding rectangle of a grid cell, in (west, south, east, north) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GridBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// GeoJSON and WKT of the rectangle.
    pub fn literals(&self) -> GeometryLiterals {
        GeometryLiterals::of(&rect_polygon(self.west, self.south, self.east, self.north))
    }
}

/// One (map, cell-or-whole-map) pair from a grid reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub map: String,
    pub cell: Option<String>,
}

impl GridCell {
    /// `<base>/<map>#<CELL>`, or `#this` for the whole map.
    pub fn uri(&self, base: &str) -> String {
        format!(
            "{}/{}#{}",
            base.trim_end_matches('/'),
            self.map,
            self.cell.as_deref().unwrap_or("this")
        )
    }

    /// The cell's extent resource: `<cell uri>-extent`.
    pub fn extent_uri(&self, base: &str) -> String {
        format!("{}-extent", self.uri(base))
    }
}

/// A parsed grid reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReference {
    pub map: String,
    pub cells: Vec<GridCell>,
}

impl GridReference {
    /// Parse `reference` against `base`.
    ///
    /// Returns `Ok(None)` when the reference is not under `base` at all (it
    /// is not a grid reference), and `MalformedGridReference` when it has
    /// more than two path segments.
    pub fn parse(reference: &str, base: &str) -> Result<Option<GridReference>> {
        let base = base.trim_end_matches('/');
        let Some(rest) = reference
            .trim_end_matches('/')
            .strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return Ok(None);
        };

        let segments: Vec<&str> = rest.split('/').collect();
        let (map, codes) = match segments.as_slice() {
            [map] => (*map, vec![None]),
            [map, cells] => (
                *map,
                cells
                    .split('+')
                    .map(|code| Some(code.to_uppercase()).filter(|c| !c.is_empty()))
                    .collect(),
            ),
            _ => {
                return Err(GeoError::MalformedGridReference {
                    reference: reference.to_string(),
                    segments: segments.len(),
                })
            }
        };

        let cells = codes
            .into_iter()
            .map(|cell| GridCell {
                map: map.to_string(),
                cell,
            })
            .collect();

        Ok(Some(GridReference {
            map: map.to_string(),
            cells,
        }))
    }
}

/// Resolves a map number and optional cell to its bounding rectangle.
///
/// Implementations fail with `UnknownGridCell` for maps or cells they do not
/// know. Calls must be safe for concurrent reads.
pub trait GridLookup: Send + Sync {
    fn bounds(&self, map: &str, cell: Option<&str>) -> Result<GridBox>;
}

impl<T: GridLookup + ?Sized> GridLookup for &T {
    fn bounds(&self, map: &str, cell: Option<&str>) -> Result<GridBox> {
        (**self).bounds(map, cell)
    }
}

/// A serialized grid table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridTableEntry {
    pub map: String,
    #[serde(default)]
    pub cell: Option<String>,
    pub bounds: GridBox,
}

/// In-memory grid lookup keyed by (map, cell).
#[derive(Debug, Clone, Default)]
pub struct GridTable {
    entries: BTreeMap<(String, Option<String>), GridBox>,
}

impl GridTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bounds for a map (cell `None`) or a single cell.
    pub fn insert(&mut self, map: impl Into<String>, cell: Option<&str>, bounds: GridBox) {
        self.entries.insert(
            (map.into(), cell.map(str::to_uppercase)),
            bounds,
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<GridTableEntry> for GridTable {
    fn from_iter<I: IntoIterator<Item = GridTableEntry>>(iter: I) -> Self {
        let mut table = GridTable::new();
        for entry in iter {
            table.insert(entry.map, entry.cell.as_deref(), entry.bounds);
        }
        table
    }
}

impl GridLookup for GridTable {
    fn bounds(&self, map: &str, cell: Option<&str>) -> Result<GridBox> {
        let key = (map.to_string(), cell.map(str::to_uppercase));
        self.entries
            .get(&key)
            .copied()
            .ok_or_else(|| GeoError::UnknownGridCell {
                map: map.to_string(),
                cell: cell.map(str::to_string),
            })
    }
}
