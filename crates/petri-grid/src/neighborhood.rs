//! Boundary-clipped neighbor enumeration.

use petri_core::Coord;
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_MOORE: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 4 cardinal offsets: N, S, W, E.
const OFFSETS_VON_NEUMANN: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Which cells count as neighbors of a grid cell.
///
/// Enumeration is boundary-clipped: candidates falling outside
/// `[0, rows) × [0, cols)` are excluded, so corner cells have 3 Moore
/// (2 von Neumann) neighbors and edge cells 5 (3). There is no wrap
/// or clamp variant — the simulated world ends at the grid edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Up to 8 cells sharing an edge or corner.
    Moore,
    /// Up to 4 cells sharing an edge (cardinal directions).
    VonNeumann,
}

impl Neighborhood {
    /// The offset table for this neighborhood.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Moore => &OFFSETS_MOORE,
            Self::VonNeumann => &OFFSETS_VON_NEUMANN,
        }
    }

    /// Maximum neighbor count (reached by interior cells).
    pub fn max_degree(self) -> usize {
        self.offsets().len()
    }

    /// The in-bounds neighbors of `coord` on a `rows × cols` grid.
    ///
    /// Works for any input coordinate, interior or boundary; the result
    /// never contains a coordinate outside `[0, rows) × [0, cols)`.
    pub fn around(self, coord: Coord, rows: u32, cols: u32) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        for &(dr, dc) in self.offsets() {
            let nr = coord.row as i64 + dr as i64;
            let nc = coord.col as i64 + dc as i64;
            if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                out.push(Coord::new(nr as u32, nc as u32));
            }
        }
        out
    }
}
