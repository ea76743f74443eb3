//! The 2D cell collection and its topology queries.

use crate::cell::Cell;
use crate::neighborhood::Neighborhood;
use indexmap::IndexMap;
use petri_core::{CellState, ConfigError, Coord, GridError};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// A fully populated rectangular grid of [`Cell`]s.
///
/// Every coordinate in `[0, rows) × [0, cols)` maps to exactly one
/// cell — no gaps, no resizing after construction. Storage is a flat
/// row-major `Vec`, so iteration order is row 0 left-to-right, then
/// row 1, and so on.
///
/// Random access comes in two flavors:
/// - [`get`](Grid::get) / [`state`](Grid::state) /
///   [`set_state`](Grid::set_state) bounds-check and return
///   [`GridError`] — use these for coordinates from external input.
/// - `grid[coord]` panics on out-of-bounds — reserved for coordinates
///   already produced by clipping queries such as
///   [`neighbors`](Grid::neighbors), where a violation is a bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<S: CellState> {
    rows: u32,
    cols: u32,
    cells: Vec<Cell<S>>,
}

impl<S: CellState> Grid<S> {
    /// Maximum dimension size: coordinate arithmetic is done in signed
    /// space, so each axis must fit in an `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `rows × cols` grid with every cell set to `fill`.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is 0,
    /// or `Err(ConfigError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Grid::MAX_DIM).
    pub fn new(rows: u32, cols: u32, fill: S) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let count = (rows as usize) * (cols as usize);
        let mut cells = Vec::with_capacity(count);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(Cell::new(fill, Coord::new(r, c)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count, `rows × cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index for an in-bounds coordinate.
    fn flat(&self, coord: Coord) -> usize {
        (coord.row as usize) * (self.cols as usize) + (coord.col as usize)
    }

    /// Bounds-check a coordinate, returning its flat index.
    fn checked_flat(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return Err(GridError::CoordOutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.flat(coord))
    }

    /// The cell at `coord`, or an error if `coord` is out of bounds.
    pub fn get(&self, coord: Coord) -> Result<&Cell<S>, GridError> {
        Ok(&self.cells[self.checked_flat(coord)?])
    }

    /// The state at `coord`, or an error if `coord` is out of bounds.
    pub fn state(&self, coord: Coord) -> Result<S, GridError> {
        Ok(self.cells[self.checked_flat(coord)?].state())
    }

    /// Set the state at `coord`, or report an out-of-bounds error.
    pub fn set_state(&mut self, coord: Coord, state: S) -> Result<(), GridError> {
        let idx = self.checked_flat(coord)?;
        self.cells[idx].set_state(state);
        Ok(())
    }

    /// Overwrite every cell's state with `state`.
    pub fn fill(&mut self, state: S) {
        for cell in &mut self.cells {
            cell.set_state(state);
        }
    }

    /// Row-major iterator over all coordinates.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<S>> {
        self.cells.iter()
    }

    /// The in-bounds neighbors of `coord` under `neighborhood`.
    ///
    /// The center coordinate itself is bounds-checked; the returned
    /// set is clipped to the grid, never wrapped or clamped.
    pub fn neighbors(
        &self,
        coord: Coord,
        neighborhood: Neighborhood,
    ) -> Result<SmallVec<[Coord; 8]>, GridError> {
        self.checked_flat(coord)?;
        Ok(neighborhood.around(coord, self.rows, self.cols))
    }

    /// The states of the in-bounds neighbors of `coord`, in offset
    /// table order.
    pub fn neighbor_states(
        &self,
        coord: Coord,
        neighborhood: Neighborhood,
    ) -> Result<SmallVec<[S; 8]>, GridError> {
        let neighbors = self.neighbors(coord, neighborhood)?;
        Ok(neighbors.iter().map(|&nb| self.cells[self.flat(nb)].state()).collect())
    }

    /// Visit every cell in row-major order with its neighbor states.
    ///
    /// The grid is borrowed immutably for the whole sweep, so `visit`
    /// always observes one consistent generation — the engine stages
    /// its writes into a second buffer.
    pub fn sweep<F>(&self, neighborhood: Neighborhood, mut visit: F)
    where
        F: FnMut(Coord, S, &[S]),
    {
        let mut scratch: SmallVec<[S; 8]> = SmallVec::new();
        for cell in &self.cells {
            scratch.clear();
            for nb in neighborhood.around(cell.coord(), self.rows, self.cols) {
                scratch.push(self.cells[self.flat(nb)].state());
            }
            visit(cell.coord(), cell.state(), &scratch);
        }
    }

    /// Per-state cell counts for the current generation.
    ///
    /// Covers every state present in the grid; the counts sum to
    /// `rows × cols`. Keys appear in first-encounter (row-major)
    /// order, so the result is deterministic for a given grid.
    pub fn census(&self) -> IndexMap<S, usize> {
        let mut counts = IndexMap::new();
        for cell in &self.cells {
            *counts.entry(cell.state()).or_insert(0) += 1;
        }
        counts
    }
}

impl<S: CellState> Index<Coord> for Grid<S> {
    type Output = S;

    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. Use [`Grid::state`] for
    /// checked access.
    fn index(&self, coord: Coord) -> &S {
        match self.checked_flat(coord) {
            Ok(idx) => &self.cells[idx].state,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<S: CellState> IndexMut<Coord> for Grid<S> {
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. Use [`Grid::set_state`] for
    /// checked access.
    fn index_mut(&mut self, coord: Coord) -> &mut S {
        match self.checked_flat(coord) {
            Ok(idx) => &mut self.cells[idx].state,
            Err(err) => panic!("{err}"),
        }
    }
}
