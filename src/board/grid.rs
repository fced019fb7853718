//! Board storage, construction, and mechanical accessors.
//!
//! `Board` owns a rectangular grid of [`Cell`]s in a flat row-major buffer.
//! Dimensions are fixed at construction - no operation resizes the grid - and
//! rectangularity is an invariant of the representation itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::core::cell::{Cell, ZoneId};
use crate::core::coords::Coords;

/// The four diagonal offsets, as (row, column) deltas.
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// In-bounds diagonal neighbors of a cell.
///
/// There are at most 4, so SmallVec keeps the list on the stack.
pub type DiagonalNeighbors = SmallVec<[Coords; 4]>;

/// A rectangular grid of cells, indexed by [`Coords`] with both axes 0-based.
///
/// Invariant: the dimensions agree with the stored cell count (enforced by
/// construction and via `#[serde(try_from)]` at the deserialization boundary),
/// so row-major addressing never reaches outside the buffer.
///
/// ## Usage
///
/// ```
/// use queens_engine::{Board, CellState, Coords, ZoneId};
///
/// let board = Board::from_layout(&[vec![0, 0, 1], vec![0, 1, 1], vec![2, 2, 1]]);
///
/// assert_eq!(board.rows(), 3);
/// assert_eq!(board.cols(), 3);
/// assert_eq!(board[Coords::new(2, 0)].zone, ZoneId::new(2));
/// assert_eq!(board[Coords::new(2, 0)].state, CellState::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major: the cell at (row, col) lives at `row * cols + col`.
    cells: Vec<Cell>,
}

/// Serialized form of [`Board`] before shape validation.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.cells.len()) {
            return Err(format!(
                "dimensions {}x{} do not match cell count {}",
                raw.rows,
                raw.cols,
                raw.cells.len()
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Build a board from a zone layout.
    ///
    /// Every cell starts unmarked ([`CellState::Empty`](crate::CellState))
    /// with the zone named by the corresponding layout entry. Zone values are
    /// opaque; no range is enforced. An empty layout yields a 0x0 board.
    ///
    /// ## Panics
    ///
    /// Panics if the layout is jagged (rows of unequal length): the flat
    /// row-major store cannot address a jagged grid without corrupting
    /// neighboring cells.
    #[must_use]
    pub fn from_layout(layout: &[Vec<u16>]) -> Self {
        let rows = layout.len();
        let cols = layout.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, zones) in layout.iter().enumerate() {
            assert!(
                zones.len() == cols,
                "jagged layout: row {} has {} columns, expected {}",
                row,
                zones.len(),
                cols
            );
            cells.extend(zones.iter().map(|&zone| Cell::new(ZoneId::new(zone))));
        }

        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether coordinates fall inside the grid.
    #[must_use]
    pub fn contains(&self, coords: Coords) -> bool {
        coords.row < self.rows && coords.col < self.cols
    }

    /// Flat buffer position for in-bounds coordinates.
    ///
    /// Row and column are checked separately so an oversized column can never
    /// alias into the next row.
    fn index_of(&self, coords: Coords) -> Option<usize> {
        if self.contains(coords) {
            Some(coords.row * self.cols + coords.col)
        } else {
            None
        }
    }

    /// Get the cell at `coords`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coords: Coords) -> Option<&Cell> {
        let index = self.index_of(coords)?;
        Some(&self.cells[index])
    }

    /// Get the cell at `coords` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, coords: Coords) -> Option<&mut Cell> {
        let index = self.index_of(coords)?;
        Some(&mut self.cells[index])
    }

    /// Iterate over all cells with their coordinates, row-major (row 0 first,
    /// columns left to right within each row).
    pub fn cells(&self) -> impl Iterator<Item = (Coords, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Coords::new(index / cols, index % cols), cell))
    }

    /// In-bounds diagonal neighbors of `coords`, at offsets (±1, ±1).
    ///
    /// Offsets that fall outside the grid are skipped rather than errors, so
    /// a corner yields one neighbor and a 1x1 board yields none.
    #[must_use]
    pub fn diagonal_neighbors(&self, coords: Coords) -> DiagonalNeighbors {
        DIAGONAL_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = coords.row as i32 + dr;
                let col = coords.col as i32 + dc;
                if row < 0 || col < 0 {
                    return None;
                }
                let neighbor = Coords::new(row as usize, col as usize);
                self.contains(neighbor).then_some(neighbor)
            })
            .collect()
    }
}

impl Index<Coords> for Board {
    type Output = Cell;

    /// Panics if `coords` is out of bounds.
    fn index(&self, coords: Coords) -> &Self::Output {
        match self.get(coords) {
            Some(cell) => cell,
            None => panic!(
                "coordinates {} out of bounds for {}x{} board",
                coords, self.rows, self.cols
            ),
        }
    }
}

impl IndexMut<Coords> for Board {
    /// Panics if `coords` is out of bounds.
    fn index_mut(&mut self, coords: Coords) -> &mut Self::Output {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(coords) {
            Some(cell) => cell,
            None => panic!(
                "coordinates {} out of bounds for {}x{} board",
                coords, rows, cols
            ),
        }
    }
}
