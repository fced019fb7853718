//! The board: a rectangular grid of cells.
//!
//! The grid is pure data plus mechanical accessors - bounds checks, row-major
//! iteration, diagonal-neighbor lookup. All rule behavior (the mark cycle,
//! the elimination sweep) lives in [`crate::rules`].
//!
//! ## Key Types
//!
//! - `Board`: the grid itself, fixed-size once constructed
//! - `DiagonalNeighbors`: inline list of a cell's in-bounds diagonal neighbors
//! - `Cell`, `CellState`, `ZoneId`: cell building blocks (from `core`)

pub mod grid;

pub use grid::{Board, DiagonalNeighbors};

// Re-export cell types from core for convenience
pub use crate::core::cell::{Cell, CellState, ZoneId};
