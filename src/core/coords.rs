//! Board coordinates.
//!
//! A `Coords` names one cell as a (row, column) pair, both axes 0-based.
//! Whether a pair is in bounds depends on the board it is used with; see
//! [`Board::contains`](crate::board::Board::contains).

use serde::{Deserialize, Serialize};

/// A (row, column) pair identifying one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    /// Row index, 0-based.
    pub row: usize,
    /// Column index, 0-based.
    pub col: usize,
}

impl Coords {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
