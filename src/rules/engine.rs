//! Action application: the mark cycle, queen placement, and dispatch.
//!
//! The entry point is [`apply_action`]. Both transitions mutate the board in
//! place and complete before returning; the engine holds no state of its own.

use crate::board::Board;
use crate::core::action::Action;
use crate::core::cell::CellState;
use crate::core::coords::Coords;

/// Apply one action to the board.
///
/// This is the single seam collaborators drive the engine through:
/// [`Action::Click`] cycles the target cell's mark, [`Action::Context`]
/// places a queen there and crosses out every cell it rules out. The match is
/// exhaustive over the two action kinds.
///
/// ## Example
///
/// ```
/// use queens_engine::{apply_action, Action, Board, CellState, Coords};
///
/// let mut board = Board::from_layout(&[vec![0, 1], vec![0, 1]]);
/// apply_action(&mut board, Action::Click(Coords::new(0, 0)));
///
/// assert_eq!(board[Coords::new(0, 0)].state, CellState::Cross);
/// ```
///
/// ## Panics
///
/// Panics if the action's target coordinates are out of bounds.
pub fn apply_action(board: &mut Board, action: Action) {
    match action {
        Action::Click(coords) => cycle_cell(board, coords),
        Action::Context(coords) => place_queen(board, coords),
    }
}

/// Advance the target cell one step through the mark cycle.
///
/// Purely mechanical: `Empty → Cross → Queen → Empty`, driven by the cell's
/// current state alone, independent of neighbors and zones. Exactly one cell
/// changes, and any conflict this creates (two queens in one row, say) is
/// left standing for the player to resolve.
fn cycle_cell(board: &mut Board, coords: Coords) {
    let cell = &mut board[coords];
    cell.state = cell.state.next();
}

/// Place a queen at the target and cross out every cell it rules out.
///
/// The target becomes [`CellState::Queen`] first; the sweep then marks as
/// [`CellState::Cross`] every cell in the same row, column, or zone, plus the
/// four diagonal neighbors, skipping offsets that fall off the grid. Only
/// cells currently [`CellState::Empty`] are overwritten - existing crosses
/// and queens (including the fresh target) stay put, which makes reapplying
/// the sweep with the same target a no-op.
fn place_queen(board: &mut Board, coords: Coords) {
    let zone = board[coords].zone;
    board[coords].state = CellState::Queen;

    // Row-major sweep for the row/column/zone rules.
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = &mut board[Coords::new(row, col)];
            if cell.state != CellState::Empty {
                continue;
            }
            if row == coords.row || col == coords.col || cell.zone == zone {
                cell.state = CellState::Cross;
            }
        }
    }

    // No two queens touch diagonally: rule out the four corner offsets.
    for neighbor in board.diagonal_neighbors(coords) {
        let cell = &mut board[neighbor];
        if cell.state == CellState::Empty {
            cell.state = CellState::Cross;
        }
    }
}

/// Re-derive a board from a zone layout and a recorded action sequence.
///
/// Equivalent to [`Board::from_layout`] followed by [`apply_action`] for each
/// action in order. Collaborators that keep an
/// [`ActionStack`](crate::core::ActionStack) use this to rebuild the current
/// board from scratch.
///
/// ## Panics
///
/// Panics if the layout is jagged or any recorded action targets coordinates
/// out of bounds for the layout's dimensions.
#[must_use]
pub fn replay(layout: &[Vec<u16>], actions: &[Action]) -> Board {
    let mut board = Board::from_layout(layout);
    for &action in actions {
        apply_action(&mut board, action);
    }
    board
}
