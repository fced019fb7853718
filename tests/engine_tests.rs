//! Rules engine integration tests.
//!
//! These tests drive full solving sequences through the public API: action
//! dispatch, the mark cycle, queen placement sweeps, and replay from a
//! recorded action stack.

use queens_engine::{apply_action, replay, Action, ActionStack, Board, CellState, Coords};

/// 5x5 layout with five zones, one solvable configuration per zone.
fn layout() -> Vec<Vec<u16>> {
    vec![
        vec![0, 0, 0, 1, 1],
        vec![0, 2, 2, 2, 1],
        vec![0, 2, 3, 2, 1],
        vec![4, 2, 3, 3, 1],
        vec![4, 4, 4, 3, 1],
    ]
}

// =============================================================================
// Mark Cycle Tests
// =============================================================================

/// Test that repeated clicks walk the full empty/cross/queen cycle.
#[test]
fn test_click_cycles_marks() {
    let mut board = Board::from_layout(&layout());
    let target = Coords::new(2, 2);

    apply_action(&mut board, Action::Click(target));
    assert_eq!(board[target].state, CellState::Cross);

    apply_action(&mut board, Action::Click(target));
    assert_eq!(board[target].state, CellState::Queen);

    apply_action(&mut board, Action::Click(target));
    assert_eq!(board[target].state, CellState::Empty);
}

/// Test that a click never disturbs any other cell, even one that puts two
/// queens in the same row.
#[test]
fn test_click_is_local() {
    let mut board = Board::from_layout(&layout());
    apply_action(&mut board, Action::Context(Coords::new(0, 0)));
    let before = board.clone();

    // (0, 3) was crossed by the sweep; one click promotes it to a queen that
    // conflicts with the queen at (0, 0). The engine leaves both standing.
    apply_action(&mut board, Action::Click(Coords::new(0, 3)));

    assert_eq!(board[Coords::new(0, 3)].state, CellState::Queen);
    for (coords, cell) in board.cells() {
        if coords != Coords::new(0, 3) {
            assert_eq!(*cell, before[coords]);
        }
    }
}

/// Test that a click targeting out-of-bounds coordinates panics.
#[test]
#[should_panic(expected = "out of bounds")]
fn test_click_out_of_bounds_panics() {
    let mut board = Board::from_layout(&layout());
    apply_action(&mut board, Action::Click(Coords::new(5, 0)));
}

// =============================================================================
// Queen Placement Tests
// =============================================================================

/// Test that placing a queen crosses out its row, column, zone, and
/// diagonal neighbors, and nothing else.
#[test]
fn test_context_click_sweeps_conflicts() {
    let mut board = Board::from_layout(&layout());
    let target = Coords::new(2, 2); // zone 3
    let zone = board[target].zone;
    apply_action(&mut board, Action::Context(target));

    assert_eq!(board[target].state, CellState::Queen);
    for (coords, cell) in board.cells() {
        if coords == target {
            continue;
        }
        let ruled_out = coords.row == target.row
            || coords.col == target.col
            || cell.zone == zone
            || board.diagonal_neighbors(target).contains(&coords);
        let expected = if ruled_out { CellState::Cross } else { CellState::Empty };
        assert_eq!(cell.state, expected, "wrong state at {}", coords);
    }
}

/// Test that a sweep leaves earlier queens and crosses untouched.
#[test]
fn test_context_click_preserves_prior_marks() {
    let mut board = Board::from_layout(&layout());
    apply_action(&mut board, Action::Context(Coords::new(0, 0)));
    apply_action(&mut board, Action::Context(Coords::new(2, 3)));

    assert_eq!(board[Coords::new(0, 0)].state, CellState::Queen);
    assert_eq!(board[Coords::new(2, 3)].state, CellState::Queen);
    // (0, 3) was crossed by the first sweep (same row) and stays crossed even
    // though the second sweep also covers it (same column).
    assert_eq!(board[Coords::new(0, 3)].state, CellState::Cross);
}

/// Test that placing queens on a one-cell board only marks the target.
#[test]
fn test_context_click_single_cell_board() {
    let mut board = Board::from_layout(&[vec![0]]);
    apply_action(&mut board, Action::Context(Coords::new(0, 0)));

    assert_eq!(board[Coords::new(0, 0)].state, CellState::Queen);
}

/// Test a full solve: placing the layout's unique solution, one queen per
/// zone, leaves exactly five queens and no empty cells.
#[test]
fn test_full_solve_covers_board() {
    let mut board = Board::from_layout(&layout());
    // One queen per row, column, and zone, none diagonally adjacent.
    let solution = [
        Coords::new(0, 4),
        Coords::new(1, 2),
        Coords::new(2, 0),
        Coords::new(3, 3),
        Coords::new(4, 1),
    ];
    for coords in solution {
        apply_action(&mut board, Action::Context(coords));
    }

    for (coords, cell) in board.cells() {
        let expected = if solution.contains(&coords) {
            CellState::Queen
        } else {
            CellState::Cross
        };
        assert_eq!(cell.state, expected, "wrong state at {}", coords);
    }
}

// =============================================================================
// Replay Tests
// =============================================================================

/// Test that replaying a recorded action stack reproduces the live board.
#[test]
fn test_replay_reproduces_board() {
    let mut stack = ActionStack::new();
    let mut live = Board::from_layout(&layout());

    for action in [
        Action::Click(Coords::new(0, 0)),
        Action::Context(Coords::new(2, 2)),
        Action::Click(Coords::new(4, 4)),
        Action::Click(Coords::new(4, 4)),
        Action::Context(Coords::new(0, 3)),
    ] {
        stack.push(action);
        apply_action(&mut live, action);
    }

    assert_eq!(replay(&layout(), &stack), live);
}

/// Test that truncating the stack replays to an earlier board, the undo path.
#[test]
fn test_replay_truncated_stack_undoes() {
    let actions = [
        Action::Click(Coords::new(1, 1)),
        Action::Context(Coords::new(3, 3)),
        Action::Click(Coords::new(0, 4)),
    ];

    let mut before_last = Board::from_layout(&layout());
    apply_action(&mut before_last, actions[0]);
    apply_action(&mut before_last, actions[1]);

    assert_eq!(replay(&layout(), &actions[..2]), before_last);
}

/// Test that an action stack survives a serde round trip and still replays.
#[test]
fn test_replay_from_serialized_stack() {
    let stack: ActionStack = vec![
        Action::Click(Coords::new(1, 2)),
        Action::Context(Coords::new(3, 0)),
    ];

    let json = serde_json::to_string(&stack).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"click","coords":{"row":1,"col":2}},{"type":"context","coords":{"row":3,"col":0}}]"#
    );

    let restored: ActionStack = serde_json::from_str(&json).unwrap();
    assert_eq!(replay(&layout(), &restored), replay(&layout(), &stack));
}
