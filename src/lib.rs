//! # queens-engine
//!
//! A rule engine for zone-based queens placement puzzles: one queen per
//! zone, row, and column, and no two queens touching diagonally.
//!
//! ## Design Principles
//!
//! 1. **Model/Rules Split**: The board is pure data. All rule behavior lives
//!    in the `rules` module behind a single dispatch seam.
//!
//! 2. **Closed Variants**: Action kinds and cell states are exhaustive enums,
//!    so dispatch and the mark cycle are total functions the compiler checks.
//!
//! 3. **One Mutation Discipline**: Every transition takes `&mut Board` and
//!    returns nothing. The caller owns the board; the engine borrows it for
//!    the duration of one action.
//!
//! ## Architecture
//!
//! A collaborator (UI, session driver) builds a [`Board`] from a zone layout,
//! then feeds player input through [`apply_action`] one [`Action`] at a time:
//!
//! - a plain click cycles the target cell `empty → cross → queen → empty`;
//! - a context click places a queen and crosses out every cell it rules out
//!   (same row, column, zone, or diagonally adjacent).
//!
//! Each call completes synchronously, including the whole elimination sweep,
//! before the next action is considered. Rendering, input capture, history
//! persistence, and win detection are collaborator concerns.
//!
//! ## Modules
//!
//! - `core`: cell states, zones, coordinates, actions
//! - `board`: the rectangular grid and its mechanical accessors
//! - `rules`: the transition engine (mark cycle, elimination sweep, dispatch)

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Action, ActionStack, Cell, CellState, Coords, ZoneId};

pub use crate::board::Board;

pub use crate::rules::{apply_action, replay};
