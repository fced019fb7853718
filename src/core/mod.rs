//! Core vocabulary types: cells, zones, coordinates, actions.
//!
//! This module contains the plain-data building blocks shared by the board
//! model and the transition engine. Nothing here carries rule behavior beyond
//! the cell-state successor function.

pub mod cell;
pub mod coords;
pub mod action;

pub use cell::{Cell, CellState, ZoneId};
pub use coords::Coords;
pub use action::{Action, ActionStack};
