//! Cell building blocks: zone identifiers, the tri-state marker, and the
//! cell itself.
//!
//! ## ZoneId
//!
//! Opaque identifier grouping the cells that must share exactly one queen.
//! The engine never interprets zone IDs beyond equality.
//!
//! ## CellState
//!
//! Closed three-value marker with an explicit total successor function. The
//! manual mark cycle is `Empty → Cross → Queen → Empty`, so three steps
//! return any state to itself.
//!
//! ## Cell
//!
//! One grid square: a zone tag plus the marker, with a reserved `invalid`
//! flag that only collaborating validators write.

use serde::{Deserialize, Serialize};

/// Zone identifier. Puzzle definitions assign one to every cell.
///
/// Zone values are opaque - the engine only ever compares them for equality
/// during the elimination sweep. No range constraint is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// The marker a cell carries: exactly one of three values.
///
/// Serializes as the lowercase strings `"empty"`, `"cross"`, `"queen"`. A
/// cell whose serialized form omits the state is treated as `Empty`, which is
/// also the `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// No mark.
    #[default]
    Empty,
    /// "Cannot hold a queen" - asserted manually or by the elimination sweep.
    Cross,
    /// A queen is placed here.
    Queen,
}

impl CellState {
    /// The successor in the manual mark cycle.
    ///
    /// Total round-robin over the three states:
    ///
    /// ```
    /// use queens_engine::CellState;
    ///
    /// assert_eq!(CellState::Empty.next(), CellState::Cross);
    /// assert_eq!(CellState::Cross.next(), CellState::Queen);
    /// assert_eq!(CellState::Queen.next(), CellState::Empty);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            CellState::Empty => CellState::Cross,
            CellState::Cross => CellState::Queen,
            CellState::Queen => CellState::Empty,
        }
    }
}

/// One board cell: a zone tag plus the player-visible marker.
///
/// The serialized shape is `{"zone": N, "state": "empty"|"cross"|"queen"}`,
/// with `invalid` appearing only when set - collaborators persisting boards
/// round-trip this shape exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Zone this cell belongs to.
    pub zone: ZoneId,

    /// Current marker. Defaults to `Empty` when absent from serialized input.
    #[serde(default)]
    pub state: CellState,

    /// Reserved for collaborators (e.g. a validator flagging a queen that
    /// breaks a placement rule). The engine's own transitions never set or
    /// read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<bool>,
}

impl Cell {
    /// Create an unmarked cell in the given zone.
    #[must_use]
    pub const fn new(zone: ZoneId) -> Self {
        Self {
            zone,
            state: CellState::Empty,
            invalid: None,
        }
    }
}
