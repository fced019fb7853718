//! Player actions: the input events the transition engine consumes.
//!
//! An action pairs an input kind with target coordinates. Exactly two kinds
//! exist and each variant owns its payload, so dispatch is an exhaustive
//! match:
//!
//! - [`Action::Click`]: plain click, cycles the target cell's mark.
//! - [`Action::Context`]: context click, places a queen and eliminates.
//!
//! Actions are immutable once issued, and the engine retains none of them. A
//! collaborator that wants a history records actions into an [`ActionStack`]
//! and can re-derive a board from it with [`replay`](crate::rules::replay).

use serde::{Deserialize, Serialize};

use super::coords::Coords;

/// A single player input event.
///
/// ## Example
///
/// ```
/// use queens_engine::{Action, Coords};
///
/// let click = Action::Click(Coords::new(0, 2));
/// let mark = Action::Context(Coords::new(0, 2));
///
/// assert_eq!(click.coords(), mark.coords());
/// assert_ne!(click, mark);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "coords", rename_all = "lowercase")]
pub enum Action {
    /// Plain click: advance the target cell one step through the mark cycle.
    Click(Coords),

    /// Context click: place a queen at the target and cross out every cell
    /// the placement rules out.
    Context(Coords),
}

impl Action {
    /// Target coordinates of this action.
    #[must_use]
    pub const fn coords(self) -> Coords {
        match self {
            Action::Click(coords) | Action::Context(coords) => coords,
        }
    }
}

/// A recorded sequence of actions, oldest first.
///
/// Capture and persistence are collaborator concerns; the engine only ever
/// consumes a stack via [`replay`](crate::rules::replay).
pub type ActionStack = Vec<Action>;
