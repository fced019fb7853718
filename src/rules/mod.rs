//! The transition engine: how actions change the board.
//!
//! Two transitions exist, dispatched by [`apply_action`] over the closed
//! [`Action`](crate::core::Action) type:
//!
//! - the mark cycle for plain clicks;
//! - queen placement with an elimination sweep for context clicks.
//!
//! The engine borrows the board mutably for one call at a time and never
//! validates move legality - conflicts are the player's (or a collaborating
//! validator's) to resolve.

pub mod engine;

pub use engine::{apply_action, replay};
