//! Game facade: one [`Puzzle`] per game, driven by the five inbound calls.

mod game;
mod snapshot;

pub use game::{Puzzle, PuzzleBuilder};
pub use snapshot::Snapshot;
