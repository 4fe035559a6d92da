//! Inbound inputs and the input log.
//!
//! The rendering layer drives a game with exactly five calls. Each one is an
//! [`Input`]; every input accepted by a game is appended to its log as an
//! [`InputRecord`], so a game can be replayed from its seed.
//!
//! ```
//! use gauss_cards::core::{CardId, Input};
//!
//! let click = Input::SelectCard(CardId(5));
//! assert_eq!(click.card(), Some(CardId(5)));
//! assert_eq!(Input::DrawNextBatch.card(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// One inbound call from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A card was clicked.
    SelectCard(CardId),
    /// Move a hand card into the stock slot, or take the stocked card back.
    ToggleStockFromHand(CardId),
    /// Discard the hand and draw a fresh batch.
    DrawNextBatch,
    /// Return the stocked card to the end of the hand.
    PlaceStockBack,
    /// Start a new game.
    ResetGame,
}

impl Input {
    /// The card this input refers to, if any.
    #[must_use]
    pub const fn card(&self) -> Option<CardId> {
        match self {
            Input::SelectCard(id) | Input::ToggleStockFromHand(id) => Some(*id),
            Input::DrawNextBatch | Input::PlaceStockBack | Input::ResetGame => None,
        }
    }
}

/// A logged input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Position in the log, starting at 0.
    pub sequence: u32,

    /// The input.
    pub input: Input,

    /// Move counter after the input was processed.
    pub moves: u32,
}

impl InputRecord {
    #[must_use]
    pub fn new(sequence: u32, input: Input, moves: u32) -> Self {
        Self {
            sequence,
            input,
            moves,
        }
    }
}
