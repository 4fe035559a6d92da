//! Results of inbound calls.
//!
//! Player input never fails. Each call reports an [`Outcome`]; illegal input
//! is absorbed as either [`Outcome::Ignored`] (nothing changed) or
//! [`Outcome::Cleared`] (the selection was reset, nothing else changed),
//! carrying a [`Rejection`] that names why.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::entity::CardId;
use crate::ops::Application;

/// Why an input was not acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("{0} is not on the board, in the hand, or in the stock")]
    UnknownCard(CardId),

    #[error("{0} cannot fill the pending operator's slot")]
    WrongKindForSlot(CardId),

    #[error("{0} is on the board and no operator is selected")]
    BoardCardWithoutOperator(CardId),

    #[error("neither binary operand is on the board")]
    NoBoardOperandForBinary,

    #[error("{0} is on the board but the first binary operand must come from hand or stock")]
    StaleSelectionOnBoardFirstClick(CardId),

    #[error("{0} was picked as both binary operands")]
    SameOperandTwice(CardId),

    #[error("{0} is neither in the hand nor the stocked card")]
    NotInHand(CardId),

    #[error("the stock is empty")]
    EmptyStock,

    #[error("the result has a part outside the 32-bit coefficient range")]
    ArithmeticOverflow,
}

/// A change to the stock slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockChange {
    /// A hand card moved into the empty stock.
    Stocked(CardId),
    /// The stocked card was toggled back to the end of the hand.
    Unstocked(CardId),
    /// `stocked` replaced `returned`, which went to the end of the hand.
    Swapped { stocked: CardId, returned: CardId },
    /// The stocked card was placed back at the end of the hand.
    PlacedBack(CardId),
}

/// What an inbound call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// An operator card became the active operator.
    OperatorSelected(CardId),
    /// The target list changed; holds the new list.
    TargetsChanged(SmallVec<[CardId; 2]>),
    /// An operator was applied to the board.
    Applied(Application),
    /// The hand was replaced by a fresh batch.
    HandRedrawn,
    Stock(StockChange),
    GameReset,
    /// Nothing changed.
    Ignored(Rejection),
    /// Only the selection was reset.
    Cleared(Rejection),
}

impl Outcome {
    /// The rejection reason, for `Ignored` and `Cleared`.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Ignored(r) | Outcome::Cleared(r) => Some(*r),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    #[must_use]
    pub fn application(&self) -> Option<&Application> {
        match self {
            Outcome::Applied(app) => Some(app),
            _ => None,
        }
    }
}
