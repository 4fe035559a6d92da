//! Legal move enumeration, previews and hints.
//!
//! A [`Move`] is a complete operator + operand combination that the
//! selection state machine accepts and that changes the board, so moves
//! whose result would overflow are left out. Operators and off-board
//! operands may come from the hand or the stock.
//!
//! ```
//! use gauss_cards::core::{GameState, PuzzleConfig};
//! use gauss_cards::rules::legal_moves;
//!
//! let state = GameState::new(PuzzleConfig::default(), 42).unwrap();
//! let moves = legal_moves(&state);
//! assert!(!moves.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::entity::CardId;
use crate::core::state::GameState;
use crate::ops::apply::evaluate;
use crate::ops::Gaussian;

/// A complete operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Unary operator on a board card.
    Unary { operator: CardId, target: CardId },
    /// Binary operator; `first` is off the board, `second` on it.
    Binary {
        operator: CardId,
        first: CardId,
        second: CardId,
    },
}

impl Move {
    #[must_use]
    pub const fn operator(&self) -> CardId {
        match self {
            Move::Unary { operator, .. } | Move::Binary { operator, .. } => *operator,
        }
    }

    /// The `select_card` ids that perform this move from an idle selection.
    #[must_use]
    pub fn clicks(&self) -> SmallVec<[CardId; 3]> {
        match *self {
            Move::Unary { operator, target } => SmallVec::from_slice(&[operator, target]),
            Move::Binary {
                operator,
                first,
                second,
            } => SmallVec::from_slice(&[operator, first, second]),
        }
    }

    fn operands(&self) -> SmallVec<[CardId; 2]> {
        match *self {
            Move::Unary { target, .. } => SmallVec::from_slice(&[target]),
            Move::Binary { first, second, .. } => SmallVec::from_slice(&[first, second]),
        }
    }
}

/// What a move would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub result: Gaussian,
    /// Board cards the move would remove.
    pub removed: usize,
}

/// Every move available in `state`, operators in hand order then the stock.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let held = || state.hand.iter().chain(state.stock.iter());
    let constants: Vec<CardId> = held()
        .filter(|c| !c.is_operator())
        .map(Card::id)
        .collect();

    let mut moves = Vec::new();
    for card in held() {
        match card {
            Card::Unary(op) => {
                moves.extend(state.board.iter().map(|t| Move::Unary {
                    operator: op.id,
                    target: t.id,
                }));
            }
            Card::Binary(op) => {
                for &first in &constants {
                    moves.extend(state.board.iter().map(|t| Move::Binary {
                        operator: op.id,
                        first,
                        second: t.id,
                    }));
                }
            }
            Card::Complex(_) => {}
        }
    }
    moves.retain(|mv| preview(state, mv).is_some());
    moves
}

/// Evaluate `mv` without applying it.
#[must_use]
pub fn preview(state: &GameState, mv: &Move) -> Option<Preview> {
    let (operator, _) = state.locate(mv.operator())?;
    let (result, removed) = evaluate(state, &operator, &mv.operands())?;
    Some(Preview { result, removed })
}

/// The move that removes the most board cards, earliest on ties.
#[must_use]
pub fn hint(state: &GameState) -> Option<Move> {
    let mut best: Option<(Move, usize)> = None;
    for mv in legal_moves(state) {
        let Some(p) = preview(state, &mv) else {
            continue;
        };
        if best.map_or(true, |(_, removed)| p.removed > removed) {
            best = Some((mv, p.removed));
        }
    }
    best.map(|(mv, _)| mv)
}
