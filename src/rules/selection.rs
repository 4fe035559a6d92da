//! Selection state machine.
//!
//! Consumes one clicked card at a time. The card is looked up in the hand,
//! then the board, then the stock.
//!
//! 1. An operator card always becomes the active operator and clears the
//!    targets.
//! 2. With no operator, a hand or stock complex card is toggled in or out of
//!    the targets (the most recent `target_cap` are kept). Board cards are
//!    ignored.
//! 3. With a unary operator, a board card is the operand and the operator is
//!    applied at once. Anything else is ignored.
//! 4. With a binary operator:
//!    - no target yet and the card is off the board: it becomes the first
//!      operand;
//!    - one target and a different card: it is the second operand and the
//!      operator is applied;
//!    - otherwise (notably a board card as the first pick) the whole
//!      selection is reset.
//!
//! An operator whose result would overflow resets the selection and changes
//! nothing else.

use smallvec::SmallVec;
use tracing::debug;

use super::outcome::{Outcome, Rejection};
use crate::cards::Operator;
use crate::core::entity::CardId;
use crate::core::state::{GameState, Location};
use crate::ops::{apply_binary, apply_unary};

/// Handle a click on card `id`.
pub fn select_card(state: &mut GameState, id: CardId) -> Outcome {
    let Some((card, location)) = state.locate(id) else {
        return ignore(Rejection::UnknownCard(id));
    };

    if let Some(op) = card.as_operator() {
        state.selection.set_operator(op);
        return Outcome::OperatorSelected(id);
    }

    let on_board = matches!(location, Location::Board(_));
    let operator = state.selection.operator;

    match operator {
        None if on_board => ignore(Rejection::BoardCardWithoutOperator(id)),
        None => {
            let cap = state.config().target_cap;
            state.selection.toggle_target(id, cap);
            Outcome::TargetsChanged(state.selection.targets.clone())
        }
        Some(Operator::Unary(_)) if !on_board => ignore(Rejection::WrongKindForSlot(id)),
        Some(Operator::Unary(op)) => match apply_unary(state, op, id) {
            Ok(app) => Outcome::Applied(app),
            Err(reason @ Rejection::ArithmeticOverflow) => clear(state, reason),
            Err(reason) => ignore(reason),
        },
        Some(Operator::Binary(op)) => {
            let targets: SmallVec<[CardId; 2]> = state.selection.targets.clone();
            match targets.as_slice() {
                [] if !on_board => {
                    state.selection.targets.push(id);
                    Outcome::TargetsChanged(state.selection.targets.clone())
                }
                &[first] if first != id => match apply_binary(state, op, first, id) {
                    Ok(app) => Outcome::Applied(app),
                    Err(reason) => clear(state, reason),
                },
                &[_] => clear(state, Rejection::SameOperandTwice(id)),
                _ => clear(state, Rejection::StaleSelectionOnBoardFirstClick(id)),
            }
        }
    }
}

fn ignore(reason: Rejection) -> Outcome {
    debug!(%reason, "input ignored");
    Outcome::Ignored(reason)
}

fn clear(state: &mut GameState, reason: Rejection) -> Outcome {
    debug!(%reason, "selection reset");
    state.selection.clear();
    Outcome::Cleared(reason)
}
