//! Board mutation policy for applied operators.
//!
//! Both entry points follow the same shape: evaluate, count the move, then
//! either remove the board operand (real result) or replace its slot in
//! place (non-real result), re-check the win flag, release a stocked
//! operator, clear the selection and redraw the hand.
//!
//! An application whose result does not fit in `i32` parts is refused with
//! [`Rejection::ArithmeticOverflow`] before anything changes.
//!
//! A binary operator needs at least one operand on the board. The board
//! operand becomes `left` (the first operand wins when both are on the
//! board) and the other operand becomes `right`. A real result removes
//! `left`, and `right` too when it is also on the board. A non-real result
//! replaces `left` and removes a distinct board `right`. Hand and stock
//! operands are never consumed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::gaussian::Gaussian;
use crate::cards::{BinaryOpCard, Card, ComplexCard, UnaryOpCard};
use crate::core::entity::CardId;
use crate::core::state::GameState;
use crate::rules::outcome::Rejection;
use crate::rules::{deck, win};

/// What an applied operator did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// The operator card that was applied.
    pub operator: Card,

    /// Operands in evaluation order: the board operand first.
    pub operands: SmallVec<[CardId; 2]>,

    /// The computed card (fresh id). Only placed on the board when non-real.
    pub result: ComplexCard,

    /// Board slot that now holds `result`, if it was placed.
    pub replaced_slot: Option<usize>,

    /// Board cards removed by this application.
    pub removed: SmallVec<[CardId; 2]>,

    /// This application emptied the board.
    pub won: bool,
}

/// Apply a unary operator to a board card.
///
/// Fails without touching the state when `target` is not on the board or
/// the result overflows.
pub fn apply_unary(
    state: &mut GameState,
    op: UnaryOpCard,
    target: CardId,
) -> Result<Application, Rejection> {
    let idx = state
        .board_index(target)
        .ok_or(Rejection::WrongKindForSlot(target))?;
    let value = op
        .op
        .apply(state.board[idx].value)
        .ok_or(Rejection::ArithmeticOverflow)?;
    let result = state.alloc_complex(value);

    state.counters.moves = state.counters.moves.saturating_add(1);

    let mut removed: SmallVec<[CardId; 2]> = SmallVec::new();
    let mut replaced_slot = None;
    if value.is_real() {
        state.board.remove(idx);
        removed.push(target);
    } else {
        state.board.set(idx, result);
        replaced_slot = Some(idx);
    }
    count_removed(state, &removed);

    debug!(
        op = ?op.op,
        %target,
        result = %value,
        removed = removed.len(),
        "applied unary operator"
    );

    let won = win::check_win(state);
    finish(state, Card::Unary(op));

    Ok(Application {
        operator: Card::Unary(op),
        operands: SmallVec::from_slice(&[target]),
        result,
        replaced_slot,
        removed,
        won,
    })
}

/// Apply a binary operator to two operands, at least one on the board.
///
/// Fails without touching the state when neither operand is on the board,
/// an operand is not a complex card, or the result overflows. No move is
/// counted and the board and hand are untouched.
pub fn apply_binary(
    state: &mut GameState,
    op: BinaryOpCard,
    first: CardId,
    second: CardId,
) -> Result<Application, Rejection> {
    let (left, right) =
        order_operands(state, first, second).ok_or(Rejection::NoBoardOperandForBinary)?;
    let lv = state
        .complex_value(left)
        .ok_or(Rejection::WrongKindForSlot(left))?;
    let rv = state
        .complex_value(right)
        .ok_or(Rejection::WrongKindForSlot(right))?;
    let value = op.op.apply(lv, rv).ok_or(Rejection::ArithmeticOverflow)?;

    let result = state.alloc_complex(value);
    let right_on_board = right != left && state.is_on_board(right);

    state.counters.moves = state.counters.moves.saturating_add(1);

    let mut removed: SmallVec<[CardId; 2]> = SmallVec::new();
    let mut replaced_slot = None;
    if value.is_real() {
        removed.push(left);
        if right_on_board {
            removed.push(right);
        }
        state.board = state
            .board
            .iter()
            .filter(|c| !removed.contains(&c.id))
            .copied()
            .collect();
    } else {
        if let Some(idx) = state.board_index(left) {
            state.board.set(idx, result);
            replaced_slot = Some(idx);
        }
        if right_on_board {
            removed.push(right);
            if let Some(idx) = state.board_index(right) {
                state.board.remove(idx);
            }
        }
        // The slot index may shift when `right` sat before `left`.
        replaced_slot = replaced_slot.and_then(|_| state.board_index(result.id));
    }
    count_removed(state, &removed);

    debug!(
        op = ?op.op,
        %left,
        %right,
        result = %value,
        removed = removed.len(),
        "applied binary operator"
    );

    let won = win::check_win(state);
    finish(state, Card::Binary(op));

    Ok(Application {
        operator: Card::Binary(op),
        operands: SmallVec::from_slice(&[left, right]),
        result,
        replaced_slot,
        removed,
        won,
    })
}

/// Pick `(left, right)`: the board operand goes left, `first` preferred.
fn order_operands(state: &GameState, first: CardId, second: CardId) -> Option<(CardId, CardId)> {
    if state.is_on_board(first) {
        Some((first, second))
    } else if state.is_on_board(second) {
        Some((second, first))
    } else {
        None
    }
}

fn count_removed(state: &mut GameState, removed: &[CardId]) {
    let n = u32::try_from(removed.len()).unwrap_or(u32::MAX);
    state.counters.total_removed = state.counters.total_removed.saturating_add(n);
}

/// Common tail of every application.
fn finish(state: &mut GameState, operator: Card) {
    if state.is_stocked(operator.id()) {
        state.stock = None;
    }
    state.selection.clear();
    deck::redraw_hand(state);
}

/// Evaluate an operator without mutating anything.
///
/// Used by look-ahead: returns the result value and how many board cards
/// the application would remove, or `None` if applying it would fail.
#[must_use]
pub fn evaluate(
    state: &GameState,
    operator: &Card,
    operands: &[CardId],
) -> Option<(Gaussian, usize)> {
    match (operator, operands) {
        (Card::Unary(op), &[target]) => {
            let idx = state.board_index(target)?;
            let value = op.op.apply(state.board[idx].value)?;
            Some((value, usize::from(value.is_real())))
        }
        (Card::Binary(op), &[first, second]) => {
            let (left, right) = order_operands(state, first, second)?;
            let value = op
                .op
                .apply(state.complex_value(left)?, state.complex_value(right)?)?;
            let right_on_board = right != left && state.is_on_board(right);
            let removed = if value.is_real() {
                1 + usize::from(right_on_board)
            } else {
                usize::from(right_on_board)
            };
            Some((value, removed))
        }
        _ => None,
    }
}
