//! Hand redraws and the single stock slot.
//!
//! The stock holds at most one card taken from the hand and survives
//! redraws. Hand size plus the stock slot always equals the configured hand
//! size: when the stock is occupied, a redraw drops one card of the stocked
//! card's kind from the fresh batch, so hand and stock together keep the
//! configured composition.

use tracing::debug;

use super::outcome::{Outcome, Rejection, StockChange};
use crate::core::entity::CardId;
use crate::core::state::GameState;

/// Replace the whole hand with a fresh batch.
///
/// Unused hand cards are discarded. Stock and selection are untouched.
pub fn redraw_hand(state: &mut GameState) {
    let mut batch = state.next_hand_batch();
    if let Some(stocked) = state.stock {
        if let Some(pos) = batch.iter().rposition(|c| c.kind() == stocked.kind()) {
            batch.remove(pos);
        } else {
            batch.pop();
        }
    }
    state.hand = batch.into_iter().collect();
}

/// Discard the hand, draw a fresh batch and clear the selection.
pub fn draw_next_batch(state: &mut GameState) -> Outcome {
    redraw_hand(state);
    state.selection.clear();
    debug!(hand = state.hand.len(), "drew next batch");
    Outcome::HandRedrawn
}

/// Move a hand card into the stock, take the stocked card back, or swap.
///
/// - `id` is the stocked card: it goes to the end of the hand.
/// - the stock is empty: `id` leaves the hand and is stocked.
/// - the stock holds another card: `id` is stocked and the old stock card
///   goes to the end of the hand.
///
/// Clears the selection whenever the stock changes.
pub fn toggle_stock_from_hand(state: &mut GameState, id: CardId) -> Outcome {
    if let Some(stocked) = state.stock.filter(|c| c.id() == id) {
        state.hand.push_back(stocked);
        state.stock = None;
        state.selection.clear();
        debug!(card = %id, "unstocked");
        return Outcome::Stock(StockChange::Unstocked(id));
    }

    let Some(idx) = state.hand_index(id) else {
        debug!(card = %id, "stock toggle ignored");
        return Outcome::Ignored(Rejection::NotInHand(id));
    };

    let card = state.hand.remove(idx);
    let change = match state.stock.replace(card) {
        None => StockChange::Stocked(id),
        Some(previous) => {
            state.hand.push_back(previous);
            StockChange::Swapped {
                stocked: id,
                returned: previous.id(),
            }
        }
    };
    state.selection.clear();
    debug!(?change, "stock changed");
    Outcome::Stock(change)
}

/// Return the stocked card to the end of the hand.
pub fn place_stock_back(state: &mut GameState) -> Outcome {
    let Some(card) = state.stock.take() else {
        return Outcome::Ignored(Rejection::EmptyStock);
    };
    state.hand.push_back(card);
    debug!(card = %card.id(), "placed stock back");
    Outcome::Stock(StockChange::PlacedBack(card.id()))
}
