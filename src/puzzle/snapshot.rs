//! Serializable view of a game for the rendering layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, ComplexCard};
use crate::core::entity::CardId;
use crate::core::state::GameState;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Vec<ComplexCard>,
    pub hand: Vec<Card>,
    pub stock: Option<Card>,
    pub selected_operator: Option<CardId>,
    pub selected_targets: SmallVec<[CardId; 2]>,
    pub moves: u32,
    pub total_removed: u32,
    pub game_over: bool,
}

impl Snapshot {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            board: state.board.iter().copied().collect(),
            hand: state.hand.iter().copied().collect(),
            stock: state.stock,
            selected_operator: state.selection.operator.map(|c| c.id()),
            selected_targets: state.selection.targets.clone(),
            moves: state.counters.moves,
            total_removed: state.counters.total_removed,
            game_over: state.game_over,
        }
    }
}
