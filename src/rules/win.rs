//! Win detection.

use tracing::info;

use crate::core::state::GameState;

/// Latch `game_over` once the board is empty.
///
/// Returns `true` only on the call that sets the flag.
pub fn check_win(state: &mut GameState) -> bool {
    if !state.board.is_empty() || state.game_over {
        return false;
    }
    state.game_over = true;
    info!(
        moves = state.counters.moves,
        removed = state.counters.total_removed,
        "board cleared"
    );
    true
}
