//! Invariants under arbitrary input sequences.
//!
//! Drives games with random clicks, stock toggles, redraws and resets, and
//! checks the state after every input.

use gauss_cards::{CardId, CardKind, GameState, Input, Puzzle, PuzzleConfig};
use proptest::prelude::*;

/// Turn an abstract `(kind, pick)` pair into a concrete input for `puzzle`.
///
/// `pick` indexes into every live card id plus one unknown id.
fn concrete_input(puzzle: &Puzzle, kind: u8, pick: usize) -> Input {
    let state = puzzle.state();
    let mut ids: Vec<CardId> = state
        .board
        .iter()
        .map(|c| c.id)
        .chain(state.hand.iter().map(|c| c.id()))
        .chain(state.stock.iter().map(|c| c.id()))
        .collect();
    ids.push(CardId(u32::MAX));
    let id = ids[pick % ids.len()];

    match kind {
        0..=5 => Input::SelectCard(id),
        6 | 7 => Input::ToggleStockFromHand(id),
        8 => Input::DrawNextBatch,
        9 => Input::PlaceStockBack,
        _ => Input::ResetGame,
    }
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.held_cards(), 8);
    prop_assert!(state.ids_distinct());
    prop_assert!(state.board.iter().all(|c| !c.is_real()));
    prop_assert_eq!(state.game_over, state.board.is_empty());
    prop_assert!(state.selection.targets.len() <= 2);

    let count = |kind: CardKind| {
        state
            .hand
            .iter()
            .chain(state.stock.iter())
            .filter(|c| c.kind() == kind)
            .count()
    };
    prop_assert_eq!(count(CardKind::Binary), 2);
    prop_assert_eq!(count(CardKind::Complex), 4);
    prop_assert_eq!(count(CardKind::Unary), 2);

    if let Some(op) = state.selection.operator {
        prop_assert!(state.locate(op.id()).is_some());
    }
    for &id in &state.selection.targets {
        prop_assert!(state.locate(id).is_some());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), script in prop::collection::vec((0u8..11, any::<usize>()), 1..120)) {
        let mut puzzle = Puzzle::new(PuzzleConfig::default(), seed).unwrap();
        check_invariants(puzzle.state())?;

        for (kind, pick) in script {
            let input = concrete_input(&puzzle, kind, pick);
            let moves_before = puzzle.moves();
            let removed_before = puzzle.total_removed();

            let outcome = puzzle.apply(input);

            check_invariants(puzzle.state())?;
            if input != Input::ResetGame {
                let delta = puzzle.moves() - moves_before;
                prop_assert_eq!(delta, u32::from(outcome.is_applied()));
                prop_assert!(puzzle.total_removed() >= removed_before);
                prop_assert!(puzzle.total_removed() <= 2 * puzzle.moves());
            }
        }
    }

    #[test]
    fn prop_replay_reproduces_game(seed in any::<u64>(), script in prop::collection::vec((0u8..11, any::<usize>()), 1..60)) {
        let mut puzzle = Puzzle::new(PuzzleConfig::default(), seed).unwrap();
        for (kind, pick) in script {
            let input = concrete_input(&puzzle, kind, pick);
            puzzle.apply(input);
        }

        let replayed = Puzzle::replay(PuzzleConfig::default(), seed, puzzle.inputs()).unwrap();

        prop_assert_eq!(replayed.snapshot(), puzzle.snapshot());
        prop_assert_eq!(replayed.history(), puzzle.history());
    }

    #[test]
    fn prop_hint_moves_apply(seed in any::<u64>()) {
        let mut puzzle = Puzzle::new(PuzzleConfig::default(), seed).unwrap();

        for _ in 0..30 {
            if puzzle.is_game_over() {
                break;
            }
            let Some(mv) = puzzle.hint() else {
                puzzle.draw_next_batch();
                continue;
            };
            let preview = puzzle.preview(&mv).unwrap();
            let before = puzzle.board().len();

            let mut last = None;
            for id in mv.clicks() {
                last = Some(puzzle.select_card(id));
            }

            let outcome = last.unwrap();
            let app = outcome.application().unwrap();
            prop_assert_eq!(app.result.value, preview.result);
            prop_assert_eq!(puzzle.board().len(), before - preview.removed);
        }
    }
}
