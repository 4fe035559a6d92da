//! Coefficient growth under repeated operations on a single board card.

use gauss_cards::rules::select_card;
use gauss_cards::{
    BinaryOp, CardFace, GameState, Gaussian, Outcome, PuzzleConfig, Rejection, UnaryOp,
};

fn narrow(re: i128, im: i128) -> Option<Gaussian> {
    Some(Gaussian::new(i32::try_from(re).ok()?, i32::try_from(im).ok()?))
}

/// Multiply by one operator then one constant from a fresh hand.
fn multiply_board_card(state: &mut GameState, factor: Gaussian) -> Outcome {
    let hand = state.set_hand(&[CardFace::Binary(BinaryOp::Mul), CardFace::Complex(factor)]);
    let target = state.board[0].id;
    assert_eq!(select_card(state, hand[0]), Outcome::OperatorSelected(hand[0]));
    assert!(matches!(select_card(state, hand[1]), Outcome::TargetsChanged(_)));
    select_card(state, target)
}

/// (5+4i)^n is never real, so the card stays on the board and grows until
/// the next product no longer fits.
#[test]
fn test_repeated_mul_grows_until_refused() {
    let mut state = GameState::new(PuzzleConfig::default(), 17).unwrap();
    state.set_board(&[Gaussian::new(5, 4)]);
    let (mut re, mut im) = (5_i128, 4_i128);
    let mut applied = 0;

    for _ in 0..40 {
        let outcome = multiply_board_card(&mut state, Gaussian::new(5, 4));
        let (next_re, next_im) = (re * 5 - im * 4, re * 4 + im * 5);

        match narrow(next_re, next_im) {
            Some(expected) => {
                let app = outcome.application().expect("product fits");
                assert_eq!(app.result.value, expected);
                assert!(app.removed.is_empty());
                assert_eq!(state.board.len(), 1);
                assert_eq!(state.board[0].value, expected);
                applied += 1;
                (re, im) = (next_re, next_im);
            }
            None => {
                assert_eq!(outcome, Outcome::Cleared(Rejection::ArithmeticOverflow));
                assert_eq!(Some(state.board[0].value), narrow(re, im));
                assert_eq!(state.counters.moves, applied);
                assert_eq!(state.counters.total_removed, 0);
                assert!(state.selection.is_empty());
                assert!(!state.game_over);
                assert!(applied > 5);
                return;
            }
        }
    }
    panic!("coefficients never left the 32-bit range");
}

/// A refused product leaves the game playable: a smaller move still applies.
#[test]
fn test_game_continues_after_refusal() {
    let mut state = GameState::new(PuzzleConfig::default(), 23).unwrap();
    state.set_board(&[Gaussian::new(i32::MAX - 1, 7)]);

    let refused = multiply_board_card(&mut state, Gaussian::new(2, 1));
    assert_eq!(refused, Outcome::Cleared(Rejection::ArithmeticOverflow));

    let hand = state.set_hand(&[CardFace::Unary(UnaryOp::Conjugate)]);
    let target = state.board[0].id;
    select_card(&mut state, hand[0]);
    let app = select_card(&mut state, target);

    assert_eq!(
        app.application().map(|a| a.result.value),
        Some(Gaussian::new(i32::MAX - 1, -7))
    );
    assert_eq!(state.counters.moves, 1);
}
