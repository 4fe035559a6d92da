//! End-to-end scenarios driven through the five inbound calls.

use gauss_cards::{
    BinaryOp, CardFace, CardId, Gaussian, Outcome, Puzzle, PuzzleBuilder, Rejection,
    StockChange, UnaryOp,
};

fn g(a: i32, b: i32) -> Gaussian {
    Gaussian::new(a, b)
}

fn hand_ids(puzzle: &Puzzle) -> Vec<CardId> {
    puzzle.hand().iter().map(|c| c.id()).collect()
}

/// Unary operator with a real result removes the card and wins.
#[test]
fn test_unary_real_result_wins() {
    let mut puzzle = PuzzleBuilder::new()
        .board(&[g(0, 3)])
        .hand(&[CardFace::Unary(UnaryOp::MulByI)])
        .build(1)
        .unwrap();
    let op = hand_ids(&puzzle)[0];
    let target = puzzle.board()[0].id;

    assert_eq!(puzzle.select_card(op), Outcome::OperatorSelected(op));
    let outcome = puzzle.select_card(target);

    let app = outcome.application().expect("operator should apply");
    assert_eq!(app.result.value, g(-3, 0));
    assert!(app.won);
    assert!(puzzle.board().is_empty());
    assert_eq!(puzzle.total_removed(), 1);
    assert_eq!(puzzle.moves(), 1);
    assert!(puzzle.is_game_over());
}

/// Binary operator with a hand constant first and a board card second.
#[test]
fn test_binary_hand_then_board_real_result() {
    let mut puzzle = PuzzleBuilder::new()
        .board(&[g(3, 2)])
        .hand(&[CardFace::Binary(BinaryOp::Add), CardFace::Complex(g(-3, -2))])
        .build(2)
        .unwrap();
    let ids = hand_ids(&puzzle);
    let (add, constant) = (ids[0], ids[1]);
    let target = puzzle.board()[0].id;

    puzzle.select_card(add);
    assert!(matches!(puzzle.select_card(constant), Outcome::TargetsChanged(_)));
    let outcome = puzzle.select_card(target);

    let app = outcome.application().expect("operator should apply");
    assert_eq!(app.operands.as_slice(), &[target, constant]);
    assert_eq!(app.result.value, g(0, 0));
    assert!(puzzle.board().is_empty());
    assert_eq!(puzzle.total_removed(), 1);
    assert_eq!(puzzle.moves(), 1);
    assert!(puzzle.is_game_over());
}

/// A board card as the first binary pick resets; the retry replaces in place.
#[test]
fn test_binary_board_first_resets_then_replaces() {
    let mut puzzle = PuzzleBuilder::new()
        .board(&[g(1, 1), g(2, 2)])
        .hand(&[CardFace::Binary(BinaryOp::Add), CardFace::Complex(g(1, 0))])
        .build(3)
        .unwrap();
    let ids = hand_ids(&puzzle);
    let (add, constant) = (ids[0], ids[1]);
    let first_board = puzzle.board()[0].id;

    puzzle.select_card(add);
    assert_eq!(
        puzzle.select_card(first_board),
        Outcome::Cleared(Rejection::StaleSelectionOnBoardFirstClick(first_board))
    );
    assert!(puzzle.selection().is_empty());
    assert_eq!(puzzle.moves(), 0);

    puzzle.select_card(add);
    puzzle.select_card(constant);
    let app = puzzle
        .select_card(first_board)
        .application()
        .cloned()
        .expect("operator should apply");

    assert_eq!(app.result.value, g(2, 1));
    assert_eq!(app.replaced_slot, Some(0));
    assert_eq!(puzzle.board().len(), 2);
    assert_eq!(puzzle.board()[0].value, g(2, 1));
    assert_eq!(puzzle.board()[1].value, g(2, 2));
    assert!(!puzzle.is_game_over());
}

/// Stock, swap, redraw, and use of a stocked operator.
#[test]
fn test_stock_survives_redraw_and_is_released_on_use() {
    let mut puzzle = Puzzle::new(Default::default(), 21).unwrap();
    let unary = puzzle
        .hand()
        .iter()
        .find(|c| matches!(c.face(), CardFace::Unary(_)))
        .map(|c| c.id())
        .unwrap();
    let other = puzzle.hand().iter().map(|c| c.id()).find(|&id| id != unary).unwrap();

    assert_eq!(
        puzzle.toggle_stock_from_hand(other),
        Outcome::Stock(StockChange::Stocked(other))
    );
    assert_eq!(
        puzzle.toggle_stock_from_hand(unary),
        Outcome::Stock(StockChange::Swapped { stocked: unary, returned: other })
    );
    assert_eq!(puzzle.hand().back().map(|c| c.id()), Some(other));

    assert_eq!(puzzle.draw_next_batch(), Outcome::HandRedrawn);
    assert_eq!(puzzle.stock().map(|c| c.id()), Some(unary));
    assert_eq!(puzzle.hand().len() + 1, 8);
    assert!(!hand_ids(&puzzle).contains(&other));

    let target = puzzle.board()[0].id;
    assert_eq!(puzzle.select_card(unary), Outcome::OperatorSelected(unary));
    assert!(puzzle.select_card(target).is_applied());

    assert_eq!(puzzle.stock(), None);
    assert_eq!(puzzle.hand().len(), 8);
    assert_eq!(puzzle.moves(), 1);
}

/// Invalid input never changes the board.
#[test]
fn test_invalid_inputs_are_absorbed() {
    let mut puzzle = Puzzle::new(Default::default(), 4).unwrap();
    let before = puzzle.snapshot();
    let board_card = puzzle.board()[0].id;

    assert_eq!(
        puzzle.select_card(board_card),
        Outcome::Ignored(Rejection::BoardCardWithoutOperator(board_card))
    );
    assert_eq!(
        puzzle.select_card(CardId(u32::MAX)),
        Outcome::Ignored(Rejection::UnknownCard(CardId(u32::MAX)))
    );
    assert_eq!(
        puzzle.toggle_stock_from_hand(board_card),
        Outcome::Ignored(Rejection::NotInHand(board_card))
    );
    assert_eq!(puzzle.place_stock_back(), Outcome::Ignored(Rejection::EmptyStock));

    assert_eq!(puzzle.snapshot(), before);
}

/// Game over stays latched until reset.
#[test]
fn test_game_over_latched_until_reset() {
    let mut puzzle = PuzzleBuilder::new()
        .board(&[g(0, 2)])
        .hand(&[CardFace::Unary(UnaryOp::MulByNegI)])
        .build(6)
        .unwrap();
    let op = hand_ids(&puzzle)[0];
    let target = puzzle.board()[0].id;
    puzzle.select_card(op);
    puzzle.select_card(target);
    assert!(puzzle.is_game_over());

    puzzle.draw_next_batch();
    let c = hand_ids(&puzzle)[0];
    puzzle.toggle_stock_from_hand(c);
    assert!(puzzle.is_game_over());

    puzzle.reset_game();
    assert!(!puzzle.is_game_over());
    assert_eq!(puzzle.board().len(), 6);
}
