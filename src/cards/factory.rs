//! Random card generation.
//!
//! `CardFactory` draws every coefficient and operator uniformly through the
//! game's [`GameRng`] and every id from the game's [`IdAllocator`], so two
//! games built from the same seed deal identical cards.
//!
//! ## Batches
//!
//! - `generate_hand_batch`: the configured composition (2 binary, 4 complex,
//!   2 unary by default), then a Fisher-Yates shuffle of the whole batch.
//! - `generate_initial_board`: `board_size` non-real complex cards in
//!   generation order.

use crate::core::config::{ConfigError, HandComposition, PuzzleConfig};
use crate::core::entity::IdAllocator;
use crate::core::rng::GameRng;
use crate::ops::Gaussian;

use super::card::{BinaryOp, BinaryOpCard, Card, ComplexCard, UnaryOp, UnaryOpCard};

/// Generates card instances for one game.
#[derive(Clone, Debug)]
pub struct CardFactory {
    /// Values for real parts and hand imaginary parts. Never empty.
    coefficients: Vec<i32>,
    /// Values for board imaginary parts. Never empty, never contains 0.
    non_zero: Vec<i32>,
    hand: HandComposition,
    board_size: usize,
}

impl CardFactory {
    /// Build a factory from a configuration, validating it first.
    pub fn new(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            coefficients: config.coefficients(),
            non_zero: config.non_zero_coefficients(),
            hand: config.hand,
            board_size: config.board_size,
        })
    }

    /// A complex card whose parts are uniform over the coefficient set.
    ///
    /// May be real.
    pub fn generate_complex(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> ComplexCard {
        let a = rng.pick(&self.coefficients);
        let b = rng.pick(&self.coefficients);
        ComplexCard::new(ids.alloc(), Gaussian::new(a, b))
    }

    /// A complex card with `b != 0`.
    pub fn generate_non_real_complex(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> ComplexCard {
        let a = rng.pick(&self.coefficients);
        let b = rng.pick(&self.non_zero);
        ComplexCard::new(ids.alloc(), Gaussian::new(a, b))
    }

    pub fn generate_binary(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> BinaryOpCard {
        let op = rng.pick(&BinaryOp::ALL);
        BinaryOpCard { id: ids.alloc(), op }
    }

    pub fn generate_unary(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> UnaryOpCard {
        let op = rng.pick(&UnaryOp::ALL);
        UnaryOpCard { id: ids.alloc(), op }
    }

    /// A shuffled hand with the exact configured composition.
    pub fn generate_hand_batch(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> Vec<Card> {
        let mut batch = Vec::with_capacity(self.hand.total());

        for _ in 0..self.hand.binary {
            batch.push(Card::Binary(self.generate_binary(rng, ids)));
        }
        for _ in 0..self.hand.complex {
            batch.push(Card::Complex(self.generate_complex(rng, ids)));
        }
        for _ in 0..self.hand.unary {
            batch.push(Card::Unary(self.generate_unary(rng, ids)));
        }

        rng.shuffle(&mut batch);
        batch
    }

    /// The starting board, in generation order.
    pub fn generate_initial_board(&self, rng: &mut GameRng, ids: &mut IdAllocator) -> Vec<ComplexCard> {
        (0..self.board_size)
            .map(|_| self.generate_non_real_complex(rng, ids))
            .collect()
    }
}
