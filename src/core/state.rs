//! Game state: board, hand, stock, selection, counters.
//!
//! ## GameState
//!
//! Everything a single game needs:
//! - Board of non-real complex cards (index-stable on in-place replace)
//! - Hand and the single stock slot
//! - Active selection (operator + up to two target ids)
//! - Move and removal counters, the latched `game_over` flag
//! - Card factory, id allocator and RNG
//! - Input log
//!
//! Board, hand and log use `im` persistent vectors so look-ahead copies
//! (`clone_state`) are cheap.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::InputRecord;
use super::config::{ConfigError, PuzzleConfig};
use super::entity::{CardId, IdAllocator};
use super::rng::GameRng;
use crate::cards::{Card, CardFace, CardFactory, ComplexCard, Operator};
use crate::ops::Gaussian;

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Board slot index.
    Board(usize),
    /// Hand slot index.
    Hand(usize),
    Stock,
}

/// The operator and operands picked so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Active operator card, if any.
    pub operator: Option<Operator>,

    /// Picked operand ids, oldest first.
    pub targets: SmallVec<[CardId; 2]>,
}

impl Selection {
    /// Drop the operator and all targets.
    pub fn clear(&mut self) {
        self.operator = None;
        self.targets.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operator.is_none() && self.targets.is_empty()
    }

    /// Set the operator, discarding any partial selection.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = Some(operator);
        self.targets.clear();
    }

    /// Toggle `id` in or out of the targets, keeping at most `cap` of the
    /// most recently toggled ids.
    pub fn toggle_target(&mut self, id: CardId, cap: usize) {
        if let Some(pos) = self.targets.iter().position(|&t| t == id) {
            self.targets.remove(pos);
            return;
        }
        self.targets.push(id);
        while self.targets.len() > cap {
            self.targets.remove(0);
        }
    }
}

/// Progress counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Applied operations.
    pub moves: u32,
    /// Board cards removed so far.
    pub total_removed: u32,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Cards left to eliminate.
    pub board: Vector<ComplexCard>,

    /// Cards available for selection.
    pub hand: Vector<Card>,

    /// Single holding slot, exempt from redraws.
    pub stock: Option<Card>,

    pub selection: Selection,

    pub counters: Counters,

    /// Set once the board empties. Only a reset clears it.
    pub game_over: bool,

    /// Accepted inputs in order.
    pub history: Vector<InputRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,

    config: PuzzleConfig,
    factory: CardFactory,
    ids: IdAllocator,
}

impl GameState {
    /// Create a game and deal the initial board and hand.
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self, ConfigError> {
        let factory = CardFactory::new(&config)?;
        let mut state = Self {
            board: Vector::new(),
            hand: Vector::new(),
            stock: None,
            selection: Selection::default(),
            counters: Counters::default(),
            game_over: false,
            history: Vector::new(),
            rng: GameRng::new(seed),
            config,
            factory,
            ids: IdAllocator::new(),
        };
        state.deal();
        Ok(state)
    }

    /// Discard everything and deal a fresh game from the current RNG.
    ///
    /// The id allocator and input log carry on.
    pub fn deal(&mut self) {
        self.board = self
            .factory
            .generate_initial_board(&mut self.rng, &mut self.ids)
            .into_iter()
            .collect();
        self.hand = self.next_hand_batch().into_iter().collect();
        self.stock = None;
        self.selection.clear();
        self.counters = Counters::default();
        self.game_over = false;
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    // === Card Generation ===

    /// Generate a full hand batch.
    pub fn next_hand_batch(&mut self) -> Vec<Card> {
        self.factory.generate_hand_batch(&mut self.rng, &mut self.ids)
    }

    /// A fresh complex card holding `value`.
    pub fn alloc_complex(&mut self, value: Gaussian) -> ComplexCard {
        ComplexCard::new(self.ids.alloc(), value)
    }

    /// A fresh card with the given face.
    pub fn alloc_card(&mut self, face: CardFace) -> Card {
        face.with_id(self.ids.alloc())
    }

    // === Lookup ===

    /// Find a card, searching hand, then board, then stock.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<(Card, Location)> {
        if let Some(i) = self.hand_index(id) {
            return Some((self.hand[i], Location::Hand(i)));
        }
        if let Some(i) = self.board_index(id) {
            return Some((Card::Complex(self.board[i]), Location::Board(i)));
        }
        match self.stock {
            Some(card) if card.id() == id => Some((card, Location::Stock)),
            _ => None,
        }
    }

    /// Find a complex card anywhere, returning its value.
    #[must_use]
    pub fn complex_value(&self, id: CardId) -> Option<Gaussian> {
        self.locate(id)
            .and_then(|(card, _)| card.as_complex().map(|c| c.value))
    }

    #[must_use]
    pub fn board_index(&self, id: CardId) -> Option<usize> {
        self.board.iter().position(|c| c.id == id)
    }

    #[must_use]
    pub fn hand_index(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id() == id)
    }

    #[must_use]
    pub fn is_on_board(&self, id: CardId) -> bool {
        self.board_index(id).is_some()
    }

    #[must_use]
    pub fn is_stocked(&self, id: CardId) -> bool {
        self.stock.map(|c| c.id()) == Some(id)
    }

    // === Invariants ===

    /// Hand size plus the stock slot.
    #[must_use]
    pub fn held_cards(&self) -> usize {
        self.hand.len() + usize::from(self.stock.is_some())
    }

    /// True when no id appears twice across board, hand and stock.
    #[must_use]
    pub fn ids_distinct(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.board
            .iter()
            .map(|c| c.id)
            .chain(self.hand.iter().map(Card::id))
            .chain(self.stock.iter().map(Card::id))
            .all(|id| seen.insert(id))
    }

    // === Setup ===

    /// Replace the board with fresh cards holding `values`.
    ///
    /// Returns the new ids in board order.
    pub fn set_board(&mut self, values: &[Gaussian]) -> Vec<CardId> {
        self.board = values.iter().map(|&v| self.alloc_complex(v)).collect();
        self.game_over = self.board.is_empty();
        self.board.iter().map(|c| c.id).collect()
    }

    /// Replace the hand with fresh cards holding `faces`.
    ///
    /// Returns the new ids in hand order.
    pub fn set_hand(&mut self, faces: &[CardFace]) -> Vec<CardId> {
        self.hand = faces.iter().map(|&f| self.alloc_card(f)).collect();
        self.selection.clear();
        self.hand.iter().map(Card::id).collect()
    }

    // === Cloning ===

    /// Clone the game state for look-ahead.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            ..self.clone()
        }
    }
}
