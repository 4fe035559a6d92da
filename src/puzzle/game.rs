//! The puzzle facade.
//!
//! [`Puzzle`] owns one [`GameState`] and exposes the five inbound calls the
//! rendering layer uses. Every call is logged to the state's input log and
//! runs to completion before returning, so a caller always observes whole
//! transitions.

use im::Vector;
use tracing::info;

use super::snapshot::Snapshot;
use crate::cards::{Card, CardFace, ComplexCard};
use crate::core::action::{Input, InputRecord};
use crate::core::config::{ConfigError, PuzzleConfig};
use crate::core::entity::CardId;
use crate::core::state::{GameState, Selection};
use crate::ops::Gaussian;
use crate::rules::{self, Move, Outcome, Preview};

/// A single puzzle game.
#[derive(Clone, Debug)]
pub struct Puzzle {
    state: GameState,
    /// How the game was built, presets included.
    setup: PuzzleBuilder,
    seed: u64,
}

impl Puzzle {
    /// Start a game with the given configuration and seed.
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self, ConfigError> {
        PuzzleBuilder::new().config(config).build(seed)
    }

    /// Rebuild a randomly dealt game by feeding `inputs` to a fresh game.
    ///
    /// Same configuration, seed and inputs always give the same state. A game
    /// started from a [`PuzzleBuilder`] with a preset board or hand replays
    /// through [`PuzzleBuilder::replay`] or [`Puzzle::rebuild`] instead.
    pub fn replay(
        config: PuzzleConfig,
        seed: u64,
        inputs: impl IntoIterator<Item = Input>,
    ) -> Result<Self, ConfigError> {
        PuzzleBuilder::new().config(config).replay(seed, inputs)
    }

    /// Replay this game's input log from its original setup.
    ///
    /// A fork rebuilds along its origin's RNG stream, so cards dealt after
    /// the fork point may differ from the fork's own.
    pub fn rebuild(&self) -> Result<Self, ConfigError> {
        self.setup.clone().replay(self.seed, self.inputs())
    }

    // === Inbound Calls ===

    pub fn select_card(&mut self, id: CardId) -> Outcome {
        self.apply(Input::SelectCard(id))
    }

    pub fn toggle_stock_from_hand(&mut self, id: CardId) -> Outcome {
        self.apply(Input::ToggleStockFromHand(id))
    }

    pub fn draw_next_batch(&mut self) -> Outcome {
        self.apply(Input::DrawNextBatch)
    }

    pub fn place_stock_back(&mut self) -> Outcome {
        self.apply(Input::PlaceStockBack)
    }

    pub fn reset_game(&mut self) -> Outcome {
        self.apply(Input::ResetGame)
    }

    /// Process one input and append it to the input log.
    pub fn apply(&mut self, input: Input) -> Outcome {
        let state = &mut self.state;
        let outcome = match input {
            Input::SelectCard(id) => rules::select_card(state, id),
            Input::ToggleStockFromHand(id) => rules::toggle_stock_from_hand(state, id),
            Input::DrawNextBatch => rules::draw_next_batch(state),
            Input::PlaceStockBack => rules::place_stock_back(state),
            Input::ResetGame => {
                state.deal();
                info!(board = state.board.len(), "game reset");
                Outcome::GameReset
            }
        };

        let sequence = u32::try_from(state.history.len()).unwrap_or(u32::MAX);
        let moves = state.counters.moves;
        state.history.push_back(InputRecord::new(sequence, input, moves));
        outcome
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        self.state.config()
    }

    /// The seed the game was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Vector<ComplexCard> {
        &self.state.board
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.state.hand
    }

    #[must_use]
    pub fn stock(&self) -> Option<Card> {
        self.state.stock
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.counters.moves
    }

    #[must_use]
    pub fn total_removed(&self) -> u32 {
        self.state.counters.total_removed
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Every input processed so far, including ones that changed nothing.
    #[must_use]
    pub fn history(&self) -> &Vector<InputRecord> {
        &self.state.history
    }

    /// The inputs alone, suitable for [`Puzzle::replay`] or
    /// [`PuzzleBuilder::replay`].
    #[must_use]
    pub fn inputs(&self) -> Vec<Input> {
        self.state.history.iter().map(|r| r.input).collect()
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.state)
    }

    #[must_use]
    pub fn preview(&self, mv: &Move) -> Option<Preview> {
        rules::preview(&self.state, mv)
    }

    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        rules::hint(&self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Independent copy for look-ahead, with a forked RNG.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            state: self.state.clone_state(),
            setup: self.setup.clone(),
            seed: self.seed,
        }
    }
}

/// Builder for creating a [`Puzzle`].
///
/// A preset board or hand replaces the dealt one. Presets only apply to the
/// first deal; `reset_game` always deals randomly.
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    config: PuzzleConfig,
    board: Option<Vec<Gaussian>>,
    hand: Option<Vec<CardFace>>,
}

impl PuzzleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: PuzzleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn board(mut self, values: &[Gaussian]) -> Self {
        self.board = Some(values.to_vec());
        self
    }

    #[must_use]
    pub fn hand(mut self, faces: &[CardFace]) -> Self {
        self.hand = Some(faces.to_vec());
        self
    }

    /// Build the puzzle.
    pub fn build(self, seed: u64) -> Result<Puzzle, ConfigError> {
        let mut state = GameState::new(self.config.clone(), seed)?;
        if let Some(values) = &self.board {
            state.set_board(values);
        }
        if let Some(faces) = &self.hand {
            state.set_hand(faces);
        }
        Ok(Puzzle {
            state,
            setup: self,
            seed,
        })
    }

    /// Build the puzzle and feed it `inputs`.
    ///
    /// Presets are applied before the first input, exactly as in the
    /// recorded game.
    pub fn replay(
        self,
        seed: u64,
        inputs: impl IntoIterator<Item = Input>,
    ) -> Result<Puzzle, ConfigError> {
        let mut puzzle = self.build(seed)?;
        for input in inputs {
            puzzle.apply(input);
        }
        Ok(puzzle)
    }
}
