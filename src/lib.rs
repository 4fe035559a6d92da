//! # gauss-cards
//!
//! A single-player puzzle engine over Gaussian integers.
//!
//! The board holds non-real complex cards. The player clears it by applying
//! operator cards from a rotating hand: a card whose value becomes purely
//! real leaves the board, and the game is won once the board is empty.
//!
//! ## Design Principles
//!
//! 1. **Input never fails**: every inbound call returns an [`Outcome`];
//!    illegal clicks are absorbed as ignored inputs or selection resets.
//!
//! 2. **Deterministic**: all randomness flows through one seeded
//!    [`GameRng`], and every input is logged, so a game replays exactly.
//!
//! 3. **Configuration Over Convention**: coefficient range, board size and
//!    hand composition come from [`PuzzleConfig`].
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: board, hand and input log are `im`
//!   vectors, so look-ahead copies are cheap.
//!
//! - **Single Actor**: each call runs to completion against `&mut` state.
//!   Hosts that share a game across threads wrap it in one mutex.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, inputs, state
//! - `cards`: Card types and the random card factory
//! - `ops`: Gaussian arithmetic and the board mutation policy
//! - `rules`: Selection state machine, deck and stock, win detection, moves
//! - `puzzle`: The game facade driven by the five inbound calls

pub mod core;
pub mod cards;
pub mod ops;
pub mod rules;
pub mod puzzle;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, IdAllocator,
    GameRng, GameRngState,
    ConfigError, HandComposition, PuzzleConfig,
    Input, InputRecord,
    Counters, GameState, Location, Selection,
};

pub use crate::cards::{
    BinaryOp, BinaryOpCard, Card, CardFace, CardKind, ComplexCard,
    Operator, UnaryOp, UnaryOpCard, CardFactory,
};

pub use crate::ops::{Application, Gaussian};

pub use crate::rules::{Move, Outcome, Preview, Rejection, StockChange};

pub use crate::puzzle::{Puzzle, PuzzleBuilder, Snapshot};
