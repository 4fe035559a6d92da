//! Core engine types: card ids, RNG, configuration, inputs, state.
//!
//! This module holds the data the rules operate on. It makes no rule
//! decisions beyond dealing a fresh game.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{CardId, IdAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, HandComposition, PuzzleConfig};
pub use action::{Input, InputRecord};
pub use state::{Counters, GameState, Location, Selection};
