//! Game rules: the selection state machine, deck and stock handling, win
//! detection and move enumeration.
//!
//! Every inbound call lands here and returns an [`Outcome`]. Arithmetic and
//! board mutation live in [`crate::ops`]; this module decides when to call
//! into it.

pub mod outcome;
pub mod selection;
pub mod deck;
pub mod win;
pub mod moves;

pub use outcome::{Outcome, Rejection, StockChange};
pub use selection::select_card;
pub use deck::{draw_next_batch, place_stock_back, redraw_hand, toggle_stock_from_hand};
pub use win::check_win;
pub use moves::{hint, legal_moves, preview, Move, Preview};
