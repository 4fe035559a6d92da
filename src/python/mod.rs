//! Python bindings for the gauss-cards puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import gauss_cards as gc
//!
//! puzzle = gc.Puzzle(seed=42)
//!
//! # Play the suggested move
//! move = puzzle.hint()
//! for card_id in move.clicks():
//!     outcome = puzzle.select_card(card_id)
//!
//! print(outcome.kind, puzzle.board_numpy())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_puzzle;

pub use py_core::*;
pub use py_puzzle::*;

/// gauss-cards: a Gaussian-integer card puzzle.
#[pymodule]
fn gauss_cards(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyOutcome>()?;
    m.add_class::<PyPuzzle>()?;
    Ok(())
}
