//! Puzzle bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, PuzzleConfig};
use crate::puzzle::Puzzle;

use super::py_core::{PyCard, PyMove, PyOutcome};

/// Python wrapper for a puzzle game.
#[pyclass(name = "Puzzle")]
pub struct PyPuzzle {
    puzzle: Puzzle,
}

#[pymethods]
impl PyPuzzle {
    /// Create a new puzzle.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - coeff_min, coeff_max: inclusive coefficient range
    /// - board_size: number of starting board cards
    #[new]
    #[pyo3(signature = (seed = 42, coeff_min = -5, coeff_max = 5, board_size = 6))]
    fn new(seed: u64, coeff_min: i32, coeff_max: i32, board_size: usize) -> PyResult<Self> {
        let config = PuzzleConfig::new()
            .with_coeff_range(coeff_min, coeff_max)
            .with_board_size(board_size);
        let puzzle = Puzzle::new(config, seed).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { puzzle })
    }

    fn select_card(&mut self, id: u32) -> PyOutcome {
        PyOutcome(self.puzzle.select_card(CardId(id)))
    }

    fn toggle_stock_from_hand(&mut self, id: u32) -> PyOutcome {
        PyOutcome(self.puzzle.toggle_stock_from_hand(CardId(id)))
    }

    fn draw_next_batch(&mut self) -> PyOutcome {
        PyOutcome(self.puzzle.draw_next_batch())
    }

    fn place_stock_back(&mut self) -> PyOutcome {
        PyOutcome(self.puzzle.place_stock_back())
    }

    fn reset_game(&mut self) -> PyOutcome {
        PyOutcome(self.puzzle.reset_game())
    }

    #[getter]
    fn board(&self) -> Vec<PyCard> {
        self.puzzle.board().iter().map(|&c| PyCard(c.into())).collect()
    }

    #[getter]
    fn hand(&self) -> Vec<PyCard> {
        self.puzzle.hand().iter().map(|&c| PyCard(c)).collect()
    }

    #[getter]
    fn stock(&self) -> Option<PyCard> {
        self.puzzle.stock().map(PyCard)
    }

    #[getter]
    fn selected_operator(&self) -> Option<u32> {
        self.puzzle.selection().operator.map(|c| c.id().raw())
    }

    #[getter]
    fn selected_targets(&self) -> Vec<u32> {
        self.puzzle.selection().targets.iter().map(|id| id.raw()).collect()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.puzzle.moves()
    }

    #[getter]
    fn total_removed(&self) -> u32 {
        self.puzzle.total_removed()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.puzzle.is_game_over()
    }

    fn legal_moves(&self) -> Vec<PyMove> {
        self.puzzle.legal_moves().into_iter().map(PyMove).collect()
    }

    fn hint(&self) -> Option<PyMove> {
        self.puzzle.hint().map(PyMove)
    }

    /// Board values as a flat `[a0, b0, a1, b1, ...]` array.
    fn board_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        let flat: Vec<i32> = self
            .puzzle
            .board()
            .iter()
            .flat_map(|c| [c.a(), c.b()])
            .collect();
        PyArray1::from_vec_bound(py, flat)
    }

    /// Copy the game for look-ahead.
    fn copy(&mut self) -> Self {
        Self {
            puzzle: self.puzzle.fork(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Puzzle(board={}, hand={}, moves={}, game_over={})",
            self.puzzle.board().len(),
            self.puzzle.hand().len(),
            self.puzzle.moves(),
            self.puzzle.is_game_over()
        )
    }
}
