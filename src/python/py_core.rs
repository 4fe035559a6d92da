//! Card, move and outcome bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardKind};
use crate::rules::{Move, Outcome};

/// Python wrapper for a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id().raw()
    }

    /// "complex", "binary" or "unary".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0.kind() {
            CardKind::Complex => "complex",
            CardKind::Binary => "binary",
            CardKind::Unary => "unary",
        }
    }

    /// `(a, b)` for complex cards, None for operators.
    #[getter]
    fn value(&self) -> Option<(i32, i32)> {
        self.0.as_complex().map(|c| (c.a(), c.b()))
    }

    /// Operator symbol, None for complex cards.
    #[getter]
    fn symbol(&self) -> Option<&'static str> {
        match self.0 {
            Card::Binary(op) => Some(op.op.symbol()),
            Card::Unary(op) => Some(op.op.symbol()),
            Card::Complex(_) => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id().raw())
    }
}

/// Python wrapper for a legal move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    #[getter]
    fn operator(&self) -> u32 {
        self.0.operator().raw()
    }

    /// Card ids to pass to `select_card`, in order.
    fn clicks(&self) -> Vec<u32> {
        self.0.clicks().iter().map(|id| id.raw()).collect()
    }

    fn __repr__(&self) -> String {
        format!("Move({:?})", self.clicks())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for the result of an inbound call.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub Outcome);

#[pymethods]
impl PyOutcome {
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Outcome::OperatorSelected(_) => "operator_selected",
            Outcome::TargetsChanged(_) => "targets_changed",
            Outcome::Applied(_) => "applied",
            Outcome::HandRedrawn => "hand_redrawn",
            Outcome::Stock(_) => "stock",
            Outcome::GameReset => "game_reset",
            Outcome::Ignored(_) => "ignored",
            Outcome::Cleared(_) => "cleared",
        }
    }

    /// Why the input was ignored or cleared the selection.
    #[getter]
    fn reason(&self) -> Option<String> {
        self.0.rejection().map(|r| r.to_string())
    }

    #[getter]
    fn applied(&self) -> bool {
        self.0.is_applied()
    }

    /// Result value of an applied operator.
    #[getter]
    fn result(&self) -> Option<(i32, i32)> {
        self.0.application().map(|app| (app.result.a(), app.result.b()))
    }

    fn __repr__(&self) -> String {
        format!("Outcome({:?})", self.0)
    }
}
