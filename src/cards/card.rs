//! Card types.
//!
//! A [`Card`] is one of three immutable value objects:
//! - [`ComplexCard`]: a Gaussian integer operand
//! - [`BinaryOpCard`]: `add`, `sub` or `mul`, taking two operands
//! - [`UnaryOpCard`]: `conjugate`, `mulByI` or `mulByNegI`, taking one board operand
//!
//! Arithmetic never mutates a card. It produces a new `ComplexCard` with a
//! fresh id.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::ops::Gaussian;

/// Binary operator carried by a [`BinaryOpCard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 3] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul];

    /// Evaluate `left op right`, `None` on overflow.
    #[must_use]
    pub fn apply(self, left: Gaussian, right: Gaussian) -> Option<Gaussian> {
        match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Sub => left.checked_sub(right),
            BinaryOp::Mul => left.checked_mul(right),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }
}

/// Unary operator carried by a [`UnaryOpCard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Conjugate,
    MulByI,
    MulByNegI,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Conjugate, UnaryOp::MulByI, UnaryOp::MulByNegI];

    /// Evaluate the operator on `z`, `None` on overflow.
    #[must_use]
    pub fn apply(self, z: Gaussian) -> Option<Gaussian> {
        match self {
            UnaryOp::Conjugate => z.checked_conjugate(),
            UnaryOp::MulByI => z.checked_mul_by_i(1),
            UnaryOp::MulByNegI => z.checked_mul_by_i(-1),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Conjugate => "conj",
            UnaryOp::MulByI => "*i",
            UnaryOp::MulByNegI => "*-i",
        }
    }
}

/// A Gaussian-integer operand card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexCard {
    pub id: CardId,
    pub value: Gaussian,
}

impl ComplexCard {
    #[must_use]
    pub const fn new(id: CardId, value: Gaussian) -> Self {
        Self { id, value }
    }

    /// Real part.
    #[must_use]
    pub const fn a(&self) -> i32 {
        self.value.a
    }

    /// Imaginary part.
    #[must_use]
    pub const fn b(&self) -> i32 {
        self.value.b
    }

    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.value.is_real()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryOpCard {
    pub id: CardId,
    pub op: BinaryOp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnaryOpCard {
    pub id: CardId,
    pub op: UnaryOp,
}

/// Discriminant of a [`Card`], used for hand composition bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Complex,
    Binary,
    Unary,
}

/// Any card that can sit on the board, in the hand, or in the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Complex(ComplexCard),
    Binary(BinaryOpCard),
    Unary(UnaryOpCard),
}

impl Card {
    /// The card's unique id.
    #[must_use]
    pub const fn id(&self) -> CardId {
        match self {
            Card::Complex(c) => c.id,
            Card::Binary(c) => c.id,
            Card::Unary(c) => c.id,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Card::Complex(_) => CardKind::Complex,
            Card::Binary(_) => CardKind::Binary,
            Card::Unary(_) => CardKind::Unary,
        }
    }

    /// Operator cards are binary or unary.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        !matches!(self, Card::Complex(_))
    }

    /// Strip the id.
    #[must_use]
    pub const fn face(&self) -> CardFace {
        match self {
            Card::Complex(c) => CardFace::Complex(c.value),
            Card::Binary(c) => CardFace::Binary(c.op),
            Card::Unary(c) => CardFace::Unary(c.op),
        }
    }

    #[must_use]
    pub const fn as_complex(&self) -> Option<&ComplexCard> {
        match self {
            Card::Complex(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match *self {
            Card::Binary(c) => Some(Operator::Binary(c)),
            Card::Unary(c) => Some(Operator::Unary(c)),
            Card::Complex(_) => None,
        }
    }
}

/// An operator card, the only kind that can be the active operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operator {
    Binary(BinaryOpCard),
    Unary(UnaryOpCard),
}

impl Operator {
    #[must_use]
    pub const fn id(&self) -> CardId {
        match self {
            Operator::Binary(c) => c.id,
            Operator::Unary(c) => c.id,
        }
    }
}

impl From<Operator> for Card {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Binary(c) => Card::Binary(c),
            Operator::Unary(c) => Card::Unary(c),
        }
    }
}

/// The content of a card without its id.
///
/// Used to place specific cards into a game, e.g. when setting up a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Complex(Gaussian),
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl CardFace {
    /// Attach an id.
    #[must_use]
    pub const fn with_id(self, id: CardId) -> Card {
        match self {
            CardFace::Complex(value) => Card::Complex(ComplexCard::new(id, value)),
            CardFace::Binary(op) => Card::Binary(BinaryOpCard { id, op }),
            CardFace::Unary(op) => Card::Unary(UnaryOpCard { id, op }),
        }
    }
}

impl From<ComplexCard> for Card {
    fn from(card: ComplexCard) -> Self {
        Card::Complex(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Complex(c) => write!(f, "[{}] {}", c.id.0, c.value),
            Card::Binary(c) => write!(f, "[{}] {}", c.id.0, c.op.symbol()),
            Card::Unary(c) => write!(f, "[{}] {}", c.id.0, c.op.symbol()),
        }
    }
}
