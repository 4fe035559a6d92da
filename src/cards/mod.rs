//! Card types and random card generation.
//!
//! - [`Card`]: tagged union of complex, binary-operator and unary-operator cards
//! - [`CardFactory`]: seeded generation of single cards, hand batches and boards

pub mod card;
pub mod factory;

pub use card::{
    BinaryOp, BinaryOpCard, Card, CardFace, CardKind, ComplexCard, Operator, UnaryOp, UnaryOpCard,
};
pub use factory::CardFactory;
