//! Operation engine: Gaussian arithmetic and the board mutation policy.
//!
//! - [`Gaussian`]: pure arithmetic (add, sub, mul, conjugate, multiply by ±i)
//! - [`apply_unary`] / [`apply_binary`]: evaluate an operator on board
//!   operands and replace or remove board cards accordingly

pub mod gaussian;
pub mod apply;

pub use gaussian::Gaussian;
pub use apply::{apply_binary, apply_unary, evaluate, Application};
