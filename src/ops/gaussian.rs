//! Gaussian-integer arithmetic.
//!
//! A [`Gaussian`] is `a + b·i` with `i32` parts. Every operation returns a
//! new value, or `None` when a part of the result does not fit in an `i32`.
//! Results never wrap, so a value that overflows can never pass for real.
//! Cards built from results get fresh ids from the caller.

use serde::{Deserialize, Serialize};

/// A Gaussian integer `a + b·i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gaussian {
    /// Real part.
    pub a: i32,
    /// Imaginary part.
    pub b: i32,
}

impl Gaussian {
    #[must_use]
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// `(a1+a2, b1+b2)`
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.a.checked_add(rhs.a)?, self.b.checked_add(rhs.b)?))
    }

    /// `(a1-a2, b1-b2)`
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.a.checked_sub(rhs.a)?, self.b.checked_sub(rhs.b)?))
    }

    /// `(a1·a2 - b1·b2, a1·b2 + b1·a2)`
    ///
    /// Computed in `i128` and narrowed, so only the final parts must fit.
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (a1, b1) = (i128::from(self.a), i128::from(self.b));
        let (a2, b2) = (i128::from(rhs.a), i128::from(rhs.b));
        Some(Self::new(
            narrow(a1 * a2 - b1 * b2)?,
            narrow(a1 * b2 + b1 * a2)?,
        ))
    }

    /// `(a, -b)`
    #[must_use]
    pub fn checked_conjugate(self) -> Option<Self> {
        Some(Self::new(self.a, self.b.checked_neg()?))
    }

    /// Multiply by `sign·i`: `(-sign·b, sign·a)`.
    ///
    /// `sign` is `+1` for `i` and `-1` for `-i`.
    #[must_use]
    pub fn checked_mul_by_i(self, sign: i32) -> Option<Self> {
        let (a, b) = (i128::from(self.a), i128::from(self.b));
        let sign = i128::from(sign);
        Some(Self::new(narrow(-sign * b)?, narrow(sign * a)?))
    }

    /// A value is real when its imaginary part is zero.
    #[must_use]
    pub const fn is_real(self) -> bool {
        self.b == 0
    }
}

fn narrow(v: i128) -> Option<i32> {
    i32::try_from(v).ok()
}

impl std::fmt::Display for Gaussian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.a, self.b) {
            (a, 0) => write!(f, "{}", a),
            (0, b) => write!(f, "{}i", b),
            (a, b) if b < 0 => write!(f, "{}-{}i", a, b.unsigned_abs()),
            (a, b) => write!(f, "{}+{}i", a, b),
        }
    }
}

impl From<(i32, i32)> for Gaussian {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}
