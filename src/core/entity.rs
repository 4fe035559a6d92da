//! Card identification.
//!
//! Every card (complex, binary operator, unary operator) carries a `CardId`
//! that is unique across board, hand and stock for the lifetime of a game.
//!
//! ## Allocation
//!
//! Ids come from a monotonically increasing `IdAllocator`. Ids are never
//! reused, not even across `reset_game`, so a stale id held by a caller can
//! never alias a newer card.
//!
//! ```
//! use gauss_cards::core::IdAllocator;
//!
//! let mut ids = IdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//! assert_ne!(a, b);
//! assert!(b.raw() > a.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Hands out fresh card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id the next `alloc` will return.
    #[must_use]
    pub fn peek(&self) -> CardId {
        CardId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.alloc(), CardId(0));
        assert_eq!(ids.alloc(), CardId(1));
        assert_eq!(ids.peek(), CardId(2));
        assert_eq!(ids.alloc(), CardId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
