//! Puzzle configuration.
//!
//! The rule constants (coefficient range, board size, hand composition) are
//! passed in as a `PuzzleConfig` instead of being embedded in the engine, so
//! variant rule sets need no engine changes. `PuzzleConfig::default()` is the
//! standard game: coefficients in `-5..=5`, six board cards, and a hand of
//! two binary, four complex and two unary cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cards of each kind in a freshly drawn hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandComposition {
    pub binary: usize,
    pub complex: usize,
    pub unary: usize,
}

impl HandComposition {
    /// Create a composition.
    #[must_use]
    pub const fn new(binary: usize, complex: usize, unary: usize) -> Self {
        Self {
            binary,
            complex,
            unary,
        }
    }

    /// Total hand size.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.binary + self.complex + self.unary
    }
}

impl Default for HandComposition {
    fn default() -> Self {
        Self::new(2, 4, 2)
    }
}

/// Invalid configuration, reported by [`PuzzleConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("empty coefficient range {min}..={max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("coefficient range has no non-zero value for board imaginary parts")]
    NoNonZeroImaginary,
    #[error("hand composition draws no cards")]
    EmptyHand,
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("target cap must be at least 1")]
    ZeroTargetCap,
}

/// Complete puzzle configuration, fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Smallest coefficient a generated card may carry.
    pub coeff_min: i32,

    /// Largest coefficient a generated card may carry (inclusive).
    pub coeff_max: i32,

    /// Number of non-real cards dealt to the board at setup.
    pub board_size: usize,

    /// Cards per hand batch.
    pub hand: HandComposition,

    /// How many complex cards may be pre-toggled without an operator.
    pub target_cap: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            coeff_min: -5,
            coeff_max: 5,
            board_size: 6,
            hand: HandComposition::default(),
            target_cap: 2,
        }
    }
}

impl PuzzleConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive coefficient range.
    #[must_use]
    pub fn with_coeff_range(mut self, min: i32, max: i32) -> Self {
        self.coeff_min = min;
        self.coeff_max = max;
        self
    }

    /// Set the initial board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the hand composition.
    #[must_use]
    pub fn with_hand(mut self, hand: HandComposition) -> Self {
        self.hand = hand;
        self
    }

    /// Every coefficient a complex card may carry, in ascending order.
    #[must_use]
    pub fn coefficients(&self) -> Vec<i32> {
        (self.coeff_min..=self.coeff_max).collect()
    }

    /// Coefficients allowed for the imaginary part of a board card.
    #[must_use]
    pub fn non_zero_coefficients(&self) -> Vec<i32> {
        (self.coeff_min..=self.coeff_max).filter(|&v| v != 0).collect()
    }

    /// Hand size after a draw.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.total()
    }

    /// Check the configuration can produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coeff_min > self.coeff_max {
            return Err(ConfigError::EmptyRange {
                min: self.coeff_min,
                max: self.coeff_max,
            });
        }
        if self.non_zero_coefficients().is_empty() {
            return Err(ConfigError::NoNonZeroImaginary);
        }
        if self.hand.total() == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.target_cap == 0 {
            return Err(ConfigError::ZeroTargetCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();

        assert_eq!(config.coefficients().len(), 11);
        assert_eq!(config.non_zero_coefficients().len(), 10);
        assert!(!config.non_zero_coefficients().contains(&0));
        assert_eq!(config.board_size, 6);
        assert_eq!(config.hand_size(), 8);
        assert_eq!(config.hand, HandComposition::new(2, 4, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PuzzleConfig::new()
            .with_coeff_range(-2, 3)
            .with_board_size(4)
            .with_hand(HandComposition::new(1, 2, 1));

        assert_eq!(config.coefficients(), vec![-2, -1, 0, 1, 2, 3]);
        assert_eq!(config.board_size, 4);
        assert_eq!(config.hand_size(), 4);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert_eq!(
            PuzzleConfig::new().with_coeff_range(3, 1).validate(),
            Err(ConfigError::EmptyRange { min: 3, max: 1 })
        );
        assert_eq!(
            PuzzleConfig::new().with_coeff_range(0, 0).validate(),
            Err(ConfigError::NoNonZeroImaginary)
        );
        assert_eq!(
            PuzzleConfig::new().with_hand(HandComposition::new(0, 0, 0)).validate(),
            Err(ConfigError::EmptyHand)
        );
        assert_eq!(
            PuzzleConfig::new().with_board_size(0).validate(),
            Err(ConfigError::EmptyBoard)
        );
    }

    #[test]
    fn test_config_serde() {
        let config = PuzzleConfig::new().with_board_size(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
