//! Game configuration.
//!
//! A session is configured at startup: number of rounds, die size, the
//! per-turn effect-chain limit, and the board-edge policy. The engine never
//! hardcodes these — variants of the game change the config, not the code.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// What happens when a move points past the win tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvershootPolicy {
    /// Land on the win tile instead. This is how the game is usually played:
    /// overshooting the goal still wins.
    #[default]
    ClampToWin,
    /// Treat the move as an error (`OutOfBounds`).
    Reject,
}

/// Complete session configuration.
///
/// ## Example
///
/// ```
/// use sipboard::core::{GameConfig, OvershootPolicy};
///
/// let config = GameConfig::new()
///     .with_rounds(3)
///     .with_overshoot_policy(OvershootPolicy::Reject);
///
/// assert_eq!(config.rounds, 3);
/// assert_eq!(config.die_sides, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds to play before the game ends without a winner.
    pub rounds: u32,

    /// Sides of the die rolled each turn.
    pub die_sides: u8,

    /// Maximum tile-effect applications within one scheduled turn.
    ///
    /// Chained moves and extra turns all draw from this budget, which bounds
    /// the otherwise unbounded recursion of move chains and roll-again loops.
    pub max_chain_depth: usize,

    /// Board-edge policy for moves past the win tile.
    pub overshoot: OvershootPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            die_sides: 6,
            max_chain_depth: 32,
            overshoot: OvershootPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the die size.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        self.die_sides = sides;
        self
    }

    /// Set the per-turn effect-chain limit.
    #[must_use]
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// Set the board-edge policy.
    #[must_use]
    pub fn with_overshoot_policy(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Fail fast on malformed configurations.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when the die has fewer than two sides or the
    /// chain limit is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.die_sides < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "a {}-sided die cannot be rolled",
                self.die_sides
            )));
        }
        if self.max_chain_depth == 0 {
            return Err(GameError::InvalidConfiguration(
                "max_chain_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
