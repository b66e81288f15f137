//! Error taxonomy for the game engine.
//!
//! Every failure mode is a variant of [`GameError`]. There are no retries
//! anywhere in the engine: all operations are deterministic given their
//! random inputs, so an error always indicates a gap in the rule table,
//! a bad configuration, or an engine invariant violation.

use thiserror::Error;

use super::player::PlayerId;

/// Closed set of engine failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A tile whose rule is not modeled was triggered.
    ///
    /// Not recoverable: the rule table needs the tile implemented, this is
    /// not a runtime bug.
    #[error("tile '{label}' is not implemented: {reason}")]
    NotImplemented { label: String, reason: String },

    /// A tile, player, or game configuration failed fast at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A single scheduled turn applied more tile effects than the
    /// configured limit allows.
    ///
    /// Chained moves and repeated extra turns can form closed loops on the
    /// board; the per-turn budget turns such loops into this error instead
    /// of unbounded recursion.
    #[error("effect chain exceeded the limit of {limit} tile applications")]
    ChainLimitExceeded { limit: usize },

    /// A tile effect was applied after the winner was already decided.
    ///
    /// Indicates the turn engine failed to stop the game.
    #[error("game is over: {winner} already won")]
    GameOver { winner: PlayerId },

    /// A move pointed outside the board under the `Reject` overshoot policy.
    #[error("position {position} is outside the board of {len} tiles")]
    OutOfBounds { position: usize, len: usize },
}
