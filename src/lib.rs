//! # sipboard
//!
//! A turn-based drinking board game simulation engine: players roll a die,
//! move along a fixed linear board, and the tile they land on applies its
//! effect (drink, move again, lose a clothing piece, skip a turn) to a
//! tile-specific set of players.
//!
//! ## Design Principles
//!
//! 1. **Closed variant set**: tile behaviors are a tagged union dispatched
//!    in one place, not an open inheritance hierarchy.
//!
//! 2. **No hidden globals**: the roster is an explicit value passed to the
//!    engine and to target selection, so multiple games can coexist.
//!
//! 3. **Deterministic**: all randomness flows through a seeded RNG; the
//!    same seed replays the same game.
//!
//! 4. **Bounded chains**: moves chain into destination tiles and roll-again
//!    tiles nest whole turns, so every scheduled turn runs on a tile
//!    application budget instead of trusting the board to be loop-free.
//!
//! ## Modules
//!
//! - `core`: players, roster, RNG, configuration, errors
//! - `board`: tile variants and the standard 72-tile layout
//! - `effects`: effect specs, target selection, the effect resolver
//! - `engine`: the session loop and the typed event log
//!
//! ## Example
//!
//! ```
//! use sipboard::board::Board;
//! use sipboard::core::{GameConfig, GameRng, PlayerBuilder, Roster, Sex};
//! use sipboard::engine::GameSession;
//!
//! let mut rng = GameRng::new(42);
//! let roster = Roster::new(vec![
//!     PlayerBuilder::new("Fritz", Sex::Male).build(&mut rng).unwrap(),
//!     PlayerBuilder::new("Pauli", Sex::Female).build(&mut rng).unwrap(),
//!     PlayerBuilder::new("Hans", Sex::Male).build(&mut rng).unwrap(),
//! ])
//! .unwrap();
//!
//! let mut session =
//!     GameSession::new(Board::standard(), roster, GameConfig::new(), 42).unwrap();
//!
//! // The standard board still contains unimplemented rule tiles, so a run
//! // either completes or reports the gap it hit.
//! match session.play() {
//!     Ok(winner) => println!("winner: {winner:?}"),
//!     Err(err) => println!("game stopped: {err}"),
//! }
//!
//! for line in session.narration() {
//!     println!("{line}");
//! }
//! ```

pub mod board;
pub mod core;
pub mod effects;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, OvershootPolicy, Player, PlayerBuilder, PlayerId, Roster, Sex,
    Siblings, TargetSet,
};

pub use crate::board::{Board, ChoiceSpec, Tile, TileKind};

pub use crate::effects::{
    CrowdSpec, EffectResolver, EffectSpec, Move, NeighborSpec, Parity, PlayerPredicate, Sips,
};

pub use crate::engine::{GameEvent, GameSession, Standing};
