//! Core engine types: players, roster, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks. Game variants
//! configure these via `GameConfig` rather than modifying the engine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod roster;

pub use config::{GameConfig, OvershootPolicy};
pub use error::GameError;
pub use player::{Player, PlayerBuilder, PlayerId, Sex, Siblings};
pub use rng::GameRng;
pub use roster::{Roster, TargetSet};
