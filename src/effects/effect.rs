//! Effect specifications.
//!
//! Every tile carries one [`EffectSpec`] — the declarative base effect that
//! is applied to each player the tile targets. The spec is intentionally
//! small: sips to drink, an optional position change, and a strip flag.
//! Applying it (and chaining moves) is the resolver's job.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Sips a tile makes a target drink.
///
/// The roll-dependent variant is a tagged value rather than a stored
/// closure: it is resolved at apply time against the *target's* most recent
/// die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sips {
    /// A fixed number of sips. `Fixed(0)` means none.
    Fixed(u32),
    /// As many sips as the target's last die roll showed.
    LastRoll,
}

impl Default for Sips {
    fn default() -> Self {
        Sips::Fixed(0)
    }
}

impl Sips {
    /// Resolve the sip count against a target's last roll.
    ///
    /// A target that has never rolled drinks nothing from a roll-dependent
    /// tile.
    #[must_use]
    pub fn amount_for(self, last_roll: Option<u8>) -> u32 {
        match self {
            Sips::Fixed(n) => n,
            Sips::LastRoll => u32::from(last_roll.unwrap_or(0)),
        }
    }
}

/// A single position change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Move by a signed number of tiles from the current position.
    Relative(i32),
    /// Move to an exact board position.
    Absolute(usize),
}

/// Declarative base effect shared by all tile variants.
///
/// Application order for each target: sips, relative move, absolute move,
/// strip. Moves chain — the destination tile's effect triggers in turn.
///
/// ## Example
///
/// ```
/// use sipboard::effects::EffectSpec;
///
/// let spec = EffectSpec::sips(1).with_absolute_move(32);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    /// Sips each target drinks.
    pub sips: Sips,
    /// Relative position change, if any.
    pub move_rel: Option<i32>,
    /// Absolute position change, if any.
    pub move_abs: Option<usize>,
    /// Whether each target loses a clothing piece.
    pub strip: bool,
}

impl EffectSpec {
    /// An effect that does nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A fixed-sips effect.
    #[must_use]
    pub fn sips(count: u32) -> Self {
        Self {
            sips: Sips::Fixed(count),
            ..Self::default()
        }
    }

    /// An effect whose sip count equals the target's last die roll.
    #[must_use]
    pub fn sips_from_roll() -> Self {
        Self {
            sips: Sips::LastRoll,
            ..Self::default()
        }
    }

    /// Add a relative move (builder pattern).
    #[must_use]
    pub fn with_relative_move(mut self, delta: i32) -> Self {
        self.move_rel = Some(delta);
        self
    }

    /// Add an absolute move (builder pattern).
    #[must_use]
    pub fn with_absolute_move(mut self, position: usize) -> Self {
        self.move_abs = Some(position);
        self
    }

    /// Make the effect strip a clothing piece (builder pattern).
    #[must_use]
    pub fn with_strip(mut self) -> Self {
        self.strip = true;
        self
    }

    /// The moves this effect performs, in application order.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        self.move_rel
            .map(Move::Relative)
            .into_iter()
            .chain(self.move_abs.map(Move::Absolute))
    }

    /// Fail fast on contradictory specifications.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when both a relative and an absolute move are
    /// declared.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.move_rel.is_some() && self.move_abs.is_some() {
            return Err(GameError::InvalidConfiguration(
                "an effect cannot declare both a relative and an absolute move".to_string(),
            ));
        }
        Ok(())
    }
}
