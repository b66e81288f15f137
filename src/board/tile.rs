//! Tile definitions.
//!
//! A tile is a label (the printed tile number), a base [`EffectSpec`], and a
//! [`TileKind`] deciding who receives that effect. The kinds form a closed
//! set; the resolver dispatches on the tag in one place instead of spreading
//! behavior over subtypes.

use serde::{Deserialize, Serialize};

use crate::core::player::Sex;
use crate::core::GameError;
use crate::effects::{CrowdSpec, EffectSpec, NeighborSpec};

/// Parameters of a choose-a-player tile.
///
/// Player choice needs external input the engine does not model, so these
/// tiles always resolve to `NotImplemented`; the parameters document the
/// printed rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSpec {
    /// How many players the triggering player would choose.
    pub num_players: usize,
    /// Restriction on who may be chosen.
    pub only_sex: Option<Sex>,
}

impl ChoiceSpec {
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            only_sex: None,
        }
    }

    #[must_use]
    pub fn only_sex(mut self, sex: Sex) -> Self {
        self.only_sex = Some(sex);
        self
    }
}

/// How a tile selects the players its base effect is applied to, and what
/// happens beyond the base effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// No effect, empty target set.
    NoOp,
    /// The triggering player only.
    Solo,
    /// The triggering player and their seat neighbors.
    Neighbors(NeighborSpec),
    /// The whole roster, filtered or narrowed.
    Everybody(CrowdSpec),
    /// Same selection as `Everybody`; a distinct label for singing tiles.
    Sing(CrowdSpec),
    /// Base effect on the triggering player, then skip their next turn.
    SkipTurn,
    /// Base effect on the triggering player, then an immediate extra turn.
    RollAgain,
    /// A rule the engine does not model yet.
    Unimplemented { reason: String },
    /// Choose-a-player rule; always unimplemented.
    Choice(ChoiceSpec),
    /// The terminal tile. Reaching it wins the game.
    Win,
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    label: String,
    effect: EffectSpec,
    kind: TileKind,
}

impl Tile {
    /// A tile that does nothing.
    pub fn noop(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            effect: EffectSpec::none(),
            kind: TileKind::NoOp,
        }
    }

    /// A tile applying its effect to the triggering player only.
    pub fn solo(label: impl Into<String>, effect: EffectSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::Solo,
        }
    }

    /// A tile applying its effect to the triggering player and neighbors.
    pub fn neighbors(label: impl Into<String>, effect: EffectSpec, spec: NeighborSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::Neighbors(spec),
        }
    }

    /// A tile applying its effect to the selected crowd.
    pub fn everybody(label: impl Into<String>, effect: EffectSpec, spec: CrowdSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::Everybody(spec),
        }
    }

    /// A singing tile; selection is identical to [`Tile::everybody`].
    pub fn sing(label: impl Into<String>, effect: EffectSpec, spec: CrowdSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::Sing(spec),
        }
    }

    /// A tile that skips the triggering player's next turn.
    pub fn skip_turn(label: impl Into<String>, effect: EffectSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::SkipTurn,
        }
    }

    /// A tile granting the triggering player an immediate extra turn.
    pub fn roll_again(label: impl Into<String>, effect: EffectSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::RollAgain,
        }
    }

    /// A tile whose printed rule is not modeled.
    pub fn unimplemented(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            effect: EffectSpec::none(),
            kind: TileKind::Unimplemented {
                reason: reason.into(),
            },
        }
    }

    /// A choose-a-player tile.
    pub fn choice(label: impl Into<String>, effect: EffectSpec, spec: ChoiceSpec) -> Self {
        Self {
            label: label.into(),
            effect,
            kind: TileKind::Choice(spec),
        }
    }

    /// The terminal win tile.
    pub fn win(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            effect: EffectSpec::none(),
            kind: TileKind::Win,
        }
    }

    /// The printed tile number.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The base effect applied to each target.
    #[must_use]
    pub fn effect(&self) -> &EffectSpec {
        &self.effect
    }

    /// The selection/behavior tag.
    #[must_use]
    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Fail fast on contradictory tile declarations.
    pub fn validate(&self) -> Result<(), GameError> {
        self.effect.validate().map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "tile '{}' declares both a relative and an absolute move",
                self.label
            ))
        })
    }
}
