//! Target selection.
//!
//! Defines how tiles select the players their base effect is applied to:
//! - `PlayerPredicate`: filters over player identity attributes
//! - `NeighborSpec`: the triggering player and their seat neighbors
//! - `CrowdSpec`: the whole roster, filtered or narrowed to the positional
//!   extremes

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, Sex};
use crate::core::roster::{Roster, TargetSet};
use crate::core::PlayerId;

/// Age parity, used by the even/odd birthday rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

/// Filters for crowd targets, evaluated against player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPredicate {
    /// Target must be of the given sex.
    Sex(Sex),
    /// Target must have at least one brother.
    HasBrothers,
    /// Target must have at least one sister.
    HasSisters,
    /// Target's age must have the given parity.
    AgeParity(Parity),
    /// Target must be at most this old.
    MaxAge(u8),
    /// Target must own at most this many coins.
    MaxCoins(u8),
    /// Target must (or must not) wear glasses.
    Glasses(bool),
    /// Target must (or must not) wear jeans.
    Jeans(bool),
}

impl PlayerPredicate {
    /// Check whether a player passes this predicate.
    #[must_use]
    pub fn matches(&self, player: &Player) -> bool {
        match *self {
            PlayerPredicate::Sex(sex) => player.sex() == sex,
            PlayerPredicate::HasBrothers => player.siblings().has_brothers(),
            PlayerPredicate::HasSisters => player.siblings().has_sisters(),
            PlayerPredicate::AgeParity(Parity::Even) => player.age() % 2 == 0,
            PlayerPredicate::AgeParity(Parity::Odd) => player.age() % 2 == 1,
            PlayerPredicate::MaxAge(max) => player.age() <= max,
            PlayerPredicate::MaxCoins(max) => player.coins() <= max,
            PlayerPredicate::Glasses(wanted) => player.wears_glasses() == wanted,
            PlayerPredicate::Jeans(wanted) => player.wears_jeans() == wanted,
        }
    }
}

/// Neighbor-tile selection: the triggering player plus their left and right
/// seat neighbors, each independently excludable.
///
/// On tiny rosters the same seat can occupy several roles (a two-player
/// roster is each other's left *and* right neighbor); such a seat receives
/// the effect once per role it occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSpec {
    pub exclude_self: bool,
    pub exclude_left: bool,
    pub exclude_right: bool,
}

impl NeighborSpec {
    /// Include self and both neighbors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn excluding_self(mut self) -> Self {
        self.exclude_self = true;
        self
    }

    #[must_use]
    pub fn excluding_left(mut self) -> Self {
        self.exclude_left = true;
        self
    }

    #[must_use]
    pub fn excluding_right(mut self) -> Self {
        self.exclude_right = true;
        self
    }

    /// Select the targets for a trigger by `actor`.
    #[must_use]
    pub fn targets(&self, actor: PlayerId, roster: &Roster) -> TargetSet {
        let mut targets = TargetSet::new();
        if !self.exclude_self {
            targets.push(actor);
        }
        if !self.exclude_left {
            targets.push(roster.left_of(actor));
        }
        if !self.exclude_right {
            targets.push(roster.right_of(actor));
        }
        targets
    }
}

/// Crowd-tile selection: everybody, optionally without the triggering
/// player, optionally filtered by predicates or narrowed to the players
/// closest to start and goal (ties fully included).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdSpec {
    pub exclude_self: bool,
    pub closest_start_goal: bool,
    pub filters: Vec<PlayerPredicate>,
}

impl CrowdSpec {
    /// Include the whole roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn excluding_self(mut self) -> Self {
        self.exclude_self = true;
        self
    }

    /// Narrow the crowd to the positional extremes.
    #[must_use]
    pub fn closest_to_start_or_goal(mut self) -> Self {
        self.closest_start_goal = true;
        self
    }

    /// Add a filter (builder pattern).
    #[must_use]
    pub fn with_filter(mut self, filter: PlayerPredicate) -> Self {
        self.filters.push(filter);
        self
    }

    /// Select the targets for a trigger by `actor`, in seating order.
    #[must_use]
    pub fn targets(&self, actor: PlayerId, roster: &Roster) -> TargetSet {
        let pool: TargetSet = if self.closest_start_goal {
            roster.extremes()
        } else {
            roster.player_ids().collect()
        };

        pool.into_iter()
            .filter(|id| !(self.exclude_self && *id == actor))
            .filter(|id| {
                let player = roster.get(*id);
                self.filters.iter().all(|f| f.matches(player))
            })
            .collect()
    }
}
