//! The roster: all players in their fixed seating order.
//!
//! The seating order is established at creation and never changes; left and
//! right neighbors are adjacency in that order, wrapping at the ends. The
//! roster is passed explicitly to the turn engine and to target selection —
//! there is no global player list, so multiple games can coexist.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::player::{Player, PlayerId};

/// A set of selected players. Rosters are small, so this stays inline.
pub type TargetSet = SmallVec<[PlayerId; 8]>;

/// All players of one game, in seating order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from players in seating order.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when the roster is empty, larger than 255
    /// seats, or contains duplicate names.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "roster must have at least one player".to_string(),
            ));
        }
        if players.len() > 255 {
            return Err(GameError::InvalidConfiguration(
                "roster supports at most 255 players".to_string(),
            ));
        }

        let mut names: FxHashSet<&str> = FxHashSet::default();
        for player in &players {
            if !names.insert(player.name()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "duplicate player name '{}'",
                    player.name()
                )));
            }
        }

        Ok(Self { players })
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// A roster is never empty; this exists for the usual pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by seat.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a player by seat, mutably.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Iterate over all seat IDs in seating order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId)
    }

    /// Iterate over `(PlayerId, &Player)` pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// The seat to the left of `id`, wrapping around.
    #[must_use]
    pub fn left_of(&self, id: PlayerId) -> PlayerId {
        let len = self.players.len();
        PlayerId(((id.index() + len - 1) % len) as u8)
    }

    /// The seat to the right of `id`, wrapping around.
    #[must_use]
    pub fn right_of(&self, id: PlayerId) -> PlayerId {
        let len = self.players.len();
        PlayerId(((id.index() + 1) % len) as u8)
    }

    /// All players closest to the start plus all players closest to the
    /// goal, ties fully included, each seat at most once, in seating order.
    #[must_use]
    pub fn extremes(&self) -> TargetSet {
        let min = self.players.iter().map(Player::position).min();
        let max = self.players.iter().map(Player::position).max();
        let (Some(min), Some(max)) = (min, max) else {
            return TargetSet::new();
        };

        self.iter()
            .filter(|(_, p)| p.position() == min || p.position() == max)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::{PlayerBuilder, Sex};
    use crate::core::rng::GameRng;

    fn roster_of(count: u8) -> Roster {
        let mut rng = GameRng::new(42);
        let players = (0..count)
            .map(|i| {
                PlayerBuilder::new(format!("player-{i}"), Sex::Female)
                    .build(&mut rng)
                    .unwrap()
            })
            .collect();
        Roster::new(players).unwrap()
    }

    #[test]
    fn test_rejects_empty_roster() {
        let err = Roster::new(Vec::new()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut rng = GameRng::new(1);
        let players = vec![
            PlayerBuilder::new("Fritz", Sex::Male).build(&mut rng).unwrap(),
            PlayerBuilder::new("Fritz", Sex::Male).build(&mut rng).unwrap(),
        ];
        let err = Roster::new(players).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_neighbors_wrap() {
        let roster = roster_of(4);

        assert_eq!(roster.left_of(PlayerId::new(0)), PlayerId::new(3));
        assert_eq!(roster.right_of(PlayerId::new(0)), PlayerId::new(1));
        assert_eq!(roster.left_of(PlayerId::new(3)), PlayerId::new(2));
        assert_eq!(roster.right_of(PlayerId::new(3)), PlayerId::new(0));
    }

    #[test]
    fn test_neighbors_are_mutual_inverses_for_any_roster_size() {
        for count in 1..=8 {
            let roster = roster_of(count);
            for id in roster.player_ids() {
                assert_eq!(roster.left_of(roster.right_of(id)), id);
                assert_eq!(roster.right_of(roster.left_of(id)), id);
            }
        }
    }

    #[test]
    fn test_single_player_is_own_neighbor() {
        let roster = roster_of(1);
        let only = PlayerId::new(0);
        assert_eq!(roster.left_of(only), only);
        assert_eq!(roster.right_of(only), only);
    }

    #[test]
    fn test_extremes_includes_all_ties() {
        let mut roster = roster_of(4);
        let positions = [0, 5, 5, 3];
        for (id, pos) in roster.player_ids().collect::<Vec<_>>().into_iter().zip(positions) {
            roster.get_mut(id).set_position(pos);
        }

        let extremes = roster.extremes();
        assert_eq!(
            extremes.as_slice(),
            &[PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_extremes_with_everyone_level() {
        let roster = roster_of(3);

        // All at position 0: min == max, every seat exactly once.
        let extremes = roster.extremes();
        assert_eq!(extremes.len(), 3);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = roster_of(2);
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
