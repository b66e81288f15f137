//! The game session: the outer turn loop.
//!
//! A session owns the board, the roster, the RNG, and the event log, and
//! drives rounds of scheduled turns. Its contract towards the resolver: a
//! scheduled turn is exactly one die roll plus one resulting effect chain,
//! and the skip flag is checked and cleared exactly once per scheduled turn.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, Roster};
use crate::effects::{EffectResolver, Move};

use super::events::GameEvent;

/// Final state of one player, for reporting after the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub position: usize,
    pub sips_drunk: u32,
    pub clothing_pieces: u8,
    pub coins: u8,
}

/// A single game from setup to finish.
///
/// ## Example
///
/// ```
/// use sipboard::board::Board;
/// use sipboard::core::{GameConfig, GameRng, PlayerBuilder, Roster, Sex};
/// use sipboard::engine::GameSession;
///
/// let mut rng = GameRng::new(7);
/// let roster = Roster::new(vec![
///     PlayerBuilder::new("Fritz", Sex::Male).build(&mut rng).unwrap(),
///     PlayerBuilder::new("Pauli", Sex::Female).build(&mut rng).unwrap(),
/// ])
/// .unwrap();
///
/// let session = GameSession::new(Board::standard(), roster, GameConfig::new(), 7).unwrap();
/// assert!(session.winner().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    roster: Roster,
    rng: GameRng,
    config: GameConfig,
    events: Vec<GameEvent>,
    winner: Option<PlayerId>,
}

impl GameSession {
    /// Create a session.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when the config fails validation.
    pub fn new(
        board: Board,
        roster: Roster,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board,
            roster,
            rng: GameRng::new(seed),
            config,
            events: Vec::new(),
            winner: None,
        })
    }

    /// Play until a winner is found or the configured rounds run out.
    ///
    /// Returns the winner, if any. Errors from the effect chain (an
    /// unimplemented tile, an exhausted chain budget) abort the game.
    pub fn play(&mut self) -> Result<Option<PlayerId>, GameError> {
        for round in 1..=self.config.rounds {
            let seats: Vec<PlayerId> = self.roster.player_ids().collect();
            for player in seats {
                if self.roster.get_mut(player).take_skip() {
                    self.events.push(GameEvent::TurnSkipped { player });
                    continue;
                }
                self.take_turn(player)?;
                if self.winner.is_some() {
                    return Ok(self.winner);
                }
            }
            self.events.push(GameEvent::RoundFinished { round });
        }
        Ok(self.winner)
    }

    /// Execute one scheduled turn for a player.
    ///
    /// The skip flag is deliberately not consulted here; [`Self::play`]
    /// owns checking and clearing it.
    pub fn take_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.resolver().take_turn(player)
    }

    /// Move a player directly and apply the destination tile.
    pub fn move_player(&mut self, player: PlayerId, mv: Move) -> Result<(), GameError> {
        self.resolver().move_player(player, mv)
    }

    fn resolver(&mut self) -> EffectResolver<'_> {
        EffectResolver::new(
            &self.board,
            &mut self.roster,
            &mut self.rng,
            &self.config,
            &mut self.events,
            &mut self.winner,
        )
    }

    // === Observation ===

    /// The winner, once someone reached the goal.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Everything that happened so far, in order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The event log rendered as human-readable narration.
    #[must_use]
    pub fn narration(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| e.describe(&self.roster))
            .collect()
    }

    /// Final state of all players, in seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.roster
            .iter()
            .map(|(id, p)| Standing {
                player: id,
                name: p.name().to_string(),
                position: p.position(),
                sips_drunk: p.sips_drunk(),
                clothing_pieces: p.clothing_pieces(),
                coins: p.coins(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::core::{PlayerBuilder, Sex};
    use crate::effects::EffectSpec;

    fn roster(names: &[&str]) -> Roster {
        let mut rng = GameRng::new(42);
        Roster::new(
            names
                .iter()
                .map(|n| PlayerBuilder::new(*n, Sex::Male).build(&mut rng).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn tiny_board() -> Board {
        Board::new(vec![
            Tile::noop("START"),
            Tile::solo("1", EffectSpec::sips(1)),
            Tile::noop("2"),
            Tile::noop("3"),
            Tile::noop("4"),
            Tile::noop("5"),
            Tile::win("WIN"),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_validates_config() {
        let err = GameSession::new(
            tiny_board(),
            roster(&["Fritz"]),
            GameConfig::new().with_die_sides(0),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_short_game_finds_winner() {
        // On a 7-tile board every first roll of 6 lands on the win tile;
        // either way a few rounds are plenty.
        let mut session = GameSession::new(
            tiny_board(),
            roster(&["Fritz", "Pauli"]),
            GameConfig::new().with_rounds(50),
            3,
        )
        .unwrap();

        let winner = session.play().unwrap();
        assert!(winner.is_some());
        assert_eq!(winner, session.winner());
        assert!(session
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameWon { .. })));
    }

    #[test]
    fn test_game_is_deterministic_for_a_seed() {
        let run = |seed| {
            let mut session = GameSession::new(
                tiny_board(),
                roster(&["Fritz", "Pauli"]),
                GameConfig::new(),
                seed,
            )
            .unwrap();
            session.play().unwrap();
            session.events().to_vec()
        };

        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_skip_flag_consumed_exactly_once() {
        let mut session = GameSession::new(
            tiny_board(),
            roster(&["Fritz", "Pauli"]),
            GameConfig::new().with_rounds(1),
            5,
        )
        .unwrap();
        session
            .roster
            .get_mut(PlayerId::new(0))
            .schedule_skip();

        session.play().unwrap();

        let skips: Vec<_> = session
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::TurnSkipped { .. }))
            .collect();
        assert_eq!(skips.len(), 1);
        assert!(!session.roster().get(PlayerId::new(0)).must_skip_next_turn());

        // The skipped player never rolled in round 1.
        assert!(!session.events().iter().any(
            |e| matches!(e, GameEvent::Rolled { player, .. } if *player == PlayerId::new(0))
        ));
    }

    #[test]
    fn test_play_stops_after_winner() {
        let mut session = GameSession::new(
            tiny_board(),
            roster(&["Fritz"]),
            GameConfig::new().with_rounds(1000),
            9,
        )
        .unwrap();

        session.play().unwrap();

        // Nothing is recorded after the win event.
        let won_at = session
            .events()
            .iter()
            .position(|e| matches!(e, GameEvent::GameWon { .. }))
            .unwrap();
        assert_eq!(won_at, session.events().len() - 1);
    }

    #[test]
    fn test_standings_report_final_state() {
        let mut session = GameSession::new(
            tiny_board(),
            roster(&["Fritz", "Pauli"]),
            GameConfig::new().with_rounds(1),
            13,
        )
        .unwrap();
        session.play().unwrap();

        let standings = session.standings();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].name, "Fritz");
        assert_eq!(
            standings[0].position,
            session.roster().get(PlayerId::new(0)).position()
        );
    }

    #[test]
    fn test_narration_lines_match_events() {
        let mut session = GameSession::new(
            tiny_board(),
            roster(&["Fritz"]),
            GameConfig::new().with_rounds(1),
            2,
        )
        .unwrap();
        session.play().unwrap();

        let narration = session.narration();
        assert_eq!(narration.len(), session.events().len());
        assert!(narration[0].starts_with("Fritz rolled a "));
    }
}
