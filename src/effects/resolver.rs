//! Effect resolution - applying tile effects to the roster.
//!
//! The resolver drives one scheduled turn: the die roll, the resulting
//! move, and the whole chain of tile effects it triggers. Dispatch over the
//! tile variants happens in exactly one place, [`EffectResolver::apply_tile`].
//!
//! ## Chain guard
//!
//! Moves chain (a tile that moves you triggers the destination tile) and
//! roll-again tiles start whole nested turns, so a board can contain closed
//! loops. Every tile application within one scheduled turn draws from a
//! single budget; exhausting it yields `ChainLimitExceeded` instead of
//! recursing forever.

use crate::board::{Board, TileKind};
use crate::core::{GameConfig, GameError, GameRng, OvershootPolicy, PlayerId, Roster, Sex};
use crate::engine::GameEvent;

use super::effect::{EffectSpec, Move};

/// Resolves one scheduled turn's effect chain.
///
/// Borrows the session's state for the duration of the turn; the budget is
/// fresh for every scheduled turn.
pub struct EffectResolver<'a> {
    board: &'a Board,
    roster: &'a mut Roster,
    rng: &'a mut GameRng,
    config: &'a GameConfig,
    events: &'a mut Vec<GameEvent>,
    winner: &'a mut Option<PlayerId>,
    remaining: usize,
}

impl<'a> EffectResolver<'a> {
    /// Create a resolver for one scheduled turn.
    pub fn new(
        board: &'a Board,
        roster: &'a mut Roster,
        rng: &'a mut GameRng,
        config: &'a GameConfig,
        events: &'a mut Vec<GameEvent>,
        winner: &'a mut Option<PlayerId>,
    ) -> Self {
        let remaining = config.max_chain_depth;
        Self {
            board,
            roster,
            rng,
            config,
            events,
            winner,
            remaining,
        }
    }

    /// Execute one turn: roll the die, record the roll, move by it.
    ///
    /// Quietly does nothing when the game is already won: a nested extra
    /// turn can find the game over and the engine just stops.
    pub fn take_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Ok(());
        }

        let roll = self.rng.roll_die(self.config.die_sides);
        self.roster.get_mut(player).record_roll(roll);
        self.events.push(GameEvent::Rolled { player, roll });

        self.move_player(player, Move::Relative(i32::from(roll)))
    }

    /// Move a player and apply the destination tile's effect.
    ///
    /// Relative moves below the start clamp to position 0; moves past the
    /// win tile follow the configured overshoot policy.
    pub fn move_player(&mut self, player: PlayerId, mv: Move) -> Result<(), GameError> {
        let from = self.roster.get(player).position();

        let wanted = match mv {
            Move::Relative(delta) => {
                let raw = from as i64 + i64::from(delta);
                usize::try_from(raw).unwrap_or(0)
            }
            Move::Absolute(position) => position,
        };

        let to = if wanted > self.board.win_position() {
            match self.config.overshoot {
                OvershootPolicy::ClampToWin => self.board.win_position(),
                OvershootPolicy::Reject => {
                    return Err(GameError::OutOfBounds {
                        position: wanted,
                        len: self.board.len(),
                    })
                }
            }
        } else {
            wanted
        };

        self.roster.get_mut(player).set_position(to);
        self.events.push(GameEvent::Moved { player, from, to });

        self.apply_tile(player)
    }

    /// Apply the tile at the player's current position.
    ///
    /// This is the single dispatch point over the tile variants.
    pub fn apply_tile(&mut self, player: PlayerId) -> Result<(), GameError> {
        if let Some(winner) = *self.winner {
            return Err(GameError::GameOver { winner });
        }

        if self.remaining == 0 {
            return Err(GameError::ChainLimitExceeded {
                limit: self.config.max_chain_depth,
            });
        }
        self.remaining -= 1;

        let position = self.roster.get(player).position();
        let tile = self
            .board
            .tile_at(position)
            .ok_or(GameError::OutOfBounds {
                position,
                len: self.board.len(),
            })?
            .clone();

        match tile.kind() {
            TileKind::NoOp => Ok(()),

            TileKind::Win => {
                *self.winner = Some(player);
                self.events.push(GameEvent::GameWon { player });
                Ok(())
            }

            TileKind::Unimplemented { reason } => Err(GameError::NotImplemented {
                label: tile.label().to_string(),
                reason: reason.clone(),
            }),

            TileKind::Choice(spec) => {
                let who = match spec.only_sex {
                    Some(Sex::Female) => "female player(s)",
                    Some(Sex::Male) => "male player(s)",
                    None => "player(s)",
                };
                Err(GameError::NotImplemented {
                    label: tile.label().to_string(),
                    reason: format!("requires choosing {} {who}", spec.num_players),
                })
            }

            TileKind::Solo => self.apply_effect(tile.effect(), player),

            TileKind::Neighbors(spec) => {
                let targets = spec.targets(player, self.roster);
                self.apply_to_all(tile.effect(), &targets)
            }

            TileKind::Everybody(spec) | TileKind::Sing(spec) => {
                let targets = spec.targets(player, self.roster);
                self.apply_to_all(tile.effect(), &targets)
            }

            TileKind::SkipTurn => {
                self.apply_effect(tile.effect(), player)?;
                if self.winner.is_none() {
                    self.roster.get_mut(player).schedule_skip();
                    self.events.push(GameEvent::SkipScheduled { player });
                }
                Ok(())
            }

            TileKind::RollAgain => {
                self.apply_effect(tile.effect(), player)?;
                if self.winner.is_none() {
                    self.events.push(GameEvent::ExtraTurn { player });
                }
                self.take_turn(player)
            }
        }
    }

    /// Apply a base effect to every target in order.
    ///
    /// Stops early when a winner appears mid-batch: the game is over, the
    /// remaining targets are not affected.
    fn apply_to_all(&mut self, spec: &EffectSpec, targets: &[PlayerId]) -> Result<(), GameError> {
        for &target in targets {
            if self.winner.is_some() {
                break;
            }
            self.apply_effect(spec, target)?;
        }
        Ok(())
    }

    /// Apply a base effect to one target: sips, moves (chaining), strip.
    fn apply_effect(&mut self, spec: &EffectSpec, target: PlayerId) -> Result<(), GameError> {
        let sips = spec.sips.amount_for(self.roster.get(target).last_roll());
        if sips > 0 {
            self.roster.get_mut(target).drink(sips);
            self.events.push(GameEvent::Drank { player: target, sips });
        }

        for mv in spec.moves() {
            if self.winner.is_some() {
                break;
            }
            self.move_player(target, mv)?;
        }
        if self.winner.is_some() {
            return Ok(());
        }

        if spec.strip {
            let remaining = {
                let player = self.roster.get_mut(target);
                player.strip();
                player.clothing_pieces()
            };
            self.events.push(GameEvent::Stripped {
                player: target,
                remaining,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::core::{PlayerBuilder, Sex};
    use crate::effects::NeighborSpec;

    struct Fixture {
        board: Board,
        roster: Roster,
        rng: GameRng,
        config: GameConfig,
        events: Vec<GameEvent>,
        winner: Option<PlayerId>,
    }

    impl Fixture {
        fn new(board: Board, names: &[&str]) -> Self {
            let mut rng = GameRng::new(42);
            let players = names
                .iter()
                .map(|n| {
                    PlayerBuilder::new(*n, Sex::Male)
                        .clothing_pieces(8)
                        .build(&mut rng)
                        .unwrap()
                })
                .collect();
            Self {
                board,
                roster: Roster::new(players).unwrap(),
                rng,
                config: GameConfig::default(),
                events: Vec::new(),
                winner: None,
            }
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
    }

    fn linear_board(middle: Vec<Tile>) -> Board {
        let mut tiles = vec![Tile::noop("START")];
        tiles.extend(middle);
        tiles.push(Tile::win("WIN"));
        Board::new(tiles).unwrap()
    }

    #[test]
    fn test_solo_tile_sips_and_strip() {
        let board = linear_board(vec![Tile::solo(
            "1",
            EffectSpec::sips(3).with_strip(),
        )]);
        let mut fx = Fixture::new(board, &["Fritz", "Pauli"]);
        fx.roster.get_mut(PlayerId::new(0)).drink(12);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        let p = fx.roster.get(PlayerId::new(0));
        assert_eq!(p.sips_drunk(), 15);
        assert_eq!(p.clothing_pieces(), 7);
        // The other player is untouched.
        assert_eq!(fx.roster.get(PlayerId::new(1)).sips_drunk(), 0);
    }

    #[test]
    fn test_roll_dependent_sips_use_target_roll() {
        let board = linear_board(vec![Tile::solo("1", EffectSpec::sips_from_roll())]);
        let mut fx = Fixture::new(board, &["Fritz"]);
        fx.roster.get_mut(PlayerId::new(0)).record_roll(5);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        assert_eq!(fx.roster.get(PlayerId::new(0)).sips_drunk(), 5);
    }

    #[test]
    fn test_roll_dependent_sips_without_roll_do_nothing() {
        let board = linear_board(vec![Tile::solo("1", EffectSpec::sips_from_roll())]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        assert_eq!(fx.roster.get(PlayerId::new(0)).sips_drunk(), 0);
    }

    #[test]
    fn test_move_chains_into_destination_tile() {
        // Tile 1 moves forward 1; tile 2 makes you drink 2.
        let board = linear_board(vec![
            Tile::solo("1", EffectSpec::none().with_relative_move(1)),
            Tile::solo("2", EffectSpec::sips(2)),
        ]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        let p = fx.roster.get(PlayerId::new(0));
        assert_eq!(p.position(), 2);
        assert_eq!(p.sips_drunk(), 2);
    }

    #[test]
    fn test_relative_move_clamps_at_start() {
        let board = linear_board(vec![Tile::solo(
            "1",
            EffectSpec::none().with_relative_move(-5),
        )]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        assert_eq!(fx.roster.get(PlayerId::new(0)).position(), 0);
    }

    #[test]
    fn test_overshoot_clamps_to_win_by_default() {
        let board = linear_board(vec![Tile::noop("1")]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Relative(99))
            .unwrap();

        assert_eq!(fx.roster.get(PlayerId::new(0)).position(), 2);
        assert_eq!(fx.winner, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_overshoot_rejected_under_strict_policy() {
        let board = linear_board(vec![Tile::noop("1")]);
        let mut fx = Fixture::new(board, &["Fritz"]);
        fx.config = GameConfig::new().with_overshoot_policy(OvershootPolicy::Reject);

        let err = fx
            .resolver()
            .move_player(PlayerId::new(0), Move::Relative(99))
            .unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { .. }));
    }

    #[test]
    fn test_neighbor_tile_hits_each_role() {
        let board = linear_board(vec![Tile::neighbors(
            "1",
            EffectSpec::sips(2),
            NeighborSpec::new(),
        )]);
        let mut fx = Fixture::new(board, &["Fritz", "Pauli", "Hans", "Georg"]);

        fx.resolver()
            .move_player(PlayerId::new(1), Move::Absolute(1))
            .unwrap();

        assert_eq!(fx.roster.get(PlayerId::new(0)).sips_drunk(), 2); // left
        assert_eq!(fx.roster.get(PlayerId::new(1)).sips_drunk(), 2); // self
        assert_eq!(fx.roster.get(PlayerId::new(2)).sips_drunk(), 2); // right
        assert_eq!(fx.roster.get(PlayerId::new(3)).sips_drunk(), 0);
    }

    #[test]
    fn test_skip_tile_sets_flag_after_effect() {
        let board = linear_board(vec![Tile::skip_turn("1", EffectSpec::sips(1))]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap();

        let p = fx.roster.get(PlayerId::new(0));
        assert_eq!(p.sips_drunk(), 1);
        assert!(p.must_skip_next_turn());
    }

    #[test]
    fn test_unimplemented_tile_errors() {
        let board = linear_board(vec![Tile::unimplemented("1", "requires laughing")]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        let err = fx
            .resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::NotImplemented {
                label: "1".to_string(),
                reason: "requires laughing".to_string(),
            }
        );
    }

    #[test]
    fn test_win_tile_records_winner_without_effects() {
        let board = linear_board(vec![Tile::noop("1")]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(2))
            .unwrap();

        assert_eq!(fx.winner, Some(PlayerId::new(0)));
        assert_eq!(fx.roster.get(PlayerId::new(0)).sips_drunk(), 0);
    }

    #[test]
    fn test_effects_after_win_are_invalid_state() {
        let board = linear_board(vec![Tile::noop("1")]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        fx.resolver()
            .move_player(PlayerId::new(0), Move::Absolute(2))
            .unwrap();
        let err = fx
            .resolver()
            .move_player(PlayerId::new(0), Move::Absolute(2))
            .unwrap_err();

        assert_eq!(
            err,
            GameError::GameOver {
                winner: PlayerId::new(0)
            }
        );
    }

    #[test]
    fn test_closed_move_loop_hits_chain_limit() {
        // Tiles 1 and 2 bounce the player between each other forever.
        let board = linear_board(vec![
            Tile::solo("1", EffectSpec::none().with_relative_move(1)),
            Tile::solo("2", EffectSpec::none().with_relative_move(-1)),
        ]);
        let mut fx = Fixture::new(board, &["Fritz"]);

        let err = fx
            .resolver()
            .move_player(PlayerId::new(0), Move::Absolute(1))
            .unwrap_err();
        assert_eq!(err, GameError::ChainLimitExceeded { limit: 32 });
    }
}
