//! Game events.
//!
//! Everything that happens during a game is recorded as a typed event.
//! The event log is the engine's narration record: presentational output
//! renders it with [`GameEvent::describe`], and tests assert against the
//! typed values directly.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};

/// One observable thing that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player rolled the die.
    Rolled { player: PlayerId, roll: u8 },
    /// A player moved to a new board position.
    Moved { player: PlayerId, from: usize, to: usize },
    /// A player drank.
    Drank { player: PlayerId, sips: u32 },
    /// A player lost a clothing piece; `remaining` is what is left.
    Stripped { player: PlayerId, remaining: u8 },
    /// A player's next scheduled turn was marked to be skipped.
    SkipScheduled { player: PlayerId },
    /// A scheduled turn was skipped (the flag was consumed).
    TurnSkipped { player: PlayerId },
    /// A player was granted an immediate extra turn.
    ExtraTurn { player: PlayerId },
    /// A player reached the goal.
    GameWon { player: PlayerId },
    /// A full round of scheduled turns completed.
    RoundFinished { round: u32 },
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::Rolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::Drank { player, .. }
            | GameEvent::Stripped { player, .. }
            | GameEvent::SkipScheduled { player }
            | GameEvent::TurnSkipped { player }
            | GameEvent::ExtraTurn { player }
            | GameEvent::GameWon { player } => Some(player),
            GameEvent::RoundFinished { .. } => None,
        }
    }

    /// Render the event as human-readable narration.
    #[must_use]
    pub fn describe(&self, roster: &Roster) -> String {
        let name = |id: PlayerId| roster.get(id).name().to_string();
        match *self {
            GameEvent::Rolled { player, roll } => {
                format!("{} rolled a {}", name(player), roll)
            }
            GameEvent::Moved { player, to, .. } => {
                format!("{} moved to {}", name(player), to)
            }
            GameEvent::Drank { player, sips } => {
                format!("{} drank {}", name(player), sips)
            }
            GameEvent::Stripped { player, remaining: 0 } => {
                format!("{} stripped and is now naked!", name(player))
            }
            GameEvent::Stripped { player, .. } => {
                format!("{} stripped", name(player))
            }
            GameEvent::SkipScheduled { player } => {
                format!("{} will skip their next turn", name(player))
            }
            GameEvent::TurnSkipped { player } => {
                format!("{} skips this turn", name(player))
            }
            GameEvent::ExtraTurn { player } => {
                format!("{} rolls again", name(player))
            }
            GameEvent::GameWon { player } => {
                format!("{} reached the goal and wins", name(player))
            }
            GameEvent::RoundFinished { round } => {
                format!("round {round} finished")
            }
        }
    }
}
