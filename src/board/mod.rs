//! The board: an immutable ordered sequence of tiles.
//!
//! Position 0 is the start; the final position is the win tile. The board
//! is validated once at construction and never changes afterwards.

pub mod layout;
pub mod tile;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

pub use tile::{ChoiceSpec, Tile, TileKind};

/// An immutable, validated sequence of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// The standard 72-tile board from the printed rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiles: layout::standard_tiles(),
        }
    }

    /// Create a board from a custom tile sequence (game variants, tests).
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when the board is empty, does not end in a win
    /// tile, contains a contradictory effect, or an absolute move points
    /// outside the board.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, GameError> {
        if tiles.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "a board needs at least one tile".to_string(),
            ));
        }
        if !matches!(tiles[tiles.len() - 1].kind(), TileKind::Win) {
            return Err(GameError::InvalidConfiguration(
                "the final tile must be the win tile".to_string(),
            ));
        }

        for tile in &tiles {
            tile.validate()?;
            if let Some(target) = tile.effect().move_abs {
                if target >= tiles.len() {
                    return Err(GameError::InvalidConfiguration(format!(
                        "tile '{}' moves to {target}, outside the board of {} tiles",
                        tile.label(),
                        tiles.len()
                    )));
                }
            }
        }

        Ok(Self { tiles })
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// A board is never empty; this exists for the usual pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The position of the win tile.
    #[must_use]
    pub fn win_position(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Look up a tile by exact position.
    #[must_use]
    pub fn tile_at(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Iterate over `(position, &Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.tiles.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectSpec;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.len(), 72);
        assert_eq!(board.win_position(), 71);
        assert!(matches!(board.tile_at(71).unwrap().kind(), TileKind::Win));
        assert!(board.tile_at(72).is_none());
    }

    #[test]
    fn test_rejects_empty_board() {
        let err = Board::new(Vec::new()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_board_without_win_tile() {
        let err = Board::new(vec![Tile::noop("START"), Tile::solo("1", EffectSpec::sips(1))])
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_out_of_range_absolute_move() {
        let tiles = vec![
            Tile::noop("START"),
            Tile::solo("1", EffectSpec::none().with_absolute_move(9)),
            Tile::win("WIN"),
        ];
        let err = Board::new(tiles).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_contradictory_effect() {
        let tiles = vec![
            Tile::solo("0", EffectSpec::none().with_relative_move(1).with_absolute_move(0)),
            Tile::win("WIN"),
        ];
        let err = Board::new(tiles).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_custom_board_accepted() {
        let board = Board::new(vec![
            Tile::noop("START"),
            Tile::solo("1", EffectSpec::sips(2)),
            Tile::win("WIN"),
        ])
        .unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board.win_position(), 2);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
