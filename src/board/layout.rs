//! The standard board: 72 tiles as printed on the game board.
//!
//! Tiles whose rules need human judgment or randomness the data model does
//! not carry (laughing, kissing, coin flips, extra dice) are declared
//! unimplemented with the printed rule as the reason.

use crate::core::player::Sex;
use crate::effects::{CrowdSpec, EffectSpec, NeighborSpec, Parity, PlayerPredicate};

use super::tile::{ChoiceSpec, Tile};

/// Build the standard 72-tile layout. Position 0 is the start, 71 the goal.
#[must_use]
pub fn standard_tiles() -> Vec<Tile> {
    vec![
        Tile::noop("START"),
        Tile::everybody("1", EffectSpec::sips(1), CrowdSpec::new()),
        Tile::neighbors("2", EffectSpec::sips(2), NeighborSpec::new()),
        Tile::solo("3", EffectSpec::none().with_relative_move(-2)),
        Tile::sing("4", EffectSpec::sips(2), CrowdSpec::new()),
        Tile::solo("5", EffectSpec::sips(1).with_absolute_move(32)),
        Tile::solo("6", EffectSpec::sips(1)),
        Tile::everybody("7", EffectSpec::sips(1), CrowdSpec::new().excluding_self()),
        Tile::noop("8"),
        Tile::choice("9", EffectSpec::sips(1), ChoiceSpec::new(1)),
        Tile::everybody(
            "10",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::Sex(Sex::Male)),
        ),
        Tile::neighbors("11", EffectSpec::sips(1), NeighborSpec::new().excluding_left()),
        Tile::choice("12", EffectSpec::sips(2), ChoiceSpec::new(1)),
        Tile::solo("13", EffectSpec::sips_from_roll().with_absolute_move(0)),
        Tile::everybody(
            "14",
            EffectSpec::sips(1),
            CrowdSpec::new().closest_to_start_or_goal(),
        ),
        Tile::choice("15", EffectSpec::sips(1), ChoiceSpec::new(1).only_sex(Sex::Female)),
        Tile::unimplemented("16", "the player and the first player to laugh drink"),
        Tile::skip_turn("17", EffectSpec::sips(1)),
        Tile::noop("18"),
        Tile::everybody(
            "19",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::Sex(Sex::Female)),
        ),
        Tile::roll_again("20", EffectSpec::sips(1)),
        Tile::solo("21", EffectSpec::none().with_absolute_move(0)),
        Tile::solo("22", EffectSpec::sips_from_roll()),
        Tile::everybody(
            "23",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::HasBrothers),
        ),
        Tile::unimplemented("24", "choose between drinking 3 sips or moving 4 tiles back"),
        Tile::solo("25", EffectSpec::sips(1)),
        Tile::everybody(
            "26",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::AgeParity(Parity::Even)),
        ),
        Tile::everybody(
            "27",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::AgeParity(Parity::Odd)),
        ),
        Tile::noop("28"),
        Tile::solo("29", EffectSpec::sips(5).with_absolute_move(9)),
        Tile::everybody(
            "30",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::MaxCoins(10)),
        ),
        Tile::unimplemented("31", "roll the die: drink on even, everybody else drinks on odd"),
        Tile::solo("32", EffectSpec::sips(3)),
        Tile::solo("33", EffectSpec::sips(1).with_strip()),
        Tile::choice("34", EffectSpec::none().with_absolute_move(6), ChoiceSpec::new(1)),
        Tile::solo("35", EffectSpec::none().with_absolute_move(6)),
        Tile::unimplemented("36", "the player closest to the start drinks and goes there"),
        Tile::unimplemented("37", "everybody in front of the player drinks"),
        Tile::noop("38"),
        Tile::solo("39", EffectSpec::sips(1).with_strip()),
        Tile::solo("40", EffectSpec::sips_from_roll()),
        Tile::unimplemented("41", "the players with the fewest coins drink"),
        Tile::unimplemented("42", "everybody rolls; everybody rolling a 1 drinks"),
        Tile::everybody(
            "43",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::HasSisters),
        ),
        Tile::unimplemented("44", "drink, then the left neighbor decides who drinks"),
        Tile::solo("45", EffectSpec::sips(1).with_relative_move(2)),
        Tile::unimplemented("46", "flip a coin: heads everybody drinks, tails you drink"),
        Tile::solo("47", EffectSpec::sips(2)),
        Tile::noop("48"),
        Tile::roll_again("49", EffectSpec::none().with_absolute_move(28)),
        Tile::solo("50", EffectSpec::sips(1).with_strip()),
        Tile::solo("51", EffectSpec::sips(3)),
        Tile::everybody(
            "52",
            EffectSpec::sips(2),
            CrowdSpec::new().with_filter(PlayerPredicate::MaxAge(20)),
        ),
        Tile::neighbors("53", EffectSpec::sips(1), NeighborSpec::new()),
        Tile::everybody("54", EffectSpec::sips(1), CrowdSpec::new()),
        Tile::unimplemented("55", "everybody rolls; a 6 means drink"),
        Tile::solo("56", EffectSpec::sips(1).with_absolute_move(18)),
        Tile::unimplemented("57", "everybody with an 8 in their birth year drinks"),
        Tile::noop("58"),
        Tile::unimplemented("59", "everybody rolls; a 1 sends you back to the start"),
        Tile::sing("60", EffectSpec::sips(5), CrowdSpec::new()),
        Tile::everybody(
            "61",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::Glasses(false)),
        ),
        Tile::unimplemented("62", "roll and move back the number of pips"),
        Tile::everybody(
            "63",
            EffectSpec::sips(1),
            CrowdSpec::new().with_filter(PlayerPredicate::Jeans(true)),
        ),
        Tile::everybody("64", EffectSpec::sips(1), CrowdSpec::new()),
        Tile::everybody("65", EffectSpec::none().with_relative_move(-1), CrowdSpec::new()),
        Tile::solo("66", EffectSpec::none().with_absolute_move(32)),
        Tile::everybody("67", EffectSpec::sips(3).with_strip(), CrowdSpec::new()),
        Tile::noop("68"),
        Tile::unimplemented("69", "roll five times and move back the total number of pips"),
        Tile::solo("70", EffectSpec::sips(1).with_absolute_move(0)),
        Tile::win("WIN"),
    ]
}
