//! Player identity and per-player turn state.
//!
//! ## PlayerId
//!
//! Type-safe seat index into the fixed seating order (see
//! [`Roster`](super::roster::Roster)).
//!
//! ## Player
//!
//! A player carries three kinds of state:
//! - identity attributes (name, sex, age, sibling category, glasses, jeans,
//!   coins) that some tiles use as target predicates,
//! - turn state (board position, last die roll, skip-next-turn flag),
//! - consumable state (sips drunk, clothing pieces).
//!
//! Two invariants hold for the whole game: the sip count never decreases,
//! and the clothing count never goes below zero.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::GameRng;

/// Coins a player may start with.
pub const COIN_RANGE: std::ops::RangeInclusive<u8> = 0..=10;
/// Clothing pieces a player may start with.
pub const CLOTHING_RANGE: std::ops::RangeInclusive<u8> = 5..=12;
/// Ages the game is played at.
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 18..=37;

/// Seat index into the fixed seating order, supporting up to 255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Player sex, used as a target predicate by some tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

/// Sibling category, used as a target predicate by some tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Siblings {
    #[default]
    None,
    Brothers,
    Sisters,
    Both,
}

impl Siblings {
    /// Whether the category includes at least one brother.
    #[must_use]
    pub const fn has_brothers(self) -> bool {
        matches!(self, Siblings::Brothers | Siblings::Both)
    }

    /// Whether the category includes at least one sister.
    #[must_use]
    pub const fn has_sisters(self) -> bool {
        matches!(self, Siblings::Sisters | Siblings::Both)
    }
}

/// A turn-taking participant.
///
/// Created once at game start via [`PlayerBuilder`] and mutated only through
/// the methods here, which uphold the consumable-state invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    sex: Sex,
    age: u8,
    siblings: Siblings,
    wears_glasses: bool,
    wears_jeans: bool,
    coins: u8,

    position: usize,
    last_roll: Option<u8>,
    skip_next_turn: bool,

    sips_drunk: u32,
    clothing_pieces: u8,
}

impl Player {
    // === Identity ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub const fn siblings(&self) -> Siblings {
        self.siblings
    }

    #[must_use]
    pub const fn wears_glasses(&self) -> bool {
        self.wears_glasses
    }

    #[must_use]
    pub const fn wears_jeans(&self) -> bool {
        self.wears_jeans
    }

    #[must_use]
    pub const fn coins(&self) -> u8 {
        self.coins
    }

    // === Turn state ===

    /// Current board position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// The most recent die roll, if the player has rolled this game.
    #[must_use]
    pub const fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub(crate) fn record_roll(&mut self, roll: u8) {
        self.last_roll = Some(roll);
    }

    /// Whether the player's next scheduled turn will be skipped.
    #[must_use]
    pub const fn must_skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Mark the player to be skipped on their next scheduled turn.
    ///
    /// Honoring the flag is the turn engine's responsibility.
    pub fn schedule_skip(&mut self) {
        self.skip_next_turn = true;
    }

    /// Consume the skip flag, returning whether it was set.
    pub(crate) fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next_turn)
    }

    // === Consumable state ===

    /// Total sips drunk so far. Never decreases.
    #[must_use]
    pub const fn sips_drunk(&self) -> u32 {
        self.sips_drunk
    }

    /// Remaining clothing pieces. Never below zero.
    #[must_use]
    pub const fn clothing_pieces(&self) -> u8 {
        self.clothing_pieces
    }

    #[must_use]
    pub const fn is_naked(&self) -> bool {
        self.clothing_pieces == 0
    }

    /// Drink `sips` sips.
    pub fn drink(&mut self, sips: u32) {
        self.sips_drunk += sips;
    }

    /// Remove one clothing piece, floored at zero.
    ///
    /// Returns `true` when this strip made the player naked.
    pub fn strip(&mut self) -> bool {
        let was_clothed = self.clothing_pieces > 0;
        self.clothing_pieces = self.clothing_pieces.saturating_sub(1);
        was_clothed && self.clothing_pieces == 0
    }
}

/// Builder for [`Player`].
///
/// Name and sex are required; every other attribute is either supplied or
/// randomized within the documented ranges at build time. Supplied values
/// outside those ranges fail fast.
///
/// ## Example
///
/// ```
/// use sipboard::core::{GameRng, PlayerBuilder, Sex};
///
/// let mut rng = GameRng::new(42);
/// let player = PlayerBuilder::new("Fritz", Sex::Male)
///     .age(25)
///     .clothing_pieces(8)
///     .build(&mut rng)
///     .unwrap();
///
/// assert_eq!(player.name(), "Fritz");
/// assert_eq!(player.age(), 25);
/// assert_eq!(player.clothing_pieces(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct PlayerBuilder {
    name: String,
    sex: Sex,
    age: Option<u8>,
    siblings: Option<Siblings>,
    wears_glasses: Option<bool>,
    wears_jeans: Option<bool>,
    coins: Option<u8>,
    clothing_pieces: Option<u8>,
}

impl PlayerBuilder {
    /// Start building a player with the required identity.
    pub fn new(name: impl Into<String>, sex: Sex) -> Self {
        Self {
            name: name.into(),
            sex,
            age: None,
            siblings: None,
            wears_glasses: None,
            wears_jeans: None,
            coins: None,
            clothing_pieces: None,
        }
    }

    #[must_use]
    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn siblings(mut self, siblings: Siblings) -> Self {
        self.siblings = Some(siblings);
        self
    }

    #[must_use]
    pub fn glasses(mut self, wears_glasses: bool) -> Self {
        self.wears_glasses = Some(wears_glasses);
        self
    }

    #[must_use]
    pub fn jeans(mut self, wears_jeans: bool) -> Self {
        self.wears_jeans = Some(wears_jeans);
        self
    }

    #[must_use]
    pub fn coins(mut self, coins: u8) -> Self {
        self.coins = Some(coins);
        self
    }

    #[must_use]
    pub fn clothing_pieces(mut self, pieces: u8) -> Self {
        self.clothing_pieces = Some(pieces);
        self
    }

    /// Build the player, randomizing unspecified attributes.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` when the name is empty or a supplied value is
    /// outside its documented range.
    pub fn build(self, rng: &mut GameRng) -> Result<Player, GameError> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidConfiguration(
                "player name must not be empty".to_string(),
            ));
        }

        let age = Self::resolve(self.age, AGE_RANGE, "age", rng)?;
        let coins = Self::resolve(self.coins, COIN_RANGE, "coins", rng)?;
        let clothing_pieces =
            Self::resolve(self.clothing_pieces, CLOTHING_RANGE, "clothing pieces", rng)?;

        let siblings = self.siblings.unwrap_or_else(|| {
            *rng.choose(&[
                Siblings::None,
                Siblings::Brothers,
                Siblings::Sisters,
                Siblings::Both,
            ])
            .unwrap()
        });
        let wears_glasses = self.wears_glasses.unwrap_or_else(|| rng.gen_bool(0.5));
        let wears_jeans = self.wears_jeans.unwrap_or_else(|| rng.gen_bool(0.5));

        Ok(Player {
            name: self.name,
            sex: self.sex,
            age,
            siblings,
            wears_glasses,
            wears_jeans,
            coins,
            position: 0,
            last_roll: None,
            skip_next_turn: false,
            sips_drunk: 0,
            clothing_pieces,
        })
    }

    fn resolve(
        supplied: Option<u8>,
        range: std::ops::RangeInclusive<u8>,
        what: &str,
        rng: &mut GameRng,
    ) -> Result<u8, GameError> {
        match supplied {
            Some(value) if range.contains(&value) => Ok(value),
            Some(value) => Err(GameError::InvalidConfiguration(format!(
                "{what} {value} is outside {}..={}",
                range.start(),
                range.end()
            ))),
            None => Ok(rng.gen_range(range)),
        }
    }
}
