//! Poker suits, ranks and cards.

use std::str::FromStr;

use rand::Rng;

use crate::alias_enum;
use crate::core::EnumError;
use crate::enums::AliasEnum;
use crate::text::repr;

alias_enum! {
    /// Card suit. Ordered clubs, diamonds, hearts, spades.
    pub enum Suit {
        Clubs => ['♣', "c", "clubs"],
        Diamonds => ['♦', "d", "diamonds"],
        Hearts => ['♥', "h", "hearts"],
        Spades => ['♠', "s", "spades"],
    }
}

alias_enum! {
    /// Card rank. Ace is high; `1` is accepted as an alias for it.
    pub enum Rank {
        Deuce => ["2", 2, "deuce", "two"],
        Three => ["3", 3, "three", "trey"],
        Four => ["4", 4, "four"],
        Five => ["5", 5, "five"],
        Six => ["6", 6, "six"],
        Seven => ["7", 7, "seven"],
        Eight => ["8", 8, "eight"],
        Nine => ["9", 9, "nine"],
        Ten => ["T", 10, "ten", "10"],
        Jack => ["J", 11, "jack", "knave"],
        Queen => ["Q", 12, "queen"],
        King => ["K", 13, "king"],
        Ace => ["A", 14, 1, "ace", "1"],
    }
}

impl Rank {
    /// Is this a jack, queen or king?
    #[must_use]
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Is this ten or higher?
    #[must_use]
    pub fn is_broadway(self) -> bool {
        self >= Rank::Ten
    }
}

/// A playing card, ordered by rank then suit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 cards, deuce of clubs first.
    #[must_use]
    pub fn deck() -> Vec<Card> {
        Rank::iter()
            .flat_map(|rank| Suit::iter().map(move |suit| Card::new(rank, suit)))
            .collect()
    }

    /// Draw rank and suit independently and uniformly.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Rank::sample(rng), Suit::sample(rng))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&repr("Card", self))
    }
}

/// Parse rank text followed by a one-character suit, as in `"As"`,
/// `"10h"` or `"K♣"`.
impl FromStr for Card {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(EnumError::UnknownAlias {
                type_name: "Card".to_string(),
                value: s.into(),
            });
        };
        let (rank, suit) = s.split_at(split);
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}
