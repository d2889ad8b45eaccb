//! Poker vocabulary built on the enumeration framework.
//!
//! - `Suit`: clubs < diamonds < hearts < spades, named by symbol, letter
//!   or word ("♠", "s", "spades")
//! - `Rank`: deuce < ... < ace, named by symbol, number or word
//!   ("A", 14, 1, "ace")
//! - `Card`: a rank and a suit, parsed from text such as "As" or "10h"

mod vocab;

pub use vocab::{Card, Rank, Suit};
