//! # poker-enums
//!
//! Closed, ordered enumerations whose members carry several aliases,
//! like a card rank known as "2", 2 or "Deuce".
//!
//! ## Design Principles
//!
//! 1. **Declaration Order Is Order**: Members compare by their position
//!    in the declaration, never by alias text or numeric alias value.
//!
//! 2. **Case-Insensitive Lookup**: Text aliases are upper-cased when the
//!    index is built and again when a value is resolved.
//!
//! 3. **First Declaration Wins**: When two aliases normalize to the same
//!    key, the earliest declared member keeps it. Overlap is not an error.
//!
//! 4. **Build Once, Read Forever**: Declaring validates and indexes once.
//!    The resulting types are immutable and freely shared across threads.
//!
//! ## Example
//!
//! ```
//! use poker_enums::games::poker::{Rank, Suit};
//! use poker_enums::enums::AliasEnum;
//!
//! let rank: Rank = "deuce".parse().unwrap();
//! assert_eq!(rank, Rank::Deuce);
//! assert_eq!(rank.to_string(), "2");
//! assert!(Rank::Deuce < Rank::Ace);
//! assert_eq!(Suit::resolve("S").unwrap(), Suit::Spades);
//! ```
//!
//! ## Modules
//!
//! - `core`: Alias values, normalization, errors, RNG
//! - `enums`: Declarations, alias tables, enumeration types, members,
//!   and the `alias_enum!` macro
//! - `text`: Numeric text parsing and repr helpers
//! - `games`: Concrete vocabularies (poker suits and ranks)

pub mod core;
pub mod enums;
pub mod text;
pub mod games;

// Re-export commonly used types
pub use crate::core::{normalize, Alias, AliasKey, EnumError, EnumRng};

pub use crate::enums::{
    AliasEnum, AliasSpec, AliasTable, EnumDecl, EnumId, EnumType, Member, MemberDecl,
};

pub use crate::text::{make_float, make_int, repr, NumericParseError};
