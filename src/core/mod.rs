//! Core types: alias values, normalization, errors, RNG.
//!
//! These are the building blocks shared by every enumeration type.
//! Nothing here knows about a concrete vocabulary.

pub mod alias;
pub mod error;
pub mod rng;

pub use alias::{normalize, Alias, AliasKey};
pub use error::EnumError;
pub use rng::EnumRng;
