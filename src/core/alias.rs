//! Alias values and their normalized lookup keys.
//!
//! Every member of an enumeration is named by one or more aliases.
//! An alias is a primitive value: a text token or a number.
//!
//! ## Alias Types
//!
//! - `Text`: Tokens ("2", "Deuce", "♣", "clubs")
//! - `Int`: Integers (2, 14)
//! - `Float`: Floating point numbers (0.5)
//!
//! ## Normalization
//!
//! `normalize` turns an alias into the `AliasKey` used by the alias index.
//! The same function runs when the index is built and when a value is
//! looked up, so both sides always agree.

use serde::{Deserialize, Serialize};

/// One representation of an enumeration member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alias {
    /// Text token, matched case-insensitively.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
}

impl Alias {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Alias::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Alias::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Alias::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Is this a text alias?
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Alias::Text(_))
    }

    /// Render the alias with quotes around text, as in `'Deuce'` or `2`.
    #[must_use]
    pub fn quoted(&self) -> String {
        match self {
            Alias::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }

    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Alias::Text(_) => "text",
            Alias::Int(_) => "int",
            Alias::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alias::Text(s) => f.write_str(s),
            Alias::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on integral floats
            Alias::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<&str> for Alias {
    fn from(v: &str) -> Self {
        Alias::Text(v.to_string())
    }
}

impl From<String> for Alias {
    fn from(v: String) -> Self {
        Alias::Text(v)
    }
}

impl From<&String> for Alias {
    fn from(v: &String) -> Self {
        Alias::Text(v.clone())
    }
}

impl From<char> for Alias {
    fn from(v: char) -> Self {
        Alias::Text(v.to_string())
    }
}

impl From<i64> for Alias {
    fn from(v: i64) -> Self {
        Alias::Int(v)
    }
}

impl From<i32> for Alias {
    fn from(v: i32) -> Self {
        Alias::Int(v as i64)
    }
}

impl From<u32> for Alias {
    fn from(v: u32) -> Self {
        Alias::Int(v as i64)
    }
}

impl From<u8> for Alias {
    fn from(v: u8) -> Self {
        Alias::Int(v as i64)
    }
}

impl From<f64> for Alias {
    fn from(v: f64) -> Self {
        Alias::Float(v)
    }
}

impl From<&Alias> for Alias {
    fn from(v: &Alias) -> Self {
        v.clone()
    }
}

/// Normalized alias, the key type of the alias index.
///
/// Text is upper-cased. Integral floats collapse onto the integer key so
/// that `2.0` and `2` name the same member.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AliasKey {
    /// Upper-cased text.
    Text(String),
    /// Integer, including integral floats.
    Int(i64),
    /// Bit pattern of a non-integral float.
    Float(u64),
}

/// Bits every NaN is keyed on.
const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// Normalize an alias for insertion into or lookup in the alias index.
///
/// ```
/// use poker_enums::core::{normalize, Alias, AliasKey};
///
/// assert_eq!(normalize(&Alias::from("deuce")), AliasKey::Text("DEUCE".into()));
/// assert_eq!(normalize(&Alias::from(2.0)), normalize(&Alias::from(2)));
/// assert_ne!(normalize(&Alias::from("2")), normalize(&Alias::from(2)));
/// ```
#[must_use]
pub fn normalize(alias: &Alias) -> AliasKey {
    match alias {
        Alias::Text(s) => AliasKey::Text(s.to_uppercase()),
        Alias::Int(v) => AliasKey::Int(*v),
        Alias::Float(v) => normalize_float(*v),
    }
}

fn normalize_float(v: f64) -> AliasKey {
    if v.is_nan() {
        return AliasKey::Float(CANONICAL_NAN);
    }
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        return AliasKey::Int(v as i64);
    }
    AliasKey::Float(v.to_bits())
}
