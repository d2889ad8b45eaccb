//! Enumeration declarations - the input to type construction.
//!
//! An `EnumDecl` lists members in declaration order, each with the aliases
//! that name it. Declaring it validates the aliases, builds the alias
//! index and returns an immutable `EnumType`.
//!
//! ```
//! use poker_enums::enums::EnumDecl;
//!
//! let shape = EnumDecl::new("Shape")
//!     .with_member("Pair", ["", "pair"])
//!     .with_member("Suited", ["s", "suited"])
//!     .with_member("Offsuit", ["o", "offsuit"])
//!     .declare()
//!     .unwrap();
//!
//! assert_eq!(shape.resolve("SUITED").unwrap().name(), "Suited");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Alias, EnumError};

use super::enum_type::EnumType;
use super::table::AliasTable;

/// The aliases given for one member, as received.
///
/// Only `Sequence` is valid. A bare value is kept as `Scalar` so that
/// declaring it fails loudly instead of being read as one alias per
/// character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasSpec {
    /// Ordered aliases; the first one is canonical.
    Sequence(Vec<Alias>),
    /// A single value where a sequence was expected.
    Scalar(Alias),
}

impl AliasSpec {
    /// Get the alias list if this spec is a non-empty sequence.
    #[must_use]
    pub fn as_aliases(&self) -> Option<&[Alias]> {
        match self {
            AliasSpec::Sequence(aliases) if !aliases.is_empty() => Some(aliases),
            _ => None,
        }
    }

    /// Render the spec for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            AliasSpec::Scalar(alias) => alias.quoted(),
            AliasSpec::Sequence(aliases) => {
                let inner: Vec<String> = aliases.iter().map(Alias::quoted).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

impl<T: Into<Alias>> From<Vec<T>> for AliasSpec {
    fn from(v: Vec<T>) -> Self {
        AliasSpec::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Alias>, const N: usize> From<[T; N]> for AliasSpec {
    fn from(v: [T; N]) -> Self {
        AliasSpec::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Alias>> From<&[T]> for AliasSpec {
    fn from(v: &[T]) -> Self {
        AliasSpec::Sequence(v.iter().cloned().map(Into::into).collect())
    }
}

impl From<Alias> for AliasSpec {
    fn from(v: Alias) -> Self {
        AliasSpec::Scalar(v)
    }
}

impl From<&str> for AliasSpec {
    fn from(v: &str) -> Self {
        AliasSpec::Scalar(v.into())
    }
}

impl From<String> for AliasSpec {
    fn from(v: String) -> Self {
        AliasSpec::Scalar(v.into())
    }
}

impl From<i64> for AliasSpec {
    fn from(v: i64) -> Self {
        AliasSpec::Scalar(v.into())
    }
}

impl From<i32> for AliasSpec {
    fn from(v: i32) -> Self {
        AliasSpec::Scalar(v.into())
    }
}

impl From<f64> for AliasSpec {
    fn from(v: f64) -> Self {
        AliasSpec::Scalar(v.into())
    }
}

/// One declared member: its name and its aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    /// Member name, unique within the type.
    pub name: String,

    /// Aliases as received.
    pub aliases: AliasSpec,
}

impl MemberDecl {
    /// Create a new member declaration.
    pub fn new(name: impl Into<String>, aliases: impl Into<AliasSpec>) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.into(),
        }
    }

    /// Check the aliases and return them.
    ///
    /// Fails with `InvalidAliasDeclaration` for a bare value or an empty
    /// sequence.
    pub fn validated_aliases(&self) -> Result<&[Alias], EnumError> {
        self.aliases
            .as_aliases()
            .ok_or_else(|| EnumError::InvalidAliasDeclaration {
                member: self.name.clone(),
                received: self.aliases.describe(),
            })
    }
}

/// Declaration of a closed, ordered enumeration type.
///
/// Member order is declaration order and becomes the ordering of the
/// built type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Type name, used in debug strings and errors.
    pub name: String,

    /// Members in declaration order.
    pub members: Vec<MemberDecl>,
}

impl EnumDecl {
    /// Start a declaration with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member (builder pattern).
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, aliases: impl Into<AliasSpec>) -> Self {
        self.members.push(MemberDecl::new(name, aliases));
        self
    }

    /// Append a member in place.
    pub fn push_member(&mut self, name: impl Into<String>, aliases: impl Into<AliasSpec>) {
        self.members.push(MemberDecl::new(name, aliases));
    }

    /// Validate, index and freeze the declaration.
    pub fn declare(self) -> Result<EnumType, EnumError> {
        let table = AliasTable::build(&self)?;
        Ok(EnumType::new(self.name, table))
    }
}
