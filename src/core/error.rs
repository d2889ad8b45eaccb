//! Errors raised by enumeration declaration, lookup and comparison.

use thiserror::Error;

use super::alias::Alias;

/// Error from declaring or using an enumeration type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumError {
    /// A member's aliases are not a non-empty alias sequence.
    #[error("{member} = {received}, should be a non-empty sequence of aliases")]
    InvalidAliasDeclaration {
        /// Offending member name.
        member: String,
        /// Rendering of the value that was received.
        received: String,
    },

    /// The same member name was declared twice in one type.
    #[error("{type_name}: member {member} declared more than once")]
    DuplicateMember { type_name: String, member: String },

    /// A type was declared without members.
    #[error("{type_name}: an enumeration needs at least one member")]
    EmptyEnumeration { type_name: String },

    /// No member of the type owns the value.
    #[error("{} is not a valid {}", .value.quoted(), .type_name)]
    UnknownAlias { type_name: String, value: Alias },

    /// Members of two different types were compared.
    #[error("cannot compare a {left} member with a {right} member")]
    IncomparableMembers { left: String, right: String },
}
