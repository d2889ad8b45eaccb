//! Enumeration framework: declarations, alias tables, types and members.
//!
//! ## Key Types
//!
//! - `EnumDecl`: Ordered `(member name, aliases)` list, the builder input
//! - `AliasTable`: Validated members plus the normalized alias index
//! - `EnumType`: Immutable runtime type (lookup, iteration, sampling)
//! - `Member`: Copyable handle ordered by declaration position
//! - `AliasEnum`: Native Rust enums declared with `alias_enum!`
//!
//! ## Lifecycle
//!
//! Declaring validates and indexes once. After that every structure is
//! read-only and may be shared across threads without locking.

pub mod declaration;
pub mod enum_type;
pub mod member;
pub mod table;
pub mod typed;

pub use declaration::{AliasSpec, EnumDecl, MemberDecl};
pub use enum_type::{EnumId, EnumType};
pub use member::Member;
pub use table::{AliasTable, MemberEntry};
pub use typed::AliasEnum;
