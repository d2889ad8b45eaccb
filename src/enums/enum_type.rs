//! Enumeration types - the runtime face of a declaration.
//!
//! An `EnumType` owns a frozen `AliasTable`. All lookups, iteration and
//! sampling go through it; nothing is re-validated after `declare()`.
//! Being immutable, an `EnumType` can be shared across threads freely.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{normalize, Alias, EnumError};

use super::declaration::EnumDecl;
use super::member::Member;
use super::table::AliasTable;

static NEXT_ENUM_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identifier of a declared enumeration type.
///
/// Two members are only comparable when their types share an `EnumId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumId(pub u64);

impl EnumId {
    /// Allocate the next unused ID.
    fn next() -> Self {
        Self(NEXT_ENUM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EnumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enum({})", self.0)
    }
}

/// A closed, ordered enumeration type.
///
/// A clone keeps the `EnumId`, so members of the clone and the original
/// are the same members.
///
/// ## Example
///
/// ```
/// use poker_enums::enums::EnumDecl;
///
/// let level = EnumDecl::new("Level")
///     .with_member("Low", ["low", "l"])
///     .with_member("Mid", ["mid", "m"])
///     .with_member("High", ["high", "h"])
///     .declare()
///     .unwrap();
///
/// let low = level.resolve("L").unwrap();
/// let high = level.resolve("HIGH").unwrap();
/// assert!(low < high);
/// assert_eq!(high.to_string(), "high");
/// assert_eq!(format!("{:?}", high), "Level('high')");
/// ```
#[derive(Clone, Debug)]
pub struct EnumType {
    id: EnumId,
    name: String,
    table: AliasTable,
}

impl EnumType {
    pub(crate) fn new(name: String, table: AliasTable) -> Self {
        Self {
            id: EnumId::next(),
            name,
            table,
        }
    }

    /// Declare a type from a declaration. Same as `EnumDecl::declare`.
    pub fn declare(decl: EnumDecl) -> Result<Self, EnumError> {
        decl.declare()
    }

    /// The type's unique ID.
    #[must_use]
    pub fn id(&self) -> EnumId {
        self.id
    }

    /// The declared type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: declarations without members are rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Iterate over members in declaration order.
    ///
    /// Calling again restarts from the first member.
    pub fn members(
        &self,
    ) -> impl ExactSizeIterator<Item = Member<'_>> + DoubleEndedIterator + Clone + '_ {
        (0..self.len()).map(move |ordinal| Member::new(self, ordinal))
    }

    /// Get the member at an ordinal.
    #[must_use]
    pub fn member(&self, ordinal: usize) -> Option<Member<'_>> {
        (ordinal < self.len()).then(|| Member::new(self, ordinal))
    }

    /// Get a member by its declared name (exact match).
    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<Member<'_>> {
        self.table
            .ordinal_of(name)
            .map(|ordinal| Member::new(self, ordinal))
    }

    /// Find the member owning a value.
    ///
    /// Text is matched case-insensitively; numbers exactly.
    pub fn resolve(&self, value: impl Into<Alias>) -> Result<Member<'_>, EnumError> {
        let value = value.into();
        match self.table.lookup(&normalize(&value)) {
            Some(ordinal) => Ok(Member::new(self, ordinal)),
            None => Err(EnumError::UnknownAlias {
                type_name: self.name.clone(),
                value,
            }),
        }
    }

    /// Check if any member owns a value.
    #[must_use]
    pub fn contains(&self, value: impl Into<Alias>) -> bool {
        self.table.lookup(&normalize(&value.into())).is_some()
    }

    /// Choose a member uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Member<'_> {
        Member::new(self, rng.gen_range(0..self.len()))
    }

    /// Choose a member uniformly using the thread-local RNG.
    pub fn sample_random(&self) -> Member<'_> {
        self.sample(&mut rand::thread_rng())
    }
}
