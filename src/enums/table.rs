//! Alias table: members, their aliases and the alias index.
//!
//! The table is built once from an `EnumDecl` and never changes. Members
//! keep declaration order; their ordinal is their position.
//!
//! ## Index Population
//!
//! Members are visited in declaration order and each member's aliases in
//! order. Every alias is normalized and inserted only if its key is not
//! present yet, so when two aliases collide the earliest declaration owns
//! the key. Collisions are not errors.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{normalize, Alias, AliasKey, EnumError};

use super::declaration::EnumDecl;

/// Validated member data.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberEntry {
    /// Member name.
    pub name: String,

    /// Aliases in declaration order. Never empty.
    ///
    /// SmallVec optimizes for the common case of a handful of aliases.
    pub aliases: SmallVec<[Alias; 4]>,
}

impl MemberEntry {
    /// The first declared alias.
    #[must_use]
    pub fn canonical(&self) -> &Alias {
        &self.aliases[0]
    }
}

/// Immutable member list plus the normalized-alias reverse index.
///
/// Only `build` creates a table, so a table always has members.
#[derive(Clone, Debug)]
pub struct AliasTable {
    entries: Vec<MemberEntry>,
    index: FxHashMap<AliasKey, usize>,
    names: FxHashMap<String, usize>,
}

impl AliasTable {
    /// Validate a declaration and build its table.
    ///
    /// Members are checked in declaration order and the first problem
    /// found is returned.
    pub fn build(decl: &EnumDecl) -> Result<Self, EnumError> {
        if decl.members.is_empty() {
            return Err(EnumError::EmptyEnumeration {
                type_name: decl.name.clone(),
            });
        }

        let mut table = Self {
            entries: Vec::with_capacity(decl.members.len()),
            index: FxHashMap::default(),
            names: FxHashMap::default(),
        };

        for member in &decl.members {
            let aliases = member.validated_aliases()?;
            let ordinal = table.entries.len();

            if table.names.insert(member.name.clone(), ordinal).is_some() {
                return Err(EnumError::DuplicateMember {
                    type_name: decl.name.clone(),
                    member: member.name.clone(),
                });
            }

            for alias in aliases {
                table.insert_alias(alias, ordinal, &decl.name, &member.name);
            }

            table.entries.push(MemberEntry {
                name: member.name.clone(),
                aliases: aliases.iter().cloned().collect(),
            });
        }

        debug!(
            "declared {} with {} members and {} index keys",
            decl.name,
            table.entries.len(),
            table.index.len()
        );
        Ok(table)
    }

    /// Insert one alias, keeping an existing owner of the same key.
    fn insert_alias(&mut self, alias: &Alias, ordinal: usize, type_name: &str, member: &str) {
        let key = normalize(alias);
        match self.index.get(&key) {
            Some(&owner) => trace!(
                "{type_name}: alias {} of {member} already owned by ordinal {owner}",
                alias.quoted()
            ),
            None => {
                self.index.insert(key, ordinal);
            }
        }
    }

    /// Look up the ordinal owning a normalized key.
    #[must_use]
    pub fn lookup(&self, key: &AliasKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Look up the ordinal of a member by exact name.
    #[must_use]
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Get a member entry by ordinal.
    #[must_use]
    pub fn entry(&self, ordinal: usize) -> Option<&MemberEntry> {
        self.entries.get(ordinal)
    }

    /// All member entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[MemberEntry] {
        &self.entries
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct normalized keys in the index.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.index.len()
    }
}
