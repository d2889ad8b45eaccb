//! Members - handles to one value of an enumeration type.
//!
//! A `Member` is a copyable `(type, ordinal)` pair. Equality, hashing and
//! ordering use only the type's `EnumId` and the ordinal, never alias text
//! or numeric alias values.
//!
//! Members of different types are never equal and never ordered:
//! `partial_cmp` returns `None` and `try_cmp` returns
//! `EnumError::IncomparableMembers`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::core::{Alias, EnumError};

use super::enum_type::EnumType;
use super::table::MemberEntry;

/// One value of an `EnumType`.
#[derive(Clone, Copy)]
pub struct Member<'t> {
    ty: &'t EnumType,
    ordinal: usize,
}

impl<'t> Member<'t> {
    /// Caller guarantees `ordinal < ty.len()`.
    pub(crate) fn new(ty: &'t EnumType, ordinal: usize) -> Self {
        debug_assert!(ordinal < ty.len());
        Self { ty, ordinal }
    }

    fn entry(&self) -> &'t MemberEntry {
        &self.ty.table().entries()[self.ordinal]
    }

    /// Zero-based position in declaration order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Declared member name.
    #[must_use]
    pub fn name(&self) -> &'t str {
        &self.entry().name
    }

    /// All aliases in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &'t [Alias] {
        &self.entry().aliases
    }

    /// The canonical (first) alias.
    #[must_use]
    pub fn canonical(&self) -> &'t Alias {
        self.entry().canonical()
    }

    /// The type this member belongs to.
    #[must_use]
    pub fn enum_type(&self) -> &'t EnumType {
        self.ty
    }

    /// Check if both members belong to the same type.
    #[must_use]
    pub fn same_type(&self, other: &Member<'_>) -> bool {
        self.ty.id() == other.ty.id()
    }

    /// Compare by declaration order, failing across types.
    pub fn try_cmp(&self, other: &Member<'_>) -> Result<Ordering, EnumError> {
        if self.same_type(other) {
            Ok(self.ordinal.cmp(&other.ordinal))
        } else {
            Err(EnumError::IncomparableMembers {
                left: self.ty.name().to_string(),
                right: other.ty.name().to_string(),
            })
        }
    }
}

impl PartialEq<Member<'_>> for Member<'_> {
    fn eq(&self, other: &Member<'_>) -> bool {
        self.same_type(other) && self.ordinal == other.ordinal
    }
}

impl Eq for Member<'_> {}

impl Hash for Member<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.id().hash(state);
        self.ordinal.hash(state);
    }
}

impl PartialOrd<Member<'_>> for Member<'_> {
    fn partial_cmp(&self, other: &Member<'_>) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.canonical(), f)
    }
}

impl std::fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.ty.name(), self.canonical().quoted())
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::enums::EnumDecl;

    fn level() -> EnumType {
        EnumDecl::new("Level")
            .with_member("Low", vec![Alias::from("low"), Alias::from(30)])
            .with_member("Mid", vec![Alias::from("mid"), Alias::from(20)])
            .with_member("High", vec![Alias::from(10), Alias::from("high")])
            .declare()
            .unwrap()
    }

    #[test]
    fn test_order_is_declaration_order() {
        let level = level();
        let low = level.resolve("low").unwrap();
        let mid = level.resolve("mid").unwrap();
        let high = level.resolve("high").unwrap();

        // Numeric aliases run the other way; they must not matter
        assert!(low < mid);
        assert!(mid < high);
        assert!(low < high);
        assert_eq!(mid, level.resolve(20).unwrap());
        assert_eq!(mid.try_cmp(&mid), Ok(Ordering::Equal));
    }

    #[test]
    fn test_cross_type_not_comparable() {
        let a = level();
        let b = level();
        let low_a = a.resolve("low").unwrap();
        let low_b = b.resolve("low").unwrap();

        assert_ne!(low_a, low_b);
        assert_eq!(low_a.partial_cmp(&low_b), None);
        assert!(!(low_a < low_b) && !(low_b < low_a));
        assert_eq!(
            low_a.try_cmp(&low_b),
            Err(EnumError::IncomparableMembers {
                left: "Level".into(),
                right: "Level".into(),
            })
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let level = level();
        let mut seen = FxHashSet::default();
        seen.insert(level.resolve("LOW").unwrap());
        seen.insert(level.resolve(30).unwrap());
        seen.insert(level.resolve("high").unwrap());
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_accessors() {
        let level = level();
        let high = level.resolve("HIGH").unwrap();

        assert_eq!(high.name(), "High");
        assert_eq!(high.ordinal(), 2);
        assert_eq!(high.canonical(), &Alias::from(10));
        assert_eq!(high.aliases().len(), 2);
        assert_eq!(high.enum_type().name(), "Level");
    }

    #[test]
    fn test_display_and_debug() {
        let level = level();
        let low = level.resolve(30).unwrap();
        let high = level.resolve("high").unwrap();

        assert_eq!(low.to_string(), "low");
        assert_eq!(format!("{:?}", low), "Level('low')");
        assert_eq!(high.to_string(), "10");
        assert_eq!(format!("{:?}", high), "Level(10)");
    }

    #[test]
    fn test_sort_members() {
        let level = level();
        let mut members: Vec<_> = level.members().rev().collect();
        members.sort_by(|a, b| a.try_cmp(b).unwrap());
        let names: Vec<_> = members.iter().map(Member::name).collect();
        assert_eq!(names, vec!["Low", "Mid", "High"]);
    }
}
