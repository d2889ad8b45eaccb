//! Native Rust enums backed by an `EnumType`.
//!
//! `alias_enum!` declares a plain `enum` whose variant order is the member
//! order, plus a lazily built `EnumType` holding its aliases. Ordering and
//! hashing are derived on the Rust enum, so comparing two different
//! vocabularies is a type error rather than a runtime failure.
//!
//! ```
//! use poker_enums::alias_enum;
//! use poker_enums::enums::AliasEnum;
//!
//! alias_enum! {
//!     /// Traffic light state.
//!     pub enum Light {
//!         Red => ["red", "r", 0],
//!         Amber => ["amber", "yellow"],
//!         Green => ["green", "g", 2],
//!     }
//! }
//!
//! assert_eq!("YELLOW".parse::<Light>().unwrap(), Light::Amber);
//! assert_eq!(Light::try_from(2).unwrap(), Light::Green);
//! assert!(Light::Red < Light::Green);
//! assert_eq!(Light::Green.to_string(), "green");
//! assert_eq!(format!("{:?}", Light::Green), "Light('green')");
//! ```

use std::hash::Hash;

use rand::Rng;

use crate::core::{Alias, EnumError};

use super::enum_type::EnumType;
use super::member::Member;

/// A Rust enum whose variants are the members of an `EnumType`.
///
/// Implemented by `alias_enum!`; `ALL` lists the variants in declaration
/// order and `ordinal` is the variant's index in `ALL`.
pub trait AliasEnum: Copy + Eq + Ord + Hash + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The backing type, built on first use.
    fn enum_type() -> &'static EnumType;

    /// Zero-based position in declaration order.
    fn ordinal(self) -> usize;

    /// The variant at an ordinal.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Iterate over all variants in declaration order.
    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::ALL.iter().copied()
    }

    /// The dynamic member for this variant.
    fn member(self) -> Member<'static> {
        Member::new(Self::enum_type(), self.ordinal())
    }

    /// Declared variant name.
    fn name(self) -> &'static str {
        self.member().name()
    }

    /// The canonical (first) alias.
    fn canonical(self) -> &'static Alias {
        self.member().canonical()
    }

    /// All aliases in declaration order.
    fn aliases(self) -> &'static [Alias] {
        self.member().aliases()
    }

    /// Find the variant owning a value (text is case-insensitive).
    fn resolve(value: impl Into<Alias>) -> Result<Self, EnumError> {
        let member = Self::enum_type().resolve(value)?;
        Ok(Self::ALL[member.ordinal()])
    }

    /// Choose a variant uniformly at random.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[Self::enum_type().sample(rng).ordinal()]
    }

    /// Choose a variant uniformly using the thread-local RNG.
    fn random() -> Self {
        Self::sample(&mut rand::thread_rng())
    }
}

/// Declare a native enum with case-insensitive, multi-alias lookup.
///
/// Each variant lists at least one alias; the first is canonical and is
/// used by `Display`. Generated items:
///
/// - the `enum` with derived `Clone`, `Copy`, `Eq`, `Ord` and `Hash`
///   (declaration order)
/// - `AliasEnum`, `Display`, `Debug` (`Name('alias')`), `FromStr` and
///   `TryFrom<i64>`
#[macro_export]
macro_rules! alias_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => [$first:expr $(, $rest:expr)* $(,)?]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::enums::AliasEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn enum_type() -> &'static $crate::enums::EnumType {
                static TYPE: ::std::sync::OnceLock<$crate::enums::EnumType> =
                    ::std::sync::OnceLock::new();
                TYPE.get_or_init(|| {
                    $crate::enums::EnumDecl::new(::std::stringify!($name))
                        $(
                            .with_member(
                                ::std::stringify!($variant),
                                ::std::vec![
                                    $crate::core::Alias::from($first)
                                    $(, $crate::core::Alias::from($rest))*
                                ],
                            )
                        )+
                        .declare()
                        .unwrap_or_else(|err| ::std::panic!("{}", err))
                })
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::enums::AliasEnum::member(*self), f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&$crate::enums::AliasEnum::member(*self), f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::EnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::enums::AliasEnum>::resolve(s)
            }
        }

        impl ::std::convert::TryFrom<i64> for $name {
            type Error = $crate::core::EnumError;

            fn try_from(value: i64) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::enums::AliasEnum>::resolve(value)
            }
        }
    };
}
