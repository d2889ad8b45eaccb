//! Enumeration framework integration tests.
//!
//! These tests exercise declared types end to end:
//! - Declaration order, ordinals and iteration
//! - Case-insensitive lookup and canonical round trips
//! - First-declared-wins alias precedence
//! - Rejection of malformed declarations
//! - Uniform sampling

use poker_enums::core::{Alias, EnumError, EnumRng};
use poker_enums::enums::{AliasSpec, EnumDecl, EnumType, Member};

fn rank() -> EnumType {
    EnumDecl::new("Rank")
        .with_member("Deuce", vec![Alias::from("2"), Alias::from(2), Alias::from("Deuce")])
        .with_member("Three", vec![Alias::from("3"), Alias::from(3), Alias::from("Trey")])
        .with_member("Ten", vec![Alias::from("T"), Alias::from(10), Alias::from("10")])
        .with_member("Jack", vec![Alias::from("J"), Alias::from(11), Alias::from("Jack")])
        .with_member("Ace", vec![Alias::from("A"), Alias::from(14), Alias::from(1), Alias::from("Ace")])
        .declare()
        .expect("rank declaration is valid")
}

// =============================================================================
// Declaration Order
// =============================================================================

/// Members come back in declaration order with matching ordinals.
#[test]
fn test_all_members_in_declaration_order() {
    let rank = rank();
    let names: Vec<_> = rank.members().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Deuce", "Three", "Ten", "Jack", "Ace"]);

    for (index, member) in rank.members().enumerate() {
        assert_eq!(member.ordinal(), index);
        assert_eq!(rank.member(index), Some(member));
    }

    // The view is restartable
    assert_eq!(rank.members().count(), rank.members().count());
}

/// Ordering follows declaration, not alias values.
#[test]
fn test_ordering_matches_declaration() {
    let level = EnumDecl::new("Level")
        .with_member("Low", vec![Alias::from("z"), Alias::from(99)])
        .with_member("Mid", vec![Alias::from("m"), Alias::from(50)])
        .with_member("High", vec![Alias::from("a"), Alias::from(0)])
        .declare()
        .unwrap();

    let low = level.resolve("Z").unwrap();
    let mid = level.resolve("M").unwrap();
    let high = level.resolve("A").unwrap();

    assert!(low < mid && mid < high && low < high);
    assert_eq!(mid, level.resolve(50).unwrap());
    assert!(!(high < low));
}

// =============================================================================
// Lookup
// =============================================================================

/// Every member resolves from its display string.
#[test]
fn test_canonical_round_trip() {
    let rank = rank();
    for member in rank.members() {
        assert_eq!(rank.resolve(member.to_string()).unwrap(), member);
        assert_eq!(rank.resolve(member.canonical()).unwrap(), member);
    }
}

/// Text aliases resolve in any case.
#[test]
fn test_case_insensitive_lookup() {
    let rank = rank();
    for member in rank.members() {
        for alias in member.aliases() {
            if let Some(text) = alias.as_text() {
                assert_eq!(rank.resolve(text).unwrap(), member);
                assert_eq!(rank.resolve(text.to_uppercase()).unwrap(), member);
                assert_eq!(rank.resolve(text.to_lowercase()).unwrap(), member);
            }
        }
    }
}

/// Numeric aliases resolve exactly, and integral floats match integers.
#[test]
fn test_numeric_lookup() {
    let rank = rank();
    let ace = rank.member_by_name("Ace").unwrap();

    assert_eq!(rank.resolve(14).unwrap(), ace);
    assert_eq!(rank.resolve(1).unwrap(), ace);
    assert_eq!(rank.resolve(14.0).unwrap(), ace);
    assert!(rank.resolve(14.5).is_err());

    // "10" text and 10 numeric are different keys owned by the same member
    let ten = rank.member_by_name("Ten").unwrap();
    assert_eq!(rank.resolve("10").unwrap(), ten);
    assert_eq!(rank.resolve(10).unwrap(), ten);
}

/// Misses fail with UnknownAlias and change no lookup result.
#[test]
fn test_unknown_alias() {
    let rank = rank();

    let err = rank.resolve("Joker").unwrap_err();
    assert_eq!(
        err,
        EnumError::UnknownAlias {
            type_name: "Rank".into(),
            value: Alias::from("Joker"),
        }
    );
    assert!(matches!(rank.resolve(99), Err(EnumError::UnknownAlias { .. })));

    assert!(rank.resolve("Joker").is_err());
    assert!(!rank.contains("JOKER"));
    for member in rank.members() {
        for alias in member.aliases() {
            assert_eq!(rank.resolve(alias).unwrap(), member);
        }
    }
}

// =============================================================================
// Alias Precedence
// =============================================================================

/// A shared alias belongs to the member declared first.
#[test]
fn test_first_declared_wins() {
    let clash = EnumDecl::new("Clash")
        .with_member("A", ["X"])
        .with_member("B", ["X"])
        .declare()
        .unwrap();

    let a = clash.member_by_name("A").unwrap();
    let b = clash.member_by_name("B").unwrap();

    assert_eq!(clash.resolve("x").unwrap(), a);
    assert_eq!(clash.resolve("X").unwrap(), a);
    // B is still a member, reachable by name and iteration
    assert_eq!(b.to_string(), "X");
    assert_eq!(clash.members().nth(1), Some(b));
}

/// Precedence is decided on normalized keys.
#[test]
fn test_first_declared_wins_after_case_folding() {
    let clash = EnumDecl::new("Clash")
        .with_member("Lower", ["jack"])
        .with_member("Upper", ["JACK", "j"])
        .declare()
        .unwrap();

    assert_eq!(clash.resolve("Jack").unwrap().name(), "Lower");
    assert_eq!(clash.resolve("J").unwrap().name(), "Upper");
}

// =============================================================================
// Malformed Declarations
// =============================================================================

/// A bare text value where a list was expected is rejected.
#[test]
fn test_bare_scalar_rejected() {
    let result = EnumDecl::new("Suit")
        .with_member("Clubs", ["c", "clubs"])
        .with_member("Hearts", "hearts")
        .declare();

    assert_eq!(
        result.unwrap_err(),
        EnumError::InvalidAliasDeclaration {
            member: "Hearts".into(),
            received: "'hearts'".into(),
        }
    );
}

/// A bare number is rejected the same way.
#[test]
fn test_bare_number_rejected() {
    let result = EnumDecl::new("Rank").with_member("Deuce", 2).declare();
    assert!(matches!(
        result,
        Err(EnumError::InvalidAliasDeclaration { ref member, .. }) if member == "Deuce"
    ));
}

/// Declarations loaded from JSON hit the same guard.
#[test]
fn test_json_declaration() {
    let good: EnumDecl = serde_json::from_str(
        r#"{"name": "Suit", "members": [
            {"name": "Clubs", "aliases": ["c", "clubs"]},
            {"name": "Spades", "aliases": ["s", "spades"]}
        ]}"#,
    )
    .unwrap();
    let suit = good.declare().unwrap();
    assert_eq!(suit.resolve("SPADES").unwrap().name(), "Spades");

    let bad: EnumDecl = serde_json::from_str(
        r#"{"name": "Suit", "members": [
            {"name": "Clubs", "aliases": "clubs"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(bad.members[0].aliases, AliasSpec::Scalar("clubs".into()));
    assert!(matches!(
        bad.declare(),
        Err(EnumError::InvalidAliasDeclaration { .. })
    ));
}

/// Empty alias lists, empty types and reused names are rejected.
#[test]
fn test_other_malformed_declarations() {
    assert!(matches!(
        EnumDecl::new("T").with_member("A", Vec::<Alias>::new()).declare(),
        Err(EnumError::InvalidAliasDeclaration { .. })
    ));
    assert!(matches!(
        EnumDecl::new("T").declare(),
        Err(EnumError::EmptyEnumeration { .. })
    ));
    assert!(matches!(
        EnumDecl::new("T").with_member("A", ["a"]).with_member("A", ["b"]).declare(),
        Err(EnumError::DuplicateMember { .. })
    ));
}

// =============================================================================
// Cross-Type Comparison
// =============================================================================

/// Members of different types are neither equal nor ordered.
#[test]
fn test_cross_type_comparison_fails() {
    let first = rank();
    let second = rank();
    let a = first.resolve("A").unwrap();
    let b = second.resolve("A").unwrap();

    assert_ne!(a, b);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(matches!(a.try_cmp(&b), Err(EnumError::IncomparableMembers { .. })));
}

// =============================================================================
// Formatting
// =============================================================================

/// Display is the canonical alias; Debug wraps it with the type name.
#[test]
fn test_display_and_debug() {
    let rank = rank();
    let ace = rank.resolve("ace").unwrap();
    assert_eq!(ace.to_string(), "A");
    assert_eq!(format!("{:?}", ace), "Rank('A')");

    let numbered = EnumDecl::new("Seat")
        .with_member("First", vec![Alias::from(1), Alias::from("first")])
        .declare()
        .unwrap();
    let first = numbered.resolve("FIRST").unwrap();
    assert_eq!(first.to_string(), "1");
    assert_eq!(format!("{:?}", first), "Seat(1)");
}

// =============================================================================
// Sampling
// =============================================================================

/// Sampling visits every member with roughly equal frequency.
#[test]
fn test_sample_uniform() {
    let rank = rank();
    let mut rng = EnumRng::new(2024);
    let draws = 50_000;
    let mut counts = vec![0usize; rank.len()];

    for _ in 0..draws {
        counts[rank.sample(&mut rng).ordinal()] += 1;
    }

    let expected = draws as f64 / rank.len() as f64;
    for count in counts {
        assert!(count > 0);
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(deviation < 0.05, "count {count} too far from {expected}");
    }
}

/// The thread-local source also only yields members of the type.
#[test]
fn test_sample_random() {
    let rank = rank();
    let seen: std::collections::HashSet<Member<'_>> =
        (0..500).map(|_| rank.sample_random()).collect();
    assert_eq!(seen.len(), rank.len());
}

// =============================================================================
// Sharing
// =============================================================================

/// A declared type can be read from many threads at once.
#[test]
fn test_concurrent_reads() {
    let rank = rank();

    std::thread::scope(|scope| {
        for seed in 0..4 {
            let rank = &rank;
            scope.spawn(move || {
                let mut rng = EnumRng::new(seed);
                for _ in 0..1000 {
                    let member = rank.sample(&mut rng);
                    assert_eq!(rank.resolve(member.to_string()).unwrap(), member);
                }
            });
        }
    });
}
