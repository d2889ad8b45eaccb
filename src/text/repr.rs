//! Debug rendering for domain values that wrap a displayable value.

use std::fmt::Display;

/// Render `TypeName('display')`.
///
/// ```
/// use poker_enums::text::repr;
///
/// assert_eq!(repr("Card", &"As"), "Card('As')");
/// ```
#[must_use]
pub fn repr(type_name: &str, value: &impl Display) -> String {
    format!("{type_name}('{value}')")
}
