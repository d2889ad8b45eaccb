//! Parsing of formatted numeric text such as `" 1,250 "` or `"3,000.50"`.
//!
//! Surrounding whitespace is trimmed and every `,` thousands separator is
//! removed before parsing. Anything else malformed is an error.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Error from parsing formatted numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericParseError {
    /// Not a valid integer after cleanup.
    #[error("invalid integer {input:?}: {source}")]
    Int {
        input: String,
        source: ParseIntError,
    },

    /// Not a valid float after cleanup.
    #[error("invalid float {input:?}: {source}")]
    Float {
        input: String,
        source: ParseFloatError,
    },
}

fn clean(input: &str) -> String {
    input.trim().replace(',', "")
}

/// Parse an integer, ignoring surrounding whitespace and `,` separators.
///
/// ```
/// use poker_enums::text::make_int;
///
/// assert_eq!(make_int(" 1,250 ").unwrap(), 1250);
/// assert!(make_int("12.5").is_err());
/// ```
pub fn make_int(input: &str) -> Result<i64, NumericParseError> {
    clean(input)
        .parse()
        .map_err(|source| NumericParseError::Int {
            input: input.to_string(),
            source,
        })
}

/// Parse a float, ignoring surrounding whitespace and `,` separators.
///
/// ```
/// use poker_enums::text::make_float;
///
/// assert_eq!(make_float("3,000.50").unwrap(), 3000.5);
/// ```
pub fn make_float(input: &str) -> Result<f64, NumericParseError> {
    clean(input)
        .parse()
        .map_err(|source| NumericParseError::Float {
            input: input.to_string(),
            source,
        })
}
