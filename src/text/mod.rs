//! Text helpers used alongside the enumeration types.
//!
//! - `make_int` / `make_float`: parse formatted numeric text before it is
//!   handed to `resolve` or used as an alias
//! - `repr`: `TypeName('value')` debug rendering for wrapper types

pub mod numeric;
pub mod repr;

pub use numeric::{make_float, make_int, NumericParseError};
pub use repr::repr;
