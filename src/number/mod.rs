//! Numeric parsers and the overflow-safe conversions behind them
//!
//! The conversions work on plain `&str` and are usable without any parser.
//! The parsers find the digit span at the cursor and hand it to the
//! conversion for their width, failing with the width's label
//! (`"uint8"`, `"int64"`, ...) when the value does not fit.

pub mod bounded;
pub mod convert;
pub mod float;
pub mod signed;
pub mod unsigned;

pub use bounded::{Bounded, SignedInt, UnsignedInt};
pub use convert::{DecimalStr, to_double, to_signed, to_unsigned};
pub use float::{DoubleParser, double};
pub use signed::{SignedParser, int, int8, int16, int32, int64, signed};
pub use unsigned::{UnsignedParser, uint, uint8, uint16, uint32, uint64, unsigned};
