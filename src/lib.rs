//! # textcomb - Parser Combinators over Text
//!
//! Small parsers are plain values; combinators build bigger parsers out of
//! them. A parser walks an immutable [`TextCursor`] and either succeeds
//! with a value and an advanced cursor or fails with a single label.
//!
//! - **Backtracking**: [`or`](or::or) always retries from where it started,
//!   however far the failed branch got
//! - **Reusable parsers**: parsers keep no state between runs and can be
//!   shared across threads
//! - **Overflow-safe numbers**: decimal conversion checks bounds before
//!   every step and never wraps
//!
//! ```
//! use textcomb::prelude::*;
//!
//! let octet = || uint8().then_skip(skip_char('.'));
//! let ip = octet().bind(|a| {
//!     octet().bind(move |b| octet().bind(move |c| uint8().map(move |d| [a, b, c, d])))
//! });
//!
//! assert_eq!(parse(&ip, "192.168.0.1"), Ok([192, 168, 0, 1]));
//! assert_eq!(parse(&ip, "192.168.0.256").unwrap_err().label(), "uint8");
//! ```

pub mod apply;
pub mod ascii;
pub mod bind;
pub mod char;
pub mod cursor;
pub mod error;
pub mod inspect;
pub mod map;
pub mod number;
pub mod or;
pub mod parser;
pub mod pure;
pub mod repeat;
pub mod scan;
pub mod sequence;
pub mod string;

pub use cursor::TextCursor;
pub use error::{Failure, ParseError};
pub use parser::{BoxedParser, ParseStep, Parser, parse};

/// Everything needed to build and run parsers with one import
pub mod prelude {
    pub use crate::apply::{ApplyExt, apply};
    pub use crate::ascii::{is_digit, is_horizontal_space, is_space};
    pub use crate::bind::{BindExt, bind};
    pub use crate::char::{any_char, char, satisfy, satisfy_with, skip, skip_char};
    pub use crate::cursor::TextCursor;
    pub use crate::error::{Failure, ParseError};
    pub use crate::inspect::{InspectExt, inspect};
    pub use crate::map::{MapExt, map};
    pub use crate::number::{
        DecimalStr, double, int, int8, int16, int32, int64, uint, uint8, uint16, uint32, uint64,
    };
    pub use crate::or::{OrExt, or};
    pub use crate::parser::{BoxedExt, BoxedParser, ParseStep, Parser, from_fn, parse};
    pub use crate::pure::{fail, succeed};
    pub use crate::repeat::{many, some};
    pub use crate::scan::{run_scanner, scan};
    pub use crate::sequence::{SequenceExt, then, then_skip};
    pub use crate::string::{
        string, take, take_if, take_text, take_till, take_till_char, take_while, take_while1,
        take_with,
    };
}
