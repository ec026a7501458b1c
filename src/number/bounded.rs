use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Fixed-width integer with known bounds, usable for overflow-checked accumulation
///
/// `from_digit` widens a small literal (a decimal digit, or ten) into the
/// type. `LABEL` is the failure label of the matching parser.
pub trait Bounded:
    Copy
    + Ord
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const MAX: Self;
    const MIN: Self;
    const LABEL: &'static str;

    fn from_digit(digit: u8) -> Self;
}

pub trait UnsignedInt: Bounded {}

pub trait SignedInt: Bounded {}

macro_rules! impl_bounded {
    ($marker:ident: $($ty:ty => $label:literal),+ $(,)?) => {
        $(
            impl Bounded for $ty {
                const MAX: Self = <$ty>::MAX;
                const MIN: Self = <$ty>::MIN;
                const LABEL: &'static str = $label;

                fn from_digit(digit: u8) -> Self {
                    // Only ever called with 0..=10, which every width can hold
                    digit as $ty
                }
            }

            impl $marker for $ty {}
        )+
    };
}

impl_bounded!(UnsignedInt:
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    usize => "uint",
);

impl_bounded!(SignedInt:
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    isize => "int",
);
