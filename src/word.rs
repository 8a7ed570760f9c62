use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, BitXorAssign, Shl, ShlAssign};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned word usable as register storage. Implemented for
/// `u8`, `u16`, `u32` and `u64`; the register width is whatever the word
/// holds, with the natural truncating shift of that width.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + Shl<u32, Output = Self>
    + ShlAssign<u32>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
{
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;

    /// Truncating conversion, keeping the low `BITS` bits.
    fn from_u64(value: u64) -> Self;

    fn to_u64(self) -> u64;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                fn from_u64(value: u64) -> Self {
                    value as $ty
                }

                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
