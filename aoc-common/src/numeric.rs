//! Numeric concepts shared by the splitter and the point type

use num_traits::{AsPrimitive, Num, PrimInt};
use std::num::ParseIntError;

/// Any primitive arithmetic type (integers and floats)
///
/// Implemented automatically; the `AsPrimitive<f64>` bound is what lets
/// lengths always be computed in double precision.
pub trait Numeric: Num + Copy + PartialOrd + AsPrimitive<f64> {}

impl<T> Numeric for T where T: Num + Copy + PartialOrd + AsPrimitive<f64> {}

/// Primitive integer types that can be parsed from text in an arbitrary radix
pub trait Integral: Numeric + PrimInt<FromStrRadixErr = ParseIntError> {}

impl<T> Integral for T where T: Numeric + PrimInt<FromStrRadixErr = ParseIntError> {}

/// Hash of a single point component
///
/// Integers hash to their value sign-extended (or truncated) to 64 bits.
/// Floats hash to their IEEE-754 bits, with `-0.0` folded onto `0.0` so
/// that values comparing equal hash equally.
pub trait ComponentHash {
    fn component_hash(&self) -> u64;
}

macro_rules! impl_integer_component_hash {
    ($($t:ty),* $(,)?) => {
        $(
            impl ComponentHash for $t {
                #[inline]
                fn component_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_integer_component_hash!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ComponentHash for f32 {
    #[inline]
    fn component_hash(&self) -> u64 {
        if *self == 0.0 {
            0
        } else {
            u64::from(self.to_bits())
        }
    }
}

impl ComponentHash for f64 {
    #[inline]
    fn component_hash(&self) -> u64 {
        if *self == 0.0 { 0 } else { self.to_bits() }
    }
}
