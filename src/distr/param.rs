// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Range parameters and the supported result types

use core::fmt::Debug;

use super::Word;
use crate::Error;

/// Integer types [`UniformFast`](super::UniformFast) can produce.
///
/// Implemented for the 16-, 32- and 64-bit signed and unsigned integers.
/// Narrower types are deliberately unsupported:
///
/// ```compile_fail
/// let _ = rand_bounded::UniformFast::new(0u8, 9);
/// ```
pub trait SampleBounded: Copy + Debug + PartialOrd {
    /// The unsigned type of the same width; conversions are bit casts.
    type Unsigned: Word;

    const MIN: Self;
    const MAX: Self;

    fn to_unsigned(self) -> Self::Unsigned;
    fn from_unsigned(bits: Self::Unsigned) -> Self;
}

macro_rules! sample_bounded_impl {
    ($ty:ty, $uty:ty) => {
        impl SampleBounded for $ty {
            // We play free and fast with unsigned vs signed here: $ty and $uty
            // are bit-equal, so casting between them is a no-op.
            type Unsigned = $uty;

            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            #[inline(always)]
            fn to_unsigned(self) -> $uty {
                self as $uty
            }

            #[inline(always)]
            fn from_unsigned(bits: $uty) -> Self {
                bits as $ty
            }
        }
    };
}

sample_bounded_impl! { i16, u16 }
sample_bounded_impl! { i32, u32 }
sample_bounded_impl! { i64, u64 }
sample_bounded_impl! { u16, u16 }
sample_bounded_impl! { u32, u32 }
sample_bounded_impl! { u64, u64 }

/// The bounds of a [`UniformFast`](super::UniformFast): `min` and the number
/// of values in the range.
///
/// For a closed range `[a, b]` the width is `b - a + 1`, computed in the
/// unsigned type of the same size. The width of the full domain
/// (`a == T::MIN`, `b == T::MAX`) is one more than the largest unsigned value
/// and wraps to `0`; a width of `0` therefore stands for "every value of
/// `T`", and sampling it needs no rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param<T: SampleBounded> {
    min: T,
    range: T::Unsigned,
}

impl<T: SampleBounded> Param<T> {
    /// Bounds for the closed range `[a, b]`.
    ///
    /// # Panics
    ///
    /// If `a > b`.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        assert!(a <= b, "Param::new called with `low > high`");
        Self::new_unchecked(a, b)
    }

    /// Bounds for the closed range `[a, b]`, or [`Error::EmptyRange`] if
    /// `a > b`.
    #[inline]
    pub fn try_new(a: T, b: T) -> Result<Self, Error> {
        if !(a <= b) {
            return Err(Error::EmptyRange);
        }
        Ok(Self::new_unchecked(a, b))
    }

    /// Bounds covering every value of `T`.
    #[inline]
    pub fn full() -> Self {
        Param {
            min: T::MIN,
            range: <T::Unsigned as Word>::ZERO,
        }
    }

    #[inline(always)]
    fn new_unchecked(a: T, b: T) -> Self {
        // wraps to 0 for the full domain
        let range = b
            .to_unsigned()
            .wrapping_sub(a.to_unsigned())
            .wrapping_add(<T::Unsigned as Word>::ONE);
        Param { min: a, range }
    }

    /// The inclusive lower bound.
    #[inline]
    pub fn a(&self) -> T {
        self.min
    }

    /// The inclusive upper bound.
    #[inline]
    pub fn b(&self) -> T {
        if self.is_full() {
            return T::MAX;
        }
        T::from_unsigned(
            self.min
                .to_unsigned()
                .wrapping_add(self.range)
                .wrapping_sub(<T::Unsigned as Word>::ONE),
        )
    }

    /// Number of values in the range; `0` for the full domain.
    #[inline]
    pub fn range(&self) -> T::Unsigned {
        self.range
    }

    /// True if the range is the whole domain of `T`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.range == <T::Unsigned as Word>::ZERO
    }
}

impl<T: SampleBounded> Default for Param<T> {
    fn default() -> Self {
        Self::full()
    }
}
