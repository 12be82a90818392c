// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width word helpers

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Rem, Shr};

pub trait WideningMultiply<RHS = Self> {
    type Output;

    fn wmul(self, x: RHS) -> Self::Output;
}

macro_rules! wmul_impl {
    ($ty:ty, $wide:ty, $shift:expr) => {
        impl WideningMultiply for $ty {
            type Output = ($ty, $ty);

            #[inline(always)]
            fn wmul(self, x: $ty) -> Self::Output {
                let tmp = (self as $wide) * (x as $wide);
                ((tmp >> $shift) as $ty, tmp as $ty)
            }
        }
    };
}
wmul_impl! { u16, u32, 16 }
wmul_impl! { u32, u64, 32 }
#[cfg(target_pointer_width = "64")]
wmul_impl! { u64, u128, 64 }

// Schoolbook multiplication on 32-bit halves, after `__mulddi3` in LLVM's
// compiler-rt. Only native-width multiplies are needed, which keeps 64-bit
// sampling off the emulated 128-bit path on narrower targets.
#[cfg_attr(target_pointer_width = "64", allow(dead_code))]
#[inline(always)]
pub(crate) fn wmul_by_halves(a: u64, b: u64) -> (u64, u64) {
    const HALF: u32 = 32;
    const LOWER_MASK: u64 = !0 >> HALF;
    let mut low = (a & LOWER_MASK).wrapping_mul(b & LOWER_MASK);
    let mut t = low >> HALF;
    low &= LOWER_MASK;
    t += (a >> HALF).wrapping_mul(b & LOWER_MASK);
    low += (t & LOWER_MASK) << HALF;
    let mut high = t >> HALF;
    t = low >> HALF;
    low &= LOWER_MASK;
    t += (b >> HALF).wrapping_mul(a & LOWER_MASK);
    low += (t & LOWER_MASK) << HALF;
    high += t >> HALF;
    high += (a >> HALF).wrapping_mul(b >> HALF);

    (high, low)
}

#[cfg(not(target_pointer_width = "64"))]
impl WideningMultiply for u64 {
    type Output = (u64, u64);

    #[inline(always)]
    fn wmul(self, x: u64) -> Self::Output {
        wmul_by_halves(self, x)
    }
}

/// An unsigned machine word the bounded samplers operate on.
///
/// Implemented for `u16`, `u32` and `u64` only; the trait cannot be
/// implemented outside this crate. Every value fits into a `u64`, which is
/// what [`BitsEngine`](crate::BitsEngine) uses to move bits between a
/// generator's native width and the requested width.
pub trait Word:
    private::Sealed
    + Copy
    + Debug
    + Default
    + Eq
    + Ord
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shr<u32, Output = Self>
    + Rem<Output = Self>
    + WideningMultiply<Output = (Self, Self)>
{
    /// Width in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn leading_zeros(self) -> u32;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Two's complement negation, i.e. `0 - self` modulo `2^BITS`.
    fn wrapping_neg(self) -> Self;

    /// Keep the low `BITS` bits of `x`.
    fn truncate(x: u64) -> Self;
    fn widen(self) -> u64;
}

mod private {
    pub trait Sealed {}
}

macro_rules! word_impl {
    ($($ty:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$ty>::wrapping_neg(self)
            }

            #[inline(always)]
            fn truncate(x: u64) -> Self {
                x as $ty
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    )*};
}
word_impl! { u16, u32, u64 }
