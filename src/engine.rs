// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw bit sources and the width adapter in front of them

use core::fmt;
use core::marker::PhantomData;

use rand_core::RngCore;

use crate::distr::Word;

/// A source of uniformly distributed fixed-width unsigned words.
///
/// This is the only capability the bounded samplers need from a generator:
/// every call to [`generate`] yields a value uniformly distributed over
/// `[MIN, MAX]`, and the bit-extraction in [`BitsEngine`] additionally
/// requires that interval to be the whole of `Output`.
///
/// Every [`RngCore`] is a `BitGenerator` with a native width of 64 bits
/// (through `next_u64`). Generators which only produce narrower words can
/// implement this trait directly:
///
/// ```
/// use rand_bounded::{BitGenerator, UniformFast};
///
/// /// A 32-bit multiplicative congruential generator.
/// struct Lehmer32(u64);
///
/// impl BitGenerator for Lehmer32 {
///     type Output = u32;
///
///     fn generate(&mut self) -> u32 {
///         self.0 = self.0.wrapping_mul(0xda94_2042_e4dd_58b5);
///         (self.0 >> 32) as u32
///     }
/// }
///
/// let mut rng = Lehmer32(0x9f57_c403_d06c_42fd);
/// let die = UniformFast::new(1u64, 6);
/// let roll = die.sample(&mut rng);
/// assert!((1..=6).contains(&roll));
/// ```
///
/// [`generate`]: BitGenerator::generate
pub trait BitGenerator {
    /// The native output word.
    type Output: Word;

    /// Smallest value `generate` can return.
    const MIN: Self::Output = <Self::Output as Word>::ZERO;
    /// Largest value `generate` can return.
    const MAX: Self::Output = <Self::Output as Word>::MAX;

    /// Return the next word.
    fn generate(&mut self) -> Self::Output;
}

impl<R: RngCore + ?Sized> BitGenerator for R {
    type Output = u64;

    #[inline(always)]
    fn generate(&mut self) -> u64 {
        self.next_u64()
    }
}

/// Delivers exactly `W::BITS` uniform bits per call from a generator of any
/// supported native width.
///
/// - If the native width equals `W::BITS`, words are passed through.
/// - If it is wider, each native word is split into `G::BITS / W::BITS`
///   disjoint chunks, least significant first. Unused chunks stay buffered
///   in the engine, so the retry loop of a single sampling call does not
///   spend a fresh generator call on every attempt.
/// - If it is narrower, `W::BITS / G::BITS` native words are concatenated,
///   the first one in the least significant position.
///
/// The engine borrows the generator and never copies its state. It lives for
/// one sampling call; any bits still buffered when it is dropped are
/// discarded.
pub struct BitsEngine<'a, G: BitGenerator + ?Sized, W: Word> {
    rng: &'a mut G,
    buf: u64,
    // chunks of `W` left in `buf`
    left: u32,
    word: PhantomData<W>,
}

impl<'a, G: BitGenerator + ?Sized, W: Word> BitsEngine<'a, G, W> {
    /// Wrap `rng`.
    ///
    /// # Panics
    ///
    /// If `G::MIN` is not zero or `G::MAX` is not all ones: the generator
    /// must cover its full native width for bits to be extracted from it.
    #[inline]
    pub fn new(rng: &'a mut G) -> Self {
        assert!(
            G::MIN == <G::Output as Word>::ZERO && G::MAX == <G::Output as Word>::MAX,
            "BitsEngine: generator must span its whole output width"
        );
        BitsEngine {
            rng,
            buf: 0,
            left: 0,
            word: PhantomData,
        }
    }

    /// True if the generator's native width already matches `W`, so no
    /// narrowing or widening takes place.
    #[inline]
    pub fn is_direct(&self) -> bool {
        <G::Output as Word>::BITS == W::BITS
    }

    /// Return the next `W::BITS` uniform bits.
    #[inline]
    pub fn next_word(&mut self) -> W {
        let native = <G::Output as Word>::BITS;
        if native == W::BITS {
            return W::truncate(self.rng.generate().widen());
        }

        if native > W::BITS {
            if self.left == 0 {
                self.buf = self.rng.generate().widen();
                self.left = native / W::BITS;
            }
            let word = W::truncate(self.buf);
            // W::BITS < 64 on this branch
            self.buf >>= W::BITS;
            self.left -= 1;
            return word;
        }

        let mut acc = 0u64;
        let mut shift = 0;
        while shift < W::BITS {
            acc |= self.rng.generate().widen() << shift;
            shift += native;
        }
        W::truncate(acc)
    }
}

impl<G: BitGenerator + ?Sized, W: Word> fmt::Debug for BitsEngine<'_, G, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitsEngine")
            .field("native_bits", &<G::Output as Word>::BITS)
            .field("word_bits", &W::BITS)
            .field("buffered", &self.left)
            .finish()
    }
}
