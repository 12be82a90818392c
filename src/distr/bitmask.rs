// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bitmask rejection

use super::Word;
use crate::{BitGenerator, BitsEngine};

/// Sample uniformly from `[0, range)` by masking and rejection.
///
/// Each word is masked down to the smallest all-ones pattern covering
/// `range - 1`; values above `range - 1` are rejected. Since the mask is less
/// than twice the range, every attempt succeeds with probability above one
/// half, and a power-of-two `range` never rejects.
///
/// When the mask is at most half as wide as the word, a rejected word still
/// holds unused high bits. These are tried at offsets `W/2`, `3W/4`, `7W/8`,
/// … (each window disjoint from the previous ones) before a new word is drawn.
///
/// `range` must be non-zero.
#[inline]
pub fn bitmask<G, W>(engine: &mut BitsEngine<'_, G, W>, range: W) -> W
where
    G: BitGenerator + ?Sized,
    W: Word,
{
    debug_assert!(range != W::ZERO);
    let n = range.wrapping_sub(W::ONE);
    // `| 1` keeps the shift in bounds for n == 0
    let zeros = (n | W::ONE).leading_zeros();
    let mask = if n == W::ZERO { W::ZERO } else { W::MAX >> zeros };

    loop {
        let r = engine.next_word();
        let v = r & mask;
        if v <= n {
            return v;
        }

        let mut shift = W::BITS / 2;
        while zeros >= shift {
            let v = (r >> shift) & mask;
            if v <= n {
                return v;
            }
            shift = W::BITS - (W::BITS - shift) / 2;
        }
    }
}
