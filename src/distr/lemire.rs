// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multiply-high rejection
//!
//! A widening multiply of a uniform word `x` by `range` puts a value in
//! `[0, range)` in the high word. The low word tells us whether `x` fell into
//! one of the `2^W mod range` over-represented positions, in which case it is
//! rejected. See Lemire, "Fast Random Integer Generation in an Interval",
//! <https://arxiv.org/abs/1805.10941>, and O'Neill,
//! <https://www.pcg-random.org/posts/bounded-rands.html>.

use super::utils::WideningMultiply;
use super::Word;
use crate::{BitGenerator, BitsEngine};

/// `2^W mod range`, the number of low words to reject.
///
/// `range` must be non-zero and below `2^(W-1)`.
#[inline]
pub(crate) fn threshold<W: Word>(range: W) -> W {
    // 2^W - 2 * range, which cannot wrap for range < 2^(W-1), is congruent
    // to 2^W and often already reduced
    let t = range.wrapping_neg().wrapping_sub(range);
    if t >= range {
        t % range
    } else {
        t
    }
}

/// Sample uniformly from `[0, range)` by widening multiply and rejection,
/// with O'Neill's refinements.
///
/// - If `range` covers at least half the word, plain rejection of `x >= range`
///   is cheaper and rejects less than half of the draws.
/// - Otherwise the threshold (which needs a division) is only computed when
///   the low word is below `range`; above it no rejection is possible.
///
/// `range` must be non-zero.
#[inline]
pub fn lemire_oneill<G, W>(engine: &mut BitsEngine<'_, G, W>, range: W) -> W
where
    G: BitGenerator + ?Sized,
    W: Word,
{
    debug_assert!(range != W::ZERO);
    let mut x = engine.next_word();
    if range > W::MAX >> 1 {
        while x >= range {
            x = engine.next_word();
        }
        return x;
    }

    let (mut hi, mut lo) = x.wmul(range);
    if lo < range {
        let t = threshold(range);
        while lo < t {
            (hi, lo) = engine.next_word().wmul(range);
        }
    }
    hi
}

/// Sample uniformly from `[0, range)` by widening multiply and rejection,
/// computing the threshold up front.
///
/// This is Lemire's method without the early exit of [`lemire_oneill`]; it
/// pays for a division on every call. It is kept as a reference point for
/// benchmarks and tests and is not selectable through
/// [`Strategy`](super::Strategy).
///
/// `range` must be non-zero.
#[inline]
pub fn lemire<G, W>(engine: &mut BitsEngine<'_, G, W>, range: W) -> W
where
    G: BitGenerator + ?Sized,
    W: Word,
{
    debug_assert!(range != W::ZERO);
    let t = range.wrapping_neg() % range;
    loop {
        let (hi, lo) = engine.next_word().wmul(range);
        if lo >= t {
            return hi;
        }
    }
}
