// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Choice of range reduction

use super::{bitmask, lemire_oneill, Word};
use crate::{BitGenerator, BitsEngine};

/// The debiasing algorithm used by a [`UniformFast`](super::UniformFast).
///
/// Both produce exactly uniform output; they differ in cost. `MultiplyHigh`
/// spends one widening multiply per draw and rarely rejects, `Bitmask` only
/// masks and shifts but rejects more often. Which one wins depends on the
/// target's multiplier, so the choice is an explicit value rather than being
/// inferred; benchmark with `cargo bench` when in doubt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Mask to the next power of two and reject, see [`bitmask`].
    Bitmask,
    /// Lemire's widening multiply with O'Neill's early exit, see
    /// [`lemire_oneill`].
    MultiplyHigh,
}

impl Strategy {
    /// The default strategy for `bits`-wide results on the current target.
    ///
    /// This is `MultiplyHigh`, unless the double-width product does not fit
    /// in a native register pair (64-bit results on targets with pointers
    /// narrower than 64 bits), where `Bitmask` avoids the emulated multiply.
    pub const fn preferred(bits: u32) -> Self {
        if bits > usize::BITS {
            Strategy::Bitmask
        } else {
            Strategy::MultiplyHigh
        }
    }

    /// Reduce words from `engine` to a uniform value in `[0, range)`.
    ///
    /// `range` must be non-zero.
    #[inline]
    pub fn reduce<G, W>(self, engine: &mut BitsEngine<'_, G, W>, range: W) -> W
    where
        G: BitGenerator + ?Sized,
        W: Word,
    {
        match self {
            Strategy::Bitmask => bitmask(engine, range),
            Strategy::MultiplyHigh => lemire_oneill(engine, range),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::MultiplyHigh
    }
}
