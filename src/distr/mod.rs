// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded integer sampling.
//!
//! The entry point is [`UniformFast`], a [`Distribution`] over a closed
//! integer range. It is built from:
//!
//! - [`Param`], the bounds of the range, with a width of `0` standing for the
//!   whole domain of the result type;
//! - two exact range reductions, [`bitmask`] and [`lemire_oneill`], chosen
//!   through [`Strategy`];
//! - the [`BitsEngine`](crate::BitsEngine), which feeds the reductions words
//!   of the result's width whatever the generator's native width is.
//!
//! [`lemire`] is the textbook multiply-high method without early exit, kept
//! for comparison.
//!
//! [`Distribution`]: rand::distr::Distribution

mod bitmask;
mod lemire;
mod param;
mod strategy;
mod uniform_fast;
pub(crate) mod utils;

pub use self::bitmask::bitmask;
pub use self::lemire::{lemire, lemire_oneill};
pub use self::param::{Param, SampleBounded};
pub use self::strategy::Strategy;
pub use self::uniform_fast::UniformFast;
pub use self::utils::{WideningMultiply, Word};
