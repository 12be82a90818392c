// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased bounded integer sampling.
//!
//! [`UniformFast`] draws integers uniformly from a closed range `[a, b]`
//! using exact rejection methods: every value of the range is equally
//! likely, for any range width, including the whole domain of the type.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_bounded::UniformFast;
//!
//! let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
//! let dist = UniformFast::new(0u32, 199);
//! let x = dist.sample(&mut rng);
//! assert!(x <= 199);
//! ```
//!
//! `UniformFast` implements [`rand::distr::Distribution`], so it can be used
//! with [`Rng::sample`](rand::Rng::sample) and
//! [`sample_iter`](rand::distr::Distribution::sample_iter) like any other
//! distribution. Sampling needs only a [`BitGenerator`], which every `rand`
//! RNG is; generators with a native width of 16 or 32 bits are supported by
//! implementing that trait.
//!
//! # Crate features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]
//! - `log`: emits `trace`/`debug` records through the `log` crate when a
//!   distribution is constructed

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_debug_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod log_macros;

pub mod distr;
mod engine;
mod error;

pub use distr::{Param, SampleBounded, Strategy, UniformFast, Word};
pub use engine::{BitGenerator, BitsEngine};
pub use error::Error;
