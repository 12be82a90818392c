// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(dead_code)]

use rand_bounded::{BitGenerator, SampleBounded, UniformFast, Word};
use special::Gamma;

/// Number of values in the range of `dist`, with the full domain as `2^BITS`.
pub fn width<T: SampleBounded>(dist: &UniformFast<T>) -> u128 {
    let range = dist.param().range();
    if range == <T::Unsigned as Word>::ZERO {
        1u128 << <T::Unsigned as Word>::BITS
    } else {
        range.widen() as u128
    }
}

/// Offset of `v` from the lower bound of `dist`.
pub fn offset<T: SampleBounded>(dist: &UniformFast<T>, v: T) -> u128 {
    v.to_unsigned()
        .wrapping_sub(dist.lower_bound().to_unsigned())
        .widen() as u128
}

/// Observed counts and expected probabilities of `bins` contiguous bins
/// spanning the range of `dist`.
///
/// Bin `i` holds the offsets `x` with `x * bins / width == i`. When the width
/// is not a multiple of `bins` the bins differ in size by one, which the
/// probabilities account for.
pub struct Binned {
    pub counts: Vec<u64>,
    pub probs: Vec<f64>,
}

pub fn sample_binned<T, G>(dist: &UniformFast<T>, rng: &mut G, bins: usize, n: u64) -> Binned
where
    T: SampleBounded,
    G: BitGenerator + ?Sized,
{
    let w = width(dist);
    let k = bins as u128;
    assert!(k <= w);

    let mut counts = vec![0u64; bins];
    for _ in 0..n {
        let v = dist.sample(rng);
        let x = offset(dist, v);
        assert!(x < w, "{:?} out of bounds {:?}", v, dist.bounds());
        counts[(x * k / w) as usize] += 1;
    }

    let start = |i: u128| (i * w + k - 1) / k;
    let probs = (0..k)
        .map(|i| (start(i + 1) - start(i)) as f64 / w as f64)
        .collect();
    Binned { counts, probs }
}

/// Pearson's chi-square statistic of `counts` against `probs`.
pub fn chi_square(counts: &[u64], probs: &[f64]) -> f64 {
    assert_eq!(counts.len(), probs.len());
    let n: u64 = counts.iter().sum();
    counts
        .iter()
        .zip(probs)
        .map(|(&c, &p)| {
            let e = n as f64 * p;
            let d = c as f64 - e;
            d * d / e
        })
        .sum()
}

/// Upper tail probability of the chi-square distribution with `dof` degrees
/// of freedom.
pub fn chi_square_p_value(stat: f64, dof: usize) -> f64 {
    let k = dof as f64;
    1.0 - (stat / 2.0).inc_gamma(k / 2.0)
}

impl Binned {
    pub fn p_value(&self) -> f64 {
        chi_square_p_value(chi_square(&self.counts, &self.probs), self.counts.len() - 1)
    }
}

/// Running mean and variance (Welford's algorithm), with extremes.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    n: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ..Default::default()
        }
    }

    pub fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance; `0` with fewer than two values.
    pub fn variance(&self) -> f64 {
        if self.n < 2 {
            0.0
        } else {
            self.m2 / (self.n - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Counts calls to the wrapped generator.
#[derive(Debug)]
pub struct Counting<G> {
    pub inner: G,
    pub calls: u64,
}

impl<G: BitGenerator> Counting<G> {
    pub fn new(inner: G) -> Self {
        Counting { inner, calls: 0 }
    }
}

impl<G: BitGenerator> BitGenerator for Counting<G> {
    type Output = G::Output;

    fn generate(&mut self) -> G::Output {
        self.calls += 1;
        self.inner.generate()
    }
}

/// A 16-bit native generator: the low half of each `Pcg32` output.
#[derive(Clone, Debug)]
pub struct Narrow16(pub rand_pcg::Pcg32);

impl BitGenerator for Narrow16 {
    type Output = u16;

    fn generate(&mut self) -> u16 {
        rand_core::RngCore::next_u32(&mut self.0) as u16
    }
}

/// A 32-bit native generator over `Pcg32`.
#[derive(Clone, Debug)]
pub struct Native32(pub rand_pcg::Pcg32);

impl BitGenerator for Native32 {
    type Output = u32;

    fn generate(&mut self) -> u32 {
        rand_core::RngCore::next_u32(&mut self.0)
    }
}
