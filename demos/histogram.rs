// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sample `[0, 199]` with `rand`'s `Uniform` and with `UniformFast`, printing
//! bounds, the histogram and the elapsed time of each run.
//!
//! Usage: `cargo run --release --example histogram [draws]`

use std::time::Instant;

use rand::distr::{Distribution, Uniform};
use rand::SeedableRng;
use rand_bounded::{Strategy, UniformFast};
use rand_xoshiro::SplitMix64;

const LOW: u32 = 0;
const HIGH: u32 = 199;

fn run<D: Distribution<u32>>(name: &str, dist: &D, rng: &mut SplitMix64, draws: u64) {
    let mut freq = [0u64; (HIGH - LOW + 1) as usize];
    let start = Instant::now();
    for _ in 0..draws {
        freq[(dist.sample(rng) - LOW) as usize] += 1;
    }
    let elapsed = start.elapsed();

    // Welford running mean and variance over the drawn values
    let (mut n, mut mean, mut m2) = (0u64, 0f64, 0f64);
    for (v, &c) in freq.iter().enumerate() {
        for _ in 0..c {
            n += 1;
            let delta = v as f64 - mean;
            mean += delta / n as f64;
            m2 += delta * (v as f64 - mean);
        }
    }
    let variance = if n > 1 { m2 / (n - 1) as f64 } else { 0.0 };

    println!("{}: [{}, {}]", name, LOW, HIGH);
    let counts: Vec<String> = freq.iter().map(|c| c.to_string()).collect();
    println!("{}", counts.join(" "));
    println!("{} ms", elapsed.as_millis());
    let (min, max) = (
        freq.iter().copied().min().unwrap_or(0),
        freq.iter().copied().max().unwrap_or(0),
    );
    println!(
        "mean {:.4} variance {:.4} bucket min {} max {}\n",
        mean, variance, min, max
    );
}

fn main() {
    let draws = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000_000u64);
    let mut rng = SplitMix64::from_rng(&mut rand::rng());

    let std_dist = Uniform::new_inclusive(LOW, HIGH).unwrap();
    let fast = UniformFast::new(LOW, HIGH);
    let bitmask = fast.with_strategy(Strategy::Bitmask);

    for _ in 0..2 {
        run("rand::distr::Uniform", &std_dist, &mut rng, draws);
        run("UniformFast (multiply-high)", &fast, &mut rng, draws);
        run("UniformFast (bitmask)", &bitmask, &mut rng, draws);
    }
}
