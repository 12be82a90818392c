// Copyright 2018-2026 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `UniformFast` implementation

use core::ops::RangeInclusive;

use rand::distr::Distribution;
use rand::Rng;

use super::{Param, SampleBounded, Strategy, Word};
use crate::{BitGenerator, BitsEngine, Error};

/// Sample integers uniformly from a closed range `[a, b]`.
///
/// Values are produced without modulo bias by one of the rejection methods
/// of [`Strategy`]. Result types are the 16-, 32- and 64-bit integers
/// ([`SampleBounded`]); the bounds can be anything with `a <= b`, including
/// `a == b` (a single outcome) and the whole domain of the type, for which
/// sampling is a plain reinterpretation of the generator's output.
///
/// A `UniformFast` is an immutable value once built (bounds can only be
/// replaced as a whole with [`set_param`]) and holds no generator; each call
/// to [`sample`] borrows one.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_bounded::{Strategy, UniformFast};
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let die = UniformFast::new(1u32, 6);
/// let roll = die.sample(&mut rng);
/// assert!((1..=6).contains(&roll));
///
/// let dist = UniformFast::new(-1000i64, 1000).with_strategy(Strategy::Bitmask);
/// assert_eq!((dist.lower_bound(), dist.upper_bound()), (-1000, 1000));
/// ```
///
/// [`set_param`]: UniformFast::set_param
/// [`sample`]: UniformFast::sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformFast<T: SampleBounded> {
    param: Param<T>,
    strategy: Strategy,
}

impl<T: SampleBounded> UniformFast<T> {
    /// Sample from the closed range `[a, b]`.
    ///
    /// # Panics
    ///
    /// If `a > b`; see [`try_new`](UniformFast::try_new) for a fallible
    /// variant.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        assert!(a <= b, "UniformFast::new called with `low > high`");
        Self::from_param(Param::new(a, b))
    }

    /// Sample from the closed range `[a, b]`, or [`Error::EmptyRange`] if
    /// `a > b`.
    #[inline]
    pub fn try_new(a: T, b: T) -> Result<Self, Error> {
        Param::try_new(a, b).map(Self::from_param)
    }

    /// Sample from `[a, T::MAX]`.
    #[inline]
    pub fn from_low(a: T) -> Self {
        Self::from_param(Param::new(a, T::MAX))
    }

    /// Sample from every value of `T`.
    #[inline]
    pub fn full() -> Self {
        Self::from_param(Param::full())
    }

    /// Sample with the given bounds and the preferred strategy for `T`.
    #[inline]
    pub fn from_param(param: Param<T>) -> Self {
        let strategy = Strategy::preferred(<T::Unsigned as Word>::BITS);
        trace!(
            "UniformFast: [{:?}, {:?}] using {:?}",
            param.a(),
            param.b(),
            strategy
        );
        UniformFast { param, strategy }
    }

    /// Use `strategy` instead of the preferred one.
    #[inline]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        if strategy != self.strategy {
            debug!(
                "UniformFast: strategy {:?} replaced by {:?}",
                self.strategy, strategy
            );
        }
        self.strategy = strategy;
        self
    }

    /// The strategy used by [`sample`](UniformFast::sample).
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The inclusive lower bound.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.param.a()
    }

    /// The inclusive upper bound.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.param.b()
    }

    /// Both bounds, `(a, b)`.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.param.a(), self.param.b())
    }

    /// Replace both bounds.
    ///
    /// # Panics
    ///
    /// If `a > b`, leaving the distribution unchanged.
    #[inline]
    pub fn set_bounds(&mut self, (a, b): (T, T)) {
        self.param = Param::new(a, b);
    }

    /// The current bounds.
    #[inline]
    pub fn param(&self) -> Param<T> {
        self.param
    }

    /// Replace the current bounds; the strategy is kept.
    #[inline]
    pub fn set_param(&mut self, param: Param<T>) {
        self.param = param;
    }

    /// Draw a value from `rng`.
    ///
    /// Any [`BitGenerator`] works, including every `rand` RNG; the
    /// [`Distribution`] implementation forwards here.
    #[inline]
    pub fn sample<G: BitGenerator + ?Sized>(&self, rng: &mut G) -> T {
        let mut engine = BitsEngine::<G, T::Unsigned>::new(rng);
        let range = self.param.range();
        if range == <T::Unsigned as Word>::ZERO {
            // every bit pattern is a valid result
            return T::from_unsigned(engine.next_word());
        }

        let offset = self.strategy.reduce(&mut engine, range);
        T::from_unsigned(self.param.a().to_unsigned().wrapping_add(offset))
    }
}

impl<T: SampleBounded> Default for UniformFast<T> {
    fn default() -> Self {
        Self::full()
    }
}

impl<T: SampleBounded> Distribution<T> for UniformFast<T> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        UniformFast::sample(self, rng)
    }
}

impl<T: SampleBounded> TryFrom<RangeInclusive<T>> for UniformFast<T> {
    type Error = Error;

    fn try_from(r: RangeInclusive<T>) -> Result<Self, Error> {
        let (a, b) = r.into_inner();
        Self::try_new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Counting;
    use rand_core::RngCore;

    #[test]
    fn test_integers() {
        let mut rng = crate::test::rng(251);
        macro_rules! t {
            ($ty:ident, $v:expr) => {{
                for &(low, high) in $v.iter() {
                    for &strategy in [Strategy::Bitmask, Strategy::MultiplyHigh].iter() {
                        let dist = UniformFast::new(low, high).with_strategy(strategy);
                        for _ in 0..1000 {
                            let v: $ty = dist.sample(&mut rng);
                            assert!(low <= v && v <= high);
                        }
                    }
                }
            }};

            ($($ty:ident),*) => {{
                $(t!(
                    $ty,
                    [
                        (0, 10),
                        (10, 127),
                        ($ty::MIN, $ty::MAX),
                        ($ty::MIN, $ty::MIN),
                        ($ty::MAX, $ty::MAX),
                        ($ty::MIN + 1, $ty::MAX),
                        ($ty::MAX / 2, $ty::MAX),
                        ($ty::MIN, $ty::MAX / 2 + 1)
                    ]
                );)*
            }};
        }
        t!(i16, i32, i64, u16, u32, u64);
        t!(i16, [(-10, -1), (-300, 300)]);
        t!(i64, [(-1, 1), (i64::MIN, -1)]);
    }

    #[test]
    fn test_good_limits_equal() {
        let mut rng = Counting::new(crate::test::rng(804));
        let dist = UniformFast::new(10i32, 10);
        for _ in 0..20 {
            assert_eq!(dist.sample(&mut rng), 10);
        }
        assert_eq!(rng.calls, 20);
    }

    #[test]
    fn test_bad_limits() {
        assert_eq!(UniformFast::try_new(10u16, 5), Err(Error::EmptyRange));
        assert_eq!(UniformFast::try_new(0i64, -1), Err(Error::EmptyRange));
        assert!(UniformFast::try_new(5u32, 5).is_ok());
    }

    #[test]
    #[should_panic(expected = "low > high")]
    fn test_new_flipped_panics() {
        let _ = UniformFast::new(10u32, 9);
    }

    #[test]
    fn test_full_range_is_identity() {
        let mut a = crate::test::rng(3);
        let mut b = crate::test::rng(3);
        let d64 = UniformFast::<u64>::full();
        let d32 = UniformFast::new(i32::MIN, i32::MAX);
        let d16 = UniformFast::<u16>::default();
        for _ in 0..100 {
            assert_eq!(d64.sample(&mut a), b.next_u64());
            assert_eq!(d32.sample(&mut a), b.next_u64() as u32 as i32);
            assert_eq!(d16.sample(&mut a), b.next_u64() as u16);
        }
    }

    #[test]
    fn test_bounds_accessors() {
        let dist = UniformFast::new(-3i16, 300);
        assert_eq!(dist.lower_bound(), -3);
        assert_eq!(dist.upper_bound(), 300);
        assert_eq!(dist.bounds(), (-3, 300));
        assert_eq!(dist.param().range(), 304);

        assert_eq!(UniformFast::<i64>::full().bounds(), (i64::MIN, i64::MAX));
        assert_eq!(UniformFast::from_low(7u32).bounds(), (7, u32::MAX));
        assert_eq!(UniformFast::from_low(i16::MIN).param(), Param::full());
    }

    #[test]
    fn test_replace_bounds() {
        let mut dist = UniformFast::new(0u64, 1).with_strategy(Strategy::Bitmask);
        dist.set_bounds((100, 200));
        assert_eq!(dist.bounds(), (100, 200));
        assert_eq!(dist.strategy(), Strategy::Bitmask);

        dist.set_param(Param::full());
        assert_eq!(dist.bounds(), (0, u64::MAX));

        let other = UniformFast::new(5u64, 6);
        dist.set_param(other.param());
        assert_eq!(dist.param(), other.param());

        let mut rng = crate::test::rng(17);
        for _ in 0..100 {
            assert!((5..=6).contains(&dist.sample(&mut rng)));
        }
    }

    #[test]
    #[should_panic(expected = "low > high")]
    fn test_set_bounds_flipped_panics() {
        let mut dist = UniformFast::new(0i32, 10);
        dist.set_bounds((1, 0));
    }

    #[test]
    fn test_strategy_selection() {
        let dist = UniformFast::new(0u32, 9);
        assert_eq!(dist.strategy(), Strategy::preferred(32));
        let dist = dist.with_strategy(Strategy::Bitmask);
        assert_eq!(dist.strategy(), Strategy::Bitmask);
        assert_eq!(dist.bounds(), (0, 9));
    }

    #[test]
    fn test_distribution_trait() {
        use rand::Rng;

        let mut rng = crate::test::rng(99);
        let dist = UniformFast::new(1u16, 6);
        let v: u16 = rng.sample(dist);
        assert!((1..=6).contains(&v));
        let rolls: [u16; 8] = core::array::from_fn(|_| Distribution::sample(&dist, &mut rng));
        assert!(rolls.iter().all(|x| (1..=6).contains(x)));
        assert!(dist.sample_iter(&mut rng).take(100).all(|x| (1..=6).contains(&x)));
    }

    #[test]
    fn test_from_range_inclusive() {
        let dist = UniformFast::try_from(2u32..=6).unwrap();
        assert_eq!(dist.param().a(), 2);
        assert_eq!(dist.param().range(), 5);
        assert_eq!(UniformFast::try_from(i64::MIN..=i64::MAX), Ok(UniformFast::full()));
    }

    #[test]
    fn test_from_range_inclusive_bad_limits() {
        #![allow(clippy::reversed_empty_ranges)]
        assert_eq!(UniformFast::try_from(100u32..=10), Err(Error::EmptyRange));
        assert_eq!(UniformFast::try_from(0i16..=-1), Err(Error::EmptyRange));
    }

    #[test]
    fn test_narrow_generator() {
        // a 32-bit native source must be widened for i64 results
        let mut rng = Counting::new(crate::test::Lcg32::new(1));
        let dist = UniformFast::new(-5i64, 5);
        for _ in 0..100 {
            assert!((-5..=5).contains(&dist.sample(&mut rng)));
        }
        assert!(rng.calls >= 200);

        let full = UniformFast::<u64>::full();
        let mut a = crate::test::Lcg32::new(2);
        let mut b = a.clone();
        let v = full.sample(&mut a);
        let (lo, hi) = (b.generate() as u64, b.generate() as u64);
        assert_eq!(v, hi << 32 | lo);
    }
}
