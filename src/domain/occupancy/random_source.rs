use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the uniform draws used by the occupancy randomizer.
///
/// Production code uses [`RngSource`]. Tests plug in a scripted source to get exact
/// snapshots.
pub trait RandomSource: std::fmt::Debug {
    /// A uniformly distributed index in `[0, upper)`. `upper` is always at least 1.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Draws from the thread-local generator.
    pub fn thread() -> Self {
        RngSource::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + std::fmt::Debug> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut source = RngSource::seeded(7);
        for upper in 1..=12 {
            for _ in 0..50 {
                assert!(source.next_index(upper) < upper);
            }
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut first = RngSource::seeded(42);
        let mut second = RngSource::seeded(42);

        let a: Vec<usize> = (0..20).map(|_| first.next_index(10)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.next_index(10)).collect();

        assert_eq!(a, b);
    }
}
