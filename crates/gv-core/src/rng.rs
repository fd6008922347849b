//! Deterministic RNG wrapper for grid-level randomness.
//!
//! The visualiser uses randomness in exactly two places: picking which
//! surplus nodes leave an over-represented category, and reshuffling node
//! positions when the sorted view is switched off.  Both run on the single
//! control thread, so one seeded `SmallRng` is enough.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by the visualiser.
pub struct GridRng(SmallRng);

impl GridRng {
    pub fn new(seed: u64) -> Self {
        GridRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Gather a uniform random sample of `amount` elements (without
    /// replacement) into one end of `slice` and return it.
    ///
    /// Only `amount` Fisher-Yates steps run, so the cost is O(amount) rather
    /// than O(len).  `amount` is clamped to `slice.len()`.
    #[inline]
    pub fn sample_prefix<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a [T] {
        let amount = amount.min(slice.len());
        let (chosen, _rest) = slice.partial_shuffle(&mut self.0, amount);
        chosen
    }
}
