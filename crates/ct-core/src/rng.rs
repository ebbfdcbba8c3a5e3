//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole run draws from one `SmallRng` seeded from the configured seed.
//! The simulation is single-threaded and updates agents in a fixed order, so
//! a single stream is enough for bit-identical reruns: same seed, same
//! configuration, same history.
//!
//! The handle is passed explicitly (`&mut SimRng`) to every call site that
//! samples, so there is no ambient global random source anywhere in the
//! workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Not `Sync`: one simulation, one owner.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Bernoulli trial: `true` with probability `p` (clamped to [0, 1]).
    ///
    /// Amplified infection probabilities may exceed 1; they saturate here.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Sample `amount` distinct indices from `0..length` without replacement,
    /// in sampled order.
    ///
    /// # Panics
    /// Panics if `amount > length`; callers validate first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
