//! Injectable randomness for game draws
//!
//! Games never call an ambient random-number function. They hold a
//! `DrawSource` and ask it for indices, so tests can substitute a seeded or
//! fully scripted source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniform random draws
pub trait DrawSource: Send + Sync {
    /// Pick an index uniformly from `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<D: DrawSource + ?Sized> DrawSource for Box<D> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Choose one element of `items` uniformly, `None` when empty
pub fn choose<'a, T, D>(source: &mut D, items: &'a [T]) -> Option<&'a T>
where
    D: DrawSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

/// ChaCha-backed draw source
///
/// Seeding with the same value replays the same sequence of draws, which is
/// what makes whole sessions reproducible.
#[derive(Debug, Clone)]
pub struct SeededDraw {
    rng: ChaCha20Rng,
}

impl SeededDraw {
    /// Deterministic source for tests and replays
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl Default for SeededDraw {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DrawSource for SeededDraw {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
