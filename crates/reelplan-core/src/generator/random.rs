//! Injectable randomness for the plan generator.
//!
//! Every random pick the generator makes goes through a [`RandomSource`], so
//! callers decide between real variety ([`ThreadRandom`]), reproducible runs
//! ([`SeededRandom`]) and fully pinned output ([`FirstChoice`],
//! [`SequenceRandom`]).

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy producing indices for random choices.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Pick one of `options`, or `fallback` if there are none.
///
/// An empty slice never consumes a value from the source.
///
/// ```rust
/// use reelplan_core::generator::{choose, FirstChoice};
///
/// let mut rng = FirstChoice;
/// assert_eq!(choose(&["POV", "If you're"], "POV", &mut rng), "POV");
/// assert_eq!(choose(&[], "fallback", &mut rng), "fallback");
/// ```
pub fn choose<T: Clone>(options: &[T], fallback: T, rng: &mut dyn RandomSource) -> T {
    if options.is_empty() {
        return fallback;
    }
    let index = rng.next_index(options.len()) % options.len();
    options[index].clone()
}

/// Thread-local generator from `rand`; the default source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded generator; the same seed yields the same sequence of picks.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the first option.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Replays a fixed list of indices, starting over when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index
    }
}
