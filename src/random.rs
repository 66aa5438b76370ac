//! Random index providers used for secret word selection.
//!
//! The engine asks for exactly one index per random `new_game`, so any
//! source that can produce a value in `0..len` will do. Tests and scripted
//! runs use [`SeededSource`] or [`FixedSource`] to make selection repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies an index into the word pool.
pub trait IndexSource {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic uniform selection: the same seed yields the same words.
#[derive(Debug, Clone)]
pub struct SeededSource {
    inner: StdRng,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping each into range.
///
/// Cycles through `indices`; an empty list always yields 0.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedSource {
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl IndexSource for FixedSource {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}
