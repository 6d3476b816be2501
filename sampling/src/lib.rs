#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deck-based integer sampling with a bounded gap between repeated values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a sampler construction request is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum SamplerError {
    /// The sampling range must contain at least one value.
    #[error("sampling range must be greater than zero")]
    EmptyRange,
    /// The sampler needs at least one deck of values to draw from.
    #[error("deck count must be greater than zero")]
    EmptyDecks,
}

/// Integer sampler with an upper bound on the draws between repeated values.
///
/// The sampler works like a shuffled deck of cards: one card for every value
/// in `0..range`, `decks` copies of that deck shuffled together, served in
/// order, and reshuffled once exhausted. Every block of `range * decks`
/// draws therefore contains each value exactly `decks` times, which bounds
/// how long a value can go missing at `(range - 1) * decks` draws.
///
/// Storage is proportional to `range * decks`, so very large ranges are a
/// poor fit. Large deck counts (above roughly 10) make the output nearly
/// indistinguishable from a plain uniform sampler.
#[derive(Clone, Debug)]
pub struct ShuffleRandom<R> {
    rng: R,
    range: u32,
    decks: u32,
    // (key, value) pairs; shuffling draws fresh keys and sorts by them.
    slots: Vec<(f64, u32)>,
    cursor: usize,
}

impl<R: Rng> ShuffleRandom<R> {
    /// Creates a sampler drawing values in `0..range` from the provided
    /// generator, with `decks` copies of the range per shuffle.
    ///
    /// Fewer decks tighten the bound on the gap between repeats; more decks
    /// approximate uniform sampling more closely.
    pub fn new(rng: R, range: u32, decks: u32) -> Result<Self, SamplerError> {
        if range == 0 {
            return Err(SamplerError::EmptyRange);
        }
        if decks == 0 {
            return Err(SamplerError::EmptyDecks);
        }

        let slot_count = range as usize * decks as usize;
        Ok(Self {
            rng,
            range,
            decks,
            slots: vec![(0.0, 0); slot_count],
            cursor: slot_count,
        })
    }

    /// Draws the next value in `0..range`, reshuffling when the current
    /// deck stack is exhausted.
    pub fn next(&mut self) -> u32 {
        if self.cursor == self.slots.len() {
            self.shuffle();
        }

        let (_, value) = self.slots[self.cursor];
        self.cursor += 1;
        value
    }

    /// Exclusive upper bound of the sampling range.
    #[must_use]
    pub const fn range(&self) -> u32 {
        self.range
    }

    /// Number of repetitions of the range per shuffle.
    #[must_use]
    pub const fn decks(&self) -> u32 {
        self.decks
    }

    fn shuffle(&mut self) {
        let range = self.range as usize;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = (self.rng.gen(), (index % range) as u32);
        }

        // Fresh continuous keys make ties vanishingly unlikely, and the sort
        // is stable regardless, so sorting by key is a fair shuffle.
        self.slots.sort_by(|left, right| left.0.total_cmp(&right.0));
        self.cursor = 0;
    }
}

impl ShuffleRandom<ChaCha8Rng> {
    /// Creates a deterministically seeded sampler.
    ///
    /// Two samplers built from the same seed, range, and deck count produce
    /// identical draw streams.
    pub fn from_seed(seed: u64, range: u32, decks: u32) -> Result<Self, SamplerError> {
        Self::new(ChaCha8Rng::seed_from_u64(seed), range, decks)
    }
}
