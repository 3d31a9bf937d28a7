//! Deck id allocation.
//!
//! Ids come from a seeded ChaCha8 stream, so a controller built with the
//! same seed hands out the same ids. Tests rely on that; production seeds
//! from the clock.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::DeckId;

/// Deterministic deck id source.
#[derive(Clone, Debug)]
pub struct DeckIdAllocator {
    inner: ChaCha8Rng,
    seed: u64,
    issued: u64,
}

impl DeckIdAllocator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            issued: 0,
        }
    }

    /// Next id. Never zero.
    pub fn next_id(&mut self) -> DeckId {
        self.issued += 1;
        DeckId::new(self.inner.gen_range(1..=u64::MAX))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
