//! RNG module - 7-bag piece supply
//!
//! A bag holds one of each of the seven kinds in shuffled order. Pieces are
//! taken from the end of the bag; once the last one is taken a fresh bag is
//! shuffled immediately, so the bag is never empty between calls and
//! [`PieceSupply::peek_kind`] never has to touch the RNG.
//!
//! The shuffle is driven by a seeded ChaCha8 generator: the same seed always
//! produces the same piece sequence.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Seeded 7-bag randomizer
#[derive(Debug, Clone)]
pub struct PieceSupply {
    bag: ArrayVec<PieceKind, 7>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl PieceSupply {
    /// Create a supply with the given seed and a freshly shuffled bag
    pub fn new(seed: u64) -> Self {
        let mut supply = Self {
            bag: ArrayVec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        };
        supply.refill();
        supply
    }

    /// Create a supply seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
    }

    /// Take the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let last = self.bag.len() - 1;
        let kind = self.bag[last];
        self.bag.truncate(last);
        if self.bag.is_empty() {
            self.refill();
        }
        kind
    }

    /// The kind the next call to [`next_kind`](Self::next_kind) returns
    pub fn peek_kind(&self) -> PieceKind {
        self.bag[self.bag.len() - 1]
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Seed this supply was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceSupply {
    fn default() -> Self {
        Self::new(1)
    }
}
