use std::collections::HashMap;

use crate::math::polynomial::Polynomial;
use crate::spatial::board::BoardKey;

/// Memoization cache from board state to rook polynomial
///
/// Scoped to a single top-level solve: boards of one solve share
/// dimensions, so the row masks alone are a collision-free key.
#[derive(Default, Debug)]
pub struct PolynomialCache {
    /// Board state to polynomial mapping
    entries: HashMap<BoardKey, Polynomial>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl PolynomialCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a board state, recording a hit or a miss
    pub fn lookup(&mut self, key: &[u128]) -> Option<&Polynomial> {
        let found = self.entries.get(key);
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Store the polynomial of a board state
    ///
    /// Entries are write-once: a repeated insert keeps the first value,
    /// which is identical for a deterministic solver.
    pub fn insert(&mut self, key: BoardKey, polynomial: Polynomial) {
        self.entries.entry(key).or_insert(polynomial);
    }

    /// Number of cached board states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
